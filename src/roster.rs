//! Roster registry.
//!
//! [`Roster`] owns every registered [`repr::Member`] and every
//! [`repr::Location`], addressed by the indices in [`repr::idx`].
//! Registration keys on names: a duplicate name is a redefinition
//! error, and looking up an unregistered name fails with the name in
//! the error.

prelude! {
    repr::{Location, Member},
}

/// Index-addressed registry of members and sites.
pub struct Roster {
    members: idx::MemberMap<Member>,
    name_to_member: HashMap<String, idx::Member>,
    sites: idx::SiteMap<Location>,
    name_to_site: HashMap<String, idx::Site>,
}

impl std::ops::Index<idx::Member> for Roster {
    type Output = Member;
    fn index(&self, idx: idx::Member) -> &Self::Output {
        &self.members[idx]
    }
}
impl std::ops::IndexMut<idx::Member> for Roster {
    fn index_mut(&mut self, idx: idx::Member) -> &mut Self::Output {
        &mut self.members[idx]
    }
}

impl std::ops::Index<idx::Site> for Roster {
    type Output = Location;
    fn index(&self, idx: idx::Site) -> &Self::Output {
        &self.sites[idx]
    }
}

impl Roster {
    /// Constructor.
    pub fn with_capacity(member_capa: usize, site_capa: usize) -> Self {
        Self {
            members: idx::MemberMap::with_capacity(member_capa),
            name_to_member: HashMap::with_capacity(member_capa),
            sites: idx::SiteMap::with_capacity(site_capa),
            name_to_site: HashMap::with_capacity(site_capa),
        }
    }
    pub fn new() -> Self {
        Self::with_capacity(7, 3)
    }

    /// Members appear in the order they were added in.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
    pub fn member_indices<'me>(&'me self) -> impl Iterator<Item = idx::Member> + 'me {
        self.members.indices()
    }
    pub fn teaching_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.teaches())
    }
    pub fn studying_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.studies())
    }

    /// Sites appear in the order they were added in.
    pub fn sites(&self) -> &[Location] {
        &self.sites
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.sites.is_empty()
    }

    /// Registers a member, keyed by its name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! {}
    /// let mut roster = Roster::new();
    /// let ana = repr::Student::new("Ana", 20, "none", "A").expect("valid age");
    /// let a_idx = roster.add_member(ana).expect("fresh name");
    /// assert_eq!(roster[a_idx].person().name(), "Ana");
    ///
    /// let err = roster
    ///     .add_member(repr::Student::new("Ana", 23, "none", "C").expect("valid age"))
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("illegal redefinition of member `Ana`"));
    /// ```
    pub fn add_member(&mut self, member: impl Into<Member>) -> Res<idx::Member> {
        let member = member.into();
        let name = member.person().name().to_string();

        if let Some(prev) = self.name_to_member.get(&name) {
            let note = format!("existing member `{}` has index `#{}`", name, prev);
            return Err(error!(@redef("member") name).with_context(note));
        }

        let m_idx = self.members.push_idx(|_idx| member);
        log::debug!("registered member `{}` as `#{}`", name, m_idx);
        let _prev = self.name_to_member.insert(name, m_idx);
        debug_assert!(_prev.is_none());
        Ok(m_idx)
    }

    /// Index of the member registered under `name`.
    pub fn member_idx(&self, name: impl AsRef<str>) -> Res<idx::Member> {
        let name = name.as_ref();
        self.name_to_member
            .get(name)
            .cloned()
            .ok_or_else(|| error!(@unknown("member") name))
    }

    /// Detail line for the member registered under `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! {}
    /// let mut roster = Roster::new();
    /// let bo = repr::Professor::new("Bo", 40, "prof", vec!["CS101".to_string()])
    ///     .expect("valid age");
    /// roster.add_member(bo).expect("fresh name");
    /// assert_eq!(
    ///     roster.describe_member("Bo").expect("registered"),
    ///     "Name: Bo, Age: 40, Job: prof, Courses: [\"CS101\"]",
    /// );
    /// ```
    pub fn describe_member(&self, name: impl AsRef<str>) -> Res<String> {
        let name = name.as_ref();
        let m_idx = self
            .member_idx(name)
            .context(|| format!("describing member `{}`", name))?;
        Ok(self.members[m_idx].describe())
    }

    /// Registers a site, keyed by its name.
    pub fn add_site(&mut self, site: Location) -> Res<idx::Site> {
        let name = site.name().to_string();

        if let Some(prev) = self.name_to_site.get(&name) {
            let note = format!("existing site `{}` has index `#{}`", name, prev);
            return Err(error!(@redef("site") name).with_context(note));
        }

        let s_idx = self.sites.push_idx(|_idx| site);
        log::debug!("registered site `{}` as `#{}`", name, s_idx);
        let _prev = self.name_to_site.insert(name, s_idx);
        debug_assert!(_prev.is_none());
        Ok(s_idx)
    }

    /// Index of the site registered under `name`.
    pub fn site_idx(&self, name: impl AsRef<str>) -> Res<idx::Site> {
        let name = name.as_ref();
        self.name_to_site
            .get(name)
            .cloned()
            .ok_or_else(|| error!(@unknown("site") name))
    }

    /// Indices of members whose name matches `re`, in index order.
    pub fn find_members(&self, re: &regex::Regex) -> Vec<idx::Member> {
        let mut res: Vec<idx::Member> = self
            .name_to_member
            .iter()
            .filter(|(name, _)| re.is_match(name))
            .map(|(_, m_idx)| *m_idx)
            .collect();
        res.sort();
        res
    }

    pub fn to_pretty_string(&self) -> String {
        let mut res = String::with_capacity(113);
        res.push_str(&format!(
            "roster ({} members, {} sites)",
            self.members.len(),
            self.sites.len()
        ));
        for member in self.members.iter() {
            res.push_str("\n- ");
            res.push_str(&member.describe());
        }
        if !self.sites.is_empty() {
            res.push_str("\n- sites: ");
            res.push_str(&self.sites.iter().show_iter_cs(|site| {
                let (lat, long) = site.coordinates();
                format!("{} ({}, {})", site.name(), lat, long)
            }));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        repr::{Employee, Location, Professor, Student, StudentProfessor},
    }

    fn small_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_member(Student::new("Ana", 20, "none", "A").unwrap())
            .unwrap();
        roster
            .add_member(Professor::new("Bo", 40, "prof", vec!["CS101".to_string()]).unwrap())
            .unwrap();
        roster
            .add_member(Employee::new("Dee", 35, "registrar", "records").unwrap())
            .unwrap();
        roster
            .add_member(
                StudentProfessor::new("Cy", 30, "both", vec!["CS200".to_string()], "B").unwrap(),
            )
            .unwrap();
        roster
            .add_site(Location::new("Main Hall", 48.117, -1.677))
            .unwrap();
        roster
    }

    #[test]
    fn register_and_look_up() {
        let roster = small_roster();
        assert_eq!(roster.member_count(), 4);
        assert_eq!(roster.site_count(), 1);

        let ana = roster.member_idx("Ana").unwrap();
        assert_eq!(
            roster[ana].describe(),
            "Name: Ana, Age: 20, Job: none, Grade: A"
        );

        let hall = roster.site_idx("Main Hall").unwrap();
        assert_eq!(roster[hall].coordinates(), (48.117, -1.677));
    }

    #[test]
    fn duplicate_names_are_redefinitions() {
        let mut roster = small_roster();
        let err = roster
            .add_member(Student::new("Ana", 25, "none", "C").unwrap())
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("illegal redefinition of member `Ana`"));
        // the original entry is untouched
        assert_eq!(
            roster.describe_member("Ana").unwrap(),
            "Name: Ana, Age: 20, Job: none, Grade: A"
        );

        let err = roster
            .add_site(Location::new("Main Hall", 0.0, 0.0))
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("illegal redefinition of site `Main Hall`"));
    }

    #[test]
    fn unknown_names_fail_with_context() {
        let roster = small_roster();
        assert_eq!(
            roster.member_idx("Zed").unwrap_err().to_string(),
            "unknown member `Zed`"
        );
        let err = roster.describe_member("Zed").unwrap_err().to_string();
        assert!(err.contains("unknown member `Zed`"));
        assert!(err.contains("describing member `Zed`"));
        assert_eq!(
            roster.site_idx("Annex").unwrap_err().to_string(),
            "unknown site `Annex`"
        );
    }

    #[test]
    fn mutation_through_indices() {
        let mut roster = small_roster();
        let ana = roster.member_idx("Ana").unwrap();
        roster[ana].person_mut().set_age(21).unwrap();
        assert!(roster[ana].person_mut().set_age(0).is_err());
        assert_eq!(
            roster[ana].describe(),
            "Name: Ana, Age: 21, Job: none, Grade: A"
        );
    }

    #[test]
    fn find_members_by_pattern() {
        let roster = small_roster();
        let re = regex::Regex::new("^[AB]").unwrap();
        let found = roster.find_members(&re);
        let names: Vec<&str> = found
            .into_iter()
            .map(|m_idx| roster[m_idx].person().name())
            .collect();
        assert_eq!(names, vec!["Ana", "Bo"]);
    }

    #[test]
    fn role_filters() {
        let roster = small_roster();
        assert_eq!(roster.teaching_members().count(), 2);
        assert_eq!(roster.studying_members().count(), 2);
    }

    #[test]
    fn pretty_string_lists_everything() {
        let roster = small_roster();
        let pretty = roster.to_pretty_string();
        assert_eq!(
            pretty,
            "roster (4 members, 1 sites)\n\
            - Name: Ana, Age: 20, Job: none, Grade: A\n\
            - Name: Bo, Age: 40, Job: prof, Courses: [\"CS101\"]\n\
            - Name: Dee, Age: 35, Job: registrar, Department: records\n\
            - Name: Cy, Age: 30, Job: both, Courses: [\"CS200\"], Grade: B\n\
            - sites: Main Hall (48.117, -1.677)"
        );
    }
}
