prelude! {}

pub mod idx;
pub mod role;
pub mod site;

pub use role::{ProfessorRole, StudentProfessor, StudentRole};
pub use site::Location;

/// A course name, as it appears in a catalog.
pub type Course = String;

/// An ordered course list. Most members teach a handful of courses.
pub type Courses = SmallVec<[Course; 4]>;

/// Base record for everyone on the roster.
///
/// # Invariants
///
/// - `age` is strictly positive, enforced by the same check at
///   construction and in [`Self::set_age`]
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    age: i64,
    job: String,
}

impl Person {
    fn check_age(age: i64) -> Res<()> {
        if age > 0 {
            Ok(())
        } else {
            Err(error!(@invalid("age (positive integer)") age.to_string()))
        }
    }

    /// Constructor.
    pub fn new(name: impl Into<String>, age: i64, job: impl Into<String>) -> Res<Self> {
        Self::check_age(age)?;
        Ok(Self {
            name: name.into(),
            age,
            job: job.into(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into()
    }

    #[inline]
    pub fn age(&self) -> i64 {
        self.age
    }
    /// Fails on a non-positive `age`, leaving the stored value untouched.
    pub fn set_age(&mut self, age: i64) -> Res<()> {
        Self::check_age(age)?;
        self.age = age;
        Ok(())
    }

    #[inline]
    pub fn job(&self) -> &str {
        &self.job
    }
    pub fn set_job(&mut self, job: impl Into<String>) {
        self.job = job.into()
    }

    /// Base detail line, `Name: ..., Age: ..., Job: ...`.
    pub fn details(&self) -> String {
        format!("Name: {}, Age: {}, Job: {}", self.name, self.age, self.job)
    }
}

impl Describe for Person {
    fn person(&self) -> &Person {
        self
    }
}

/// A [`Person`] with a [`StudentRole`].
#[derive(Debug, Clone)]
pub struct Student {
    base: Person,
    role: StudentRole,
}

impl std::ops::Deref for Student {
    type Target = Person;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
impl std::ops::DerefMut for Student {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        job: impl Into<String>,
        grade: impl Into<String>,
    ) -> Res<Self> {
        Ok(Self {
            base: Person::new(name, age, job)?,
            role: StudentRole::new(grade),
        })
    }

    pub fn grade(&self) -> &str {
        self.role.grade()
    }
    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.role.set_grade(grade)
    }
}

impl Describe for Student {
    fn person(&self) -> &Person {
        &self.base
    }
    fn details_tail(&self) -> Option<String> {
        Some(self.role.details())
    }
}

/// A [`Person`] with a [`ProfessorRole`].
#[derive(Debug, Clone)]
pub struct Professor {
    base: Person,
    role: ProfessorRole,
}

impl std::ops::Deref for Professor {
    type Target = Person;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
impl std::ops::DerefMut for Professor {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl Professor {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        job: impl Into<String>,
        courses: impl Into<Courses>,
    ) -> Res<Self> {
        Ok(Self {
            base: Person::new(name, age, job)?,
            role: ProfessorRole::new(courses),
        })
    }

    pub fn courses(&self) -> &Courses {
        self.role.courses()
    }
    pub fn set_courses(&mut self, courses: impl Into<Courses>) {
        self.role.set_courses(courses)
    }
    pub fn add_course(&mut self, course: impl Into<Course>) {
        self.role.add_course(course)
    }
}

impl Describe for Professor {
    fn person(&self) -> &Person {
        &self.base
    }
    fn details_tail(&self) -> Option<String> {
        Some(self.role.details())
    }
}

/// A [`Person`] attached to a department.
#[derive(Debug, Clone)]
pub struct Employee {
    base: Person,
    department: String,
}

impl std::ops::Deref for Employee {
    type Target = Person;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
impl std::ops::DerefMut for Employee {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        job: impl Into<String>,
        department: impl Into<String>,
    ) -> Res<Self> {
        Ok(Self {
            base: Person::new(name, age, job)?,
            department: department.into(),
        })
    }

    pub fn department(&self) -> &str {
        &self.department
    }
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into()
    }
}

impl Describe for Employee {
    fn person(&self) -> &Person {
        &self.base
    }
    fn details_tail(&self) -> Option<String> {
        Some(format!("Department: {}", self.department))
    }
}

/// Any person variant the roster can hold.
///
/// Every variant exposes the shared [`Person`] record and its own
/// [`describe`](Describe::describe), so a `Member` dispatches both
/// without knowing which variant it holds.
#[derive(Debug, Clone)]
pub enum Member {
    Student(Student),
    Professor(Professor),
    Employee(Employee),
    StudentProfessor(StudentProfessor),
}

impl From<Student> for Member {
    fn from(s: Student) -> Self {
        Self::Student(s)
    }
}
impl From<Professor> for Member {
    fn from(p: Professor) -> Self {
        Self::Professor(p)
    }
}
impl From<Employee> for Member {
    fn from(e: Employee) -> Self {
        Self::Employee(e)
    }
}
impl From<StudentProfessor> for Member {
    fn from(sp: StudentProfessor) -> Self {
        Self::StudentProfessor(sp)
    }
}

impl Member {
    /// Mutable access to the shared base record.
    pub fn person_mut(&mut self) -> &mut Person {
        match self {
            Self::Student(s) => s,
            Self::Professor(p) => p,
            Self::Employee(e) => e,
            Self::StudentProfessor(sp) => sp,
        }
    }

    /// True for variants carrying a [`ProfessorRole`].
    pub fn teaches(&self) -> bool {
        matches!(self, Self::Professor(_) | Self::StudentProfessor(_))
    }
    /// True for variants carrying a [`StudentRole`].
    pub fn studies(&self) -> bool {
        matches!(self, Self::Student(_) | Self::StudentProfessor(_))
    }
}

impl Describe for Member {
    fn person(&self) -> &Person {
        match self {
            Self::Student(s) => s.person(),
            Self::Professor(p) => p.person(),
            Self::Employee(e) => e.person(),
            Self::StudentProfessor(sp) => sp.person(),
        }
    }
    fn details_tail(&self) -> Option<String> {
        match self {
            Self::Student(s) => s.details_tail(),
            Self::Professor(p) => p.details_tail(),
            Self::Employee(e) => e.details_tail(),
            Self::StudentProfessor(sp) => sp.details_tail(),
        }
    }
    fn describe(&self) -> String {
        match self {
            Self::Student(s) => s.describe(),
            Self::Professor(p) => p.describe(),
            Self::Employee(e) => e.describe(),
            Self::StudentProfessor(sp) => sp.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_round_trip() {
        let person = Person::new("Ana", 20, "none").unwrap();
        assert_eq!(person.name(), "Ana");
        assert_eq!(person.age(), 20);
        assert_eq!(person.job(), "none");
        assert_eq!(person.details(), "Name: Ana, Age: 20, Job: none");
    }

    #[test]
    fn person_setters() {
        let mut person = Person::new("Ana", 20, "none").unwrap();
        person.set_name("Anna");
        person.set_job("tutor");
        person.set_age(21).unwrap();
        assert_eq!(person.details(), "Name: Anna, Age: 21, Job: tutor");
    }

    #[test]
    fn person_rejects_bad_age() {
        let mut person = Person::new("Ana", 20, "none").unwrap();
        for bad in [0, -5] {
            let err = person.set_age(bad).unwrap_err();
            assert!(err.src.is_invalid());
            // rejected sets leave the stored value untouched
            assert_eq!(person.age(), 20);
        }
        assert_eq!(
            person.set_age(0).unwrap_err().to_string(),
            "invalid age (positive integer) `0`"
        );
    }

    #[test]
    fn person_constructor_rejects_bad_age() {
        assert!(Person::new("Ana", 0, "none").unwrap_err().src.is_invalid());
        assert!(Person::new("Ana", -1, "none").unwrap_err().src.is_invalid());
    }

    #[test]
    fn student_details() {
        let ana = Student::new("Ana", 20, "none", "A").unwrap();
        assert_eq!(ana.describe(), "Name: Ana, Age: 20, Job: none, Grade: A");
    }

    #[test]
    fn professor_details() {
        let bo = Professor::new("Bo", 40, "prof", vec!["CS101".to_string()]).unwrap();
        assert_eq!(
            bo.describe(),
            "Name: Bo, Age: 40, Job: prof, Courses: [\"CS101\"]"
        );
    }

    #[test]
    fn employee_details() {
        let dee = Employee::new("Dee", 35, "registrar", "records").unwrap();
        assert_eq!(
            dee.describe(),
            "Name: Dee, Age: 35, Job: registrar, Department: records"
        );
    }

    #[test]
    fn describe_is_idempotent() {
        let bo = Professor::new("Bo", 40, "prof", vec!["CS101".to_string()]).unwrap();
        assert_eq!(bo.describe(), bo.describe());
    }

    #[test]
    fn derived_types_reach_base_accessors() {
        let mut ana = Student::new("Ana", 20, "none", "A").unwrap();
        assert_eq!(ana.name(), "Ana");
        ana.set_age(21).unwrap();
        assert!(ana.set_age(-3).is_err());
        assert_eq!(ana.age(), 21);
        ana.set_grade("A+");
        assert_eq!(ana.describe(), "Name: Ana, Age: 21, Job: none, Grade: A+");
    }

    #[test]
    fn professor_course_mutation() {
        let mut bo = Professor::new("Bo", 40, "prof", vec!["CS101".to_string()]).unwrap();
        bo.add_course("CS102");
        assert_eq!(bo.courses().len(), 2);
        bo.set_courses(vec!["SE201".to_string()]);
        assert_eq!(
            bo.describe(),
            "Name: Bo, Age: 40, Job: prof, Courses: [\"SE201\"]"
        );
    }

    #[test]
    fn member_dispatches_describe() {
        let members = [
            Member::from(Student::new("Ana", 20, "none", "A").unwrap()),
            Member::from(Professor::new("Bo", 40, "prof", vec!["CS101".to_string()]).unwrap()),
            Member::from(Employee::new("Dee", 35, "registrar", "records").unwrap()),
            Member::from(
                StudentProfessor::new("Cy", 30, "both", vec!["CS200".to_string()], "B").unwrap(),
            ),
        ];
        let expected = [
            "Name: Ana, Age: 20, Job: none, Grade: A",
            "Name: Bo, Age: 40, Job: prof, Courses: [\"CS101\"]",
            "Name: Dee, Age: 35, Job: registrar, Department: records",
            "Name: Cy, Age: 30, Job: both, Courses: [\"CS200\"], Grade: B",
        ];
        for (member, expected) in members.iter().zip(expected) {
            assert_eq!(member.describe(), expected);
        }
    }

    #[test]
    fn member_person_mut_reaches_base() {
        let mut member = Member::from(Student::new("Ana", 20, "none", "A").unwrap());
        member.person_mut().set_age(22).unwrap();
        assert_eq!(member.person().age(), 22);
        assert!(member.studies());
        assert!(!member.teaches());
    }
}
