//! Role data attached to a [`Person`], and the combined role.
//!
//! [`StudentRole`] and [`ProfessorRole`] carry the fields [`Student`]
//! and [`Professor`] add on top of the base record. Embedding both next
//! to one shared [`Person`] yields [`StudentProfessor`] without
//! duplicating base state.
//!
//! [`Student`]: crate::repr::Student
//! [`Professor`]: crate::repr::Professor

prelude! {
    repr::{Course, Courses, Person},
}

/// Student-side fields.
#[derive(Debug, Clone)]
pub struct StudentRole {
    grade: String,
}

impl StudentRole {
    pub fn new(grade: impl Into<String>) -> Self {
        Self {
            grade: grade.into(),
        }
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into()
    }

    /// Detail fragment for this role.
    pub fn details(&self) -> String {
        format!("Grade: {}", self.grade)
    }
}

/// Professor-side fields.
#[derive(Debug, Clone)]
pub struct ProfessorRole {
    courses: Courses,
}

impl ProfessorRole {
    pub fn new(courses: impl Into<Courses>) -> Self {
        Self {
            courses: courses.into(),
        }
    }

    pub fn courses(&self) -> &Courses {
        &self.courses
    }
    pub fn set_courses(&mut self, courses: impl Into<Courses>) {
        self.courses = courses.into()
    }
    pub fn add_course(&mut self, course: impl Into<Course>) {
        self.courses.push(course.into())
    }

    /// Detail fragment for this role.
    pub fn details(&self) -> String {
        format!("Courses: {:?}", self.courses)
    }
}

/// Someone who is both a student and a professor.
///
/// Both roles share one [`Person`] record, initialized exactly once.
/// The constructor writes `courses` and `grade` straight into the role
/// fields rather than going through the role setters; the setters are
/// still reachable afterwards through [`Self::student_mut`] and
/// [`Self::professor_mut`].
#[derive(Debug, Clone)]
pub struct StudentProfessor {
    base: Person,
    student: StudentRole,
    professor: ProfessorRole,
}

impl std::ops::Deref for StudentProfessor {
    type Target = Person;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
impl std::ops::DerefMut for StudentProfessor {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl StudentProfessor {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        job: impl Into<String>,
        courses: impl Into<Courses>,
        grade: impl Into<String>,
    ) -> Res<Self> {
        // single base initialization, shared by both roles
        let base = Person::new(name, age, job)?;
        Ok(Self {
            base,
            student: StudentRole {
                grade: grade.into(),
            },
            professor: ProfessorRole {
                courses: courses.into(),
            },
        })
    }

    pub fn student(&self) -> &StudentRole {
        &self.student
    }
    pub fn student_mut(&mut self) -> &mut StudentRole {
        &mut self.student
    }

    pub fn professor(&self) -> &ProfessorRole {
        &self.professor
    }
    pub fn professor_mut(&mut self) -> &mut ProfessorRole {
        &mut self.professor
    }

    pub fn grade(&self) -> &str {
        self.student.grade()
    }
    pub fn courses(&self) -> &Courses {
        self.professor.courses()
    }
}

impl Describe for StudentProfessor {
    fn person(&self) -> &Person {
        &self.base
    }

    /// Re-formats all five fields itself instead of composing the role
    /// fragments.
    fn describe(&self) -> String {
        format!(
            "Name: {}, Age: {}, Job: {}, Courses: {:?}, Grade: {}",
            self.base.name(),
            self.base.age(),
            self.base.job(),
            self.professor.courses(),
            self.student.grade(),
        )
    }
}
