//! Roster generation with fixed cardinalities.
//!
//! Collections are built in dependency order (orgs, users, academic
//! sessions, courses, classes, categories) so every [`GuidRef`] points at a
//! record that already exists. References are assigned round-robin: the
//! 1-indexed item `i` links to element `i mod len` of its target collection.

use chrono::{DateTime, Utc};

use crate::dataset::RosterDataset;
use crate::identifiers::IdAllocator;
use crate::model::{AcademicSession, BaseModel, Category, Class, Course, GuidRef, Org, User};
use crate::vocabulary::{ClassType, OrgType, RoleType, SessionType};

/// Number of organisations generated.
pub const ORG_COUNT: usize = 10;

/// Number of users generated with the student role.
pub const STUDENT_COUNT: usize = 1000;

/// Number of users generated with the teacher role.
pub const TEACHER_COUNT: usize = 250;

/// Number of term sessions generated.
pub const TERM_COUNT: usize = 4;

/// Number of courses generated.
pub const COURSE_COUNT: usize = 50;

/// Number of classes generated.
pub const CLASS_COUNT: usize = 500;

/// Number of global grading categories.
pub const CATEGORY_COUNT: usize = CATEGORIES.len();

/// Fixed grading categories as `(title, weight)`.
const CATEGORIES: [(&str, i32); 3] = [("Homework", 20), ("Exams", 50), ("Participation", 30)];

/// First school year covered by the generated terms.
const FIRST_SCHOOL_YEAR: usize = 2025;

/// Grade level assigned to every generated class.
const CLASS_GRADE: &str = "10";

/// Subject assigned to every generated course and class.
const GENERAL_SUBJECT: &str = "General";

/// Options controlling identifier generation.
///
/// # Examples
/// ```
/// use roster_data::GeneratorOptions;
///
/// assert_eq!(GeneratorOptions::default().seed(), None);
/// assert_eq!(GeneratorOptions::seeded(42).seed(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    seed: Option<u64>,
}

impl GeneratorOptions {
    /// Options producing the same identifiers on every run.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Options taking the seed from configuration, if one was supplied.
    #[must_use]
    pub const fn with_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn allocator(self) -> IdAllocator {
        match self.seed {
            Some(seed) => IdAllocator::seeded(seed),
            None => IdAllocator::from_entropy(),
        }
    }
}

/// Build the complete roster.
///
/// Every record is stamped with `now` as its `dateLastModified`. Generation
/// cannot fail: all sizes are compile-time constants and no I/O happens.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use roster_data::{GeneratorOptions, Record, generate_roster};
///
/// let dataset = generate_roster(&GeneratorOptions::seeded(1), Utc::now());
/// let first_class = dataset.classes().first().expect("classes generated");
/// let course = dataset
///     .courses()
///     .iter()
///     .find(|course| course.sourced_id() == first_class.course.sourced_id);
/// assert!(course.is_some());
/// ```
#[must_use]
pub fn generate_roster(options: &GeneratorOptions, now: DateTime<Utc>) -> RosterDataset {
    let mut generator = Generator {
        ids: options.allocator(),
        now,
    };

    let orgs = generator.orgs();
    let mut users = generator.users(RoleType::Student, STUDENT_COUNT, &orgs);
    users.extend(generator.users(RoleType::Teacher, TEACHER_COUNT, &orgs));
    let academic_sessions = generator.terms();
    let courses = generator.courses();
    let classes = generator.classes(&courses, &orgs, &academic_sessions);
    let categories = generator.categories();

    RosterDataset {
        orgs,
        users,
        courses,
        classes,
        enrollments: Vec::new(),
        academic_sessions,
        categories,
    }
}

/// Pair each 1-indexed position with its round-robin target.
///
/// Position `i` receives `targets[i % targets.len()]`, so the first item
/// links to the second target and the last target is reached on wrap-around.
fn round_robin<T>(targets: &[T], count: usize) -> impl Iterator<Item = (usize, &T)> {
    (1..=count).zip(targets.iter().cycle().skip(1))
}

struct Generator {
    ids: IdAllocator,
    now: DateTime<Utc>,
}

impl Generator {
    fn base(&mut self) -> BaseModel {
        BaseModel::active(self.ids.next_id(), self.now)
    }

    fn orgs(&mut self) -> Vec<Org> {
        (1..=ORG_COUNT)
            .map(|i| Org {
                base: self.base(),
                name: format!("School #{i}"),
                org_type: OrgType::School,
                identifier: format!("SCH{i:03}"),
                parent: None,
                children: Vec::new(),
            })
            .collect()
    }

    fn users(&mut self, role: RoleType, count: usize, orgs: &[Org]) -> Vec<User> {
        let (handle, given_name, prefix) = match role {
            RoleType::Student => ("student", "Student", "STU"),
            RoleType::Teacher => ("teacher", "Teacher", "TCH"),
        };

        round_robin(orgs, count)
            .map(|(i, school)| User {
                base: self.base(),
                username: format!("{handle}{i}"),
                user_ids: Vec::new(),
                enabled_user: true,
                given_name: given_name.to_owned(),
                family_name: format!("User{i}"),
                role,
                identifier: format!("{prefix}{i:04}"),
                email: format!("{handle}{i}@example.com"),
                orgs: vec![GuidRef::org(&school.base.sourced_id)],
            })
            .collect()
    }

    fn terms(&mut self) -> Vec<AcademicSession> {
        (1..=TERM_COUNT)
            .map(|i| {
                let year = FIRST_SCHOOL_YEAR + i - 1;
                AcademicSession {
                    base: self.base(),
                    title: format!("Fall Semester {year}"),
                    start_date: format!("{year}-09-01"),
                    end_date: format!("{year}-12-20"),
                    session_type: SessionType::Term,
                    parent: None,
                    children: Vec::new(),
                    school_year: year.to_string(),
                }
            })
            .collect()
    }

    fn courses(&mut self) -> Vec<Course> {
        (1..=COURSE_COUNT)
            .map(|i| Course {
                base: self.base(),
                title: format!("Course {i}"),
                school_year: None,
                course_code: format!("CRS{i:03}"),
                grades: Vec::new(),
                subjects: vec![GENERAL_SUBJECT.to_owned()],
                subject_codes: Vec::new(),
                resources: Vec::new(),
            })
            .collect()
    }

    fn classes(
        &mut self,
        courses: &[Course],
        orgs: &[Org],
        terms: &[AcademicSession],
    ) -> Vec<Class> {
        round_robin(courses, CLASS_COUNT)
            .zip(orgs.iter().cycle().skip(1))
            .zip(terms.iter().cycle().skip(1))
            .map(|(((i, course), school), term)| Class {
                base: self.base(),
                title: course.title.clone(),
                class_code: format!("{}-S{i}", course.course_code),
                class_type: ClassType::Scheduled,
                location: String::new(),
                grades: vec![CLASS_GRADE.to_owned()],
                subjects: vec![GENERAL_SUBJECT.to_owned()],
                course: GuidRef::course(&course.base.sourced_id),
                school: GuidRef::school(&school.base.sourced_id),
                terms: vec![GuidRef::term(&term.base.sourced_id)],
                subject_codes: Vec::new(),
                periods: Vec::new(),
                resources: Vec::new(),
            })
            .collect()
    }

    fn categories(&mut self) -> Vec<Category> {
        CATEGORIES
            .iter()
            .map(|&(title, weight)| Category {
                base: self.base(),
                title: title.to_owned(),
                weight,
            })
            .collect()
    }
}
