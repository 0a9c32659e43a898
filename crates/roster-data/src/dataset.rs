//! Immutable snapshot of generated roster collections.

use serde::Serialize;

use crate::model::{AcademicSession, Category, Class, Course, Enrollment, Org, User};

/// Every generated collection, held in insertion order.
///
/// A dataset is only produced by [`crate::generate_roster`] and exposes
/// read-only slices, so it stays frozen once built and can be shared across
/// request handlers without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterDataset {
    pub(crate) orgs: Vec<Org>,
    pub(crate) users: Vec<User>,
    pub(crate) courses: Vec<Course>,
    pub(crate) classes: Vec<Class>,
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) academic_sessions: Vec<AcademicSession>,
    pub(crate) categories: Vec<Category>,
}

/// Collection sizes of a [`RosterDataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    /// Number of organisations.
    pub orgs: usize,
    /// Number of users across all roles.
    pub users: usize,
    /// Number of courses.
    pub courses: usize,
    /// Number of classes.
    pub classes: usize,
    /// Number of enrollments.
    pub enrollments: usize,
    /// Number of academic sessions of any type.
    pub academic_sessions: usize,
    /// Number of grading categories.
    pub categories: usize,
}

impl RosterDataset {
    /// Organisations.
    #[must_use]
    pub fn orgs(&self) -> &[Org] {
        &self.orgs
    }

    /// Users, students first then teachers.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Courses.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Classes.
    #[must_use]
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Enrollments.
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Academic sessions of every type.
    #[must_use]
    pub fn academic_sessions(&self) -> &[AcademicSession] {
        &self.academic_sessions
    }

    /// Grading categories. These are global rather than per class.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Summarise collection sizes, mainly for startup logging.
    #[must_use]
    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            orgs: self.orgs.len(),
            users: self.users.len(),
            courses: self.courses.len(),
            classes: self.classes.len(),
            enrollments: self.enrollments.len(),
            academic_sessions: self.academic_sessions.len(),
            categories: self.categories.len(),
        }
    }
}
