//! Driving port for read-only roster lookups.
//!
//! HTTP handlers depend on this port rather than on the dataset itself, so
//! tests can substitute a mock and the in-memory adapter stays swappable.

use roster_data::{AcademicSession, Category, Class, Course, Enrollment, Org, User};

use crate::domain::Error;
use crate::domain::roster::{OrgFilter, SessionFilter, UserFilter};

/// Read-only queries over the roster.
///
/// List operations never fail; an empty view is a valid answer. Point
/// lookups fail only with [`crate::domain::ErrorCode::NotFound`].
#[cfg_attr(test, mockall::automock)]
pub trait RosterQuery: Send + Sync {
    /// Organisations in the given view.
    fn orgs(&self, filter: OrgFilter) -> Vec<Org>;

    /// Organisation `id` within the given view.
    fn org(&self, id: &str, filter: OrgFilter) -> Result<Org, Error>;

    /// Users in the given view.
    fn users(&self, filter: UserFilter) -> Vec<User>;

    /// User `id` within the given view.
    fn user(&self, id: &str, filter: UserFilter) -> Result<User, Error>;

    /// Every course.
    fn courses(&self) -> Vec<Course>;

    /// Course `id`.
    fn course(&self, id: &str) -> Result<Course, Error>;

    /// Every class.
    fn classes(&self) -> Vec<Class>;

    /// Class `id`.
    fn class(&self, id: &str) -> Result<Class, Error>;

    /// Grading categories for a class.
    ///
    /// Categories are global, so every class id (known or not) yields the
    /// full set.
    fn class_categories(&self, class_id: &str) -> Vec<Category>;

    /// Every enrollment.
    fn enrollments(&self) -> Vec<Enrollment>;

    /// Enrollment `id`.
    fn enrollment(&self, id: &str) -> Result<Enrollment, Error>;

    /// Academic sessions in the given view.
    fn academic_sessions(&self, filter: SessionFilter) -> Vec<AcademicSession>;

    /// Academic session `id` within the given view.
    fn academic_session(&self, id: &str, filter: SessionFilter) -> Result<AcademicSession, Error>;
}
