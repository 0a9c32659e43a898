//! In-memory implementation of [`RosterQuery`].
//!
//! The dataset is generated once at startup and handed in here. After that
//! it is only read, so every worker shares the same `Arc` without locking.

use std::sync::Arc;

use roster_data::{AcademicSession, Category, Class, Course, Enrollment, Org, RosterDataset, User};

use crate::domain::Error;
use crate::domain::ports::RosterQuery;
use crate::domain::roster::{
    OrgFilter, ResourceKind, SessionFilter, Unfiltered, UserFilter, find_matching, list_matching,
};

/// Linear-scan lookups over a frozen [`RosterDataset`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::ports::RosterQuery;
/// use backend::domain::{InMemoryRosterQuery, OrgFilter};
/// use chrono::Utc;
/// use roster_data::{GeneratorOptions, generate_roster};
///
/// let dataset = Arc::new(generate_roster(&GeneratorOptions::seeded(3), Utc::now()));
/// let query = InMemoryRosterQuery::new(dataset);
/// assert_eq!(query.orgs(OrgFilter::Schools).len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRosterQuery {
    dataset: Arc<RosterDataset>,
}

impl InMemoryRosterQuery {
    /// Wrap an already generated dataset.
    #[must_use]
    pub const fn new(dataset: Arc<RosterDataset>) -> Self {
        Self { dataset }
    }
}

impl RosterQuery for InMemoryRosterQuery {
    fn orgs(&self, filter: OrgFilter) -> Vec<Org> {
        list_matching(self.dataset.orgs(), &filter)
    }

    fn org(&self, id: &str, filter: OrgFilter) -> Result<Org, Error> {
        find_matching(self.dataset.orgs(), id, &filter)
    }

    fn users(&self, filter: UserFilter) -> Vec<User> {
        list_matching(self.dataset.users(), &filter)
    }

    fn user(&self, id: &str, filter: UserFilter) -> Result<User, Error> {
        find_matching(self.dataset.users(), id, &filter)
    }

    fn courses(&self) -> Vec<Course> {
        self.dataset.courses().to_vec()
    }

    fn course(&self, id: &str) -> Result<Course, Error> {
        find_matching(self.dataset.courses(), id, &Unfiltered(ResourceKind::Course))
    }

    fn classes(&self) -> Vec<Class> {
        self.dataset.classes().to_vec()
    }

    fn class(&self, id: &str) -> Result<Class, Error> {
        find_matching(self.dataset.classes(), id, &Unfiltered(ResourceKind::Class))
    }

    fn class_categories(&self, _class_id: &str) -> Vec<Category> {
        // No class-to-category relation exists; the set is global.
        self.dataset.categories().to_vec()
    }

    fn enrollments(&self) -> Vec<Enrollment> {
        self.dataset.enrollments().to_vec()
    }

    fn enrollment(&self, id: &str) -> Result<Enrollment, Error> {
        find_matching(
            self.dataset.enrollments(),
            id,
            &Unfiltered(ResourceKind::Enrollment),
        )
    }

    fn academic_sessions(&self, filter: SessionFilter) -> Vec<AcademicSession> {
        list_matching(self.dataset.academic_sessions(), &filter)
    }

    fn academic_session(&self, id: &str, filter: SessionFilter) -> Result<AcademicSession, Error> {
        find_matching(self.dataset.academic_sessions(), id, &filter)
    }
}
