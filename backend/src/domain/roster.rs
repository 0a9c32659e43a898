//! Generic lookups over roster collections.
//!
//! Every endpoint is one of two shapes: list the records matching a fixed
//! predicate, or find the record whose `sourcedId` equals the requested id
//! and which also matches the predicate. [`RecordFilter`] captures the
//! predicate together with the resource kind used in not-found messages, so
//! both shapes are written once.

use roster_data::{AcademicSession, Org, OrgType, Record, RoleType, SessionType, User};

use crate::domain::Error;

/// Resource kinds addressable through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Any organisation.
    Org,
    /// Organisation of type school.
    School,
    /// Any user.
    User,
    /// User with the teacher role.
    Teacher,
    /// User with the student role.
    Student,
    /// Course.
    Course,
    /// Class.
    Class,
    /// Enrollment.
    Enrollment,
    /// Academic session of type term.
    Term,
    /// Academic session of any type.
    AcademicSession,
    /// Academic session of type grading period.
    GradingPeriod,
}

impl ResourceKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Org => "Org",
            Self::School => "School",
            Self::User => "User",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Course => "Course",
            Self::Class => "Class",
            Self::Enrollment => "Enrollment",
            Self::Term => "Term",
            Self::AcademicSession => "Academic Session",
            Self::GradingPeriod => "Grading Period",
        }
    }

    /// Not-found error for this kind, for example `"School not found"`.
    #[must_use]
    pub fn not_found(self) -> Error {
        Error::not_found(format!("{} not found", self.label()))
    }
}

/// Fixed predicate applied to a collection, tagged with its resource kind.
pub trait RecordFilter<T> {
    /// Whether `record` belongs to the filtered view.
    fn matches(&self, record: &T) -> bool;

    /// Kind reported when a lookup through this filter finds nothing.
    fn kind(&self) -> ResourceKind;
}

/// Filter accepting every record of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unfiltered(pub ResourceKind);

impl<T> RecordFilter<T> for Unfiltered {
    fn matches(&self, _record: &T) -> bool {
        true
    }

    fn kind(&self) -> ResourceKind {
        self.0
    }
}

/// Views over the organisation collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgFilter {
    /// Every organisation.
    All,
    /// Organisations of type school.
    Schools,
}

impl RecordFilter<Org> for OrgFilter {
    fn matches(&self, record: &Org) -> bool {
        match self {
            Self::All => true,
            Self::Schools => record.org_type == OrgType::School,
        }
    }

    fn kind(&self) -> ResourceKind {
        match self {
            Self::All => ResourceKind::Org,
            Self::Schools => ResourceKind::School,
        }
    }
}

/// Views over the user collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilter {
    /// Every user.
    All,
    /// Users with the student role.
    Students,
    /// Users with the teacher role.
    Teachers,
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, record: &User) -> bool {
        match self {
            Self::All => true,
            Self::Students => record.role == RoleType::Student,
            Self::Teachers => record.role == RoleType::Teacher,
        }
    }

    fn kind(&self) -> ResourceKind {
        match self {
            Self::All => ResourceKind::User,
            Self::Students => ResourceKind::Student,
            Self::Teachers => ResourceKind::Teacher,
        }
    }
}

/// Views over the academic session collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFilter {
    /// Every academic session.
    All,
    /// Sessions of type term.
    Terms,
    /// Sessions of type grading period.
    GradingPeriods,
}

impl RecordFilter<AcademicSession> for SessionFilter {
    fn matches(&self, record: &AcademicSession) -> bool {
        match self {
            Self::All => true,
            Self::Terms => record.session_type == SessionType::Term,
            Self::GradingPeriods => record.session_type == SessionType::GradingPeriod,
        }
    }

    fn kind(&self) -> ResourceKind {
        match self {
            Self::All => ResourceKind::AcademicSession,
            Self::Terms => ResourceKind::Term,
            Self::GradingPeriods => ResourceKind::GradingPeriod,
        }
    }
}

/// Records matching `filter`, in collection order.
///
/// An empty result is not an error.
pub fn list_matching<T, F>(records: &[T], filter: &F) -> Vec<T>
where
    T: Clone,
    F: RecordFilter<T>,
{
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// First record with `sourcedId == id` that also matches `filter`.
///
/// # Errors
/// Returns the filter kind's not-found error when no record qualifies.
pub fn find_matching<T, F>(records: &[T], id: &str, filter: &F) -> Result<T, Error>
where
    T: Record + Clone,
    F: RecordFilter<T>,
{
    records
        .iter()
        .find(|record| record.sourced_id() == id && filter.matches(record))
        .cloned()
        .ok_or_else(|| filter.kind().not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use chrono::Utc;
    use roster_data::{BaseModel, Category};
    use rstest::{fixture, rstest};

    fn org(id: &str, org_type: OrgType) -> Org {
        Org {
            base: BaseModel::active(id.to_owned(), Utc::now()),
            name: format!("Org {id}"),
            org_type,
            identifier: id.to_uppercase(),
            parent: None,
            children: Vec::new(),
        }
    }

    #[fixture]
    fn orgs() -> Vec<Org> {
        vec![
            org("d1", OrgType::District),
            org("s1", OrgType::School),
            org("s2", OrgType::School),
        ]
    }

    #[rstest]
    fn list_keeps_collection_order(orgs: Vec<Org>) {
        let schools = list_matching(&orgs, &OrgFilter::Schools);
        let ids: Vec<&str> = schools.iter().map(|org| org.sourced_id()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[rstest]
    fn unfiltered_list_returns_everything(orgs: Vec<Org>) {
        assert_eq!(list_matching(&orgs, &OrgFilter::All), orgs);
    }

    #[rstest]
    fn empty_collection_lists_empty() {
        let categories: Vec<Category> = Vec::new();
        assert!(list_matching(&categories, &Unfiltered(ResourceKind::Class)).is_empty());
    }

    #[rstest]
    fn find_returns_matching_record(orgs: Vec<Org>) {
        let found = find_matching(&orgs, "s2", &OrgFilter::Schools).expect("school found");
        assert_eq!(found.sourced_id(), "s2");
    }

    #[rstest]
    fn find_respects_filter(orgs: Vec<Org>) {
        let err = find_matching(&orgs, "d1", &OrgFilter::Schools).expect_err("district hidden");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "School not found");
        assert!(find_matching(&orgs, "d1", &OrgFilter::All).is_ok());
    }

    #[rstest]
    fn find_unknown_id_is_not_found(orgs: Vec<Org>) {
        let err = find_matching(&orgs, "missing", &OrgFilter::All).expect_err("unknown id");
        assert_eq!(err.message(), "Org not found");
    }

    #[rstest]
    #[case(ResourceKind::Org, "Org not found")]
    #[case(ResourceKind::School, "School not found")]
    #[case(ResourceKind::User, "User not found")]
    #[case(ResourceKind::Teacher, "Teacher not found")]
    #[case(ResourceKind::Student, "Student not found")]
    #[case(ResourceKind::Course, "Course not found")]
    #[case(ResourceKind::Class, "Class not found")]
    #[case(ResourceKind::Enrollment, "Enrollment not found")]
    #[case(ResourceKind::Term, "Term not found")]
    #[case(ResourceKind::AcademicSession, "Academic Session not found")]
    #[case(ResourceKind::GradingPeriod, "Grading Period not found")]
    fn not_found_messages_name_the_kind(#[case] kind: ResourceKind, #[case] expected: &str) {
        assert_eq!(kind.not_found().message(), expected);
    }

    #[rstest]
    #[case(UserFilter::All, ResourceKind::User)]
    #[case(UserFilter::Students, ResourceKind::Student)]
    #[case(UserFilter::Teachers, ResourceKind::Teacher)]
    fn user_filters_report_their_kind(#[case] filter: UserFilter, #[case] kind: ResourceKind) {
        assert_eq!(RecordFilter::<User>::kind(&filter), kind);
    }

    #[rstest]
    #[case(SessionFilter::All, ResourceKind::AcademicSession)]
    #[case(SessionFilter::Terms, ResourceKind::Term)]
    #[case(SessionFilter::GradingPeriods, ResourceKind::GradingPeriod)]
    fn session_filters_report_their_kind(
        #[case] filter: SessionFilter,
        #[case] kind: ResourceKind,
    ) {
        assert_eq!(RecordFilter::<AcademicSession>::kind(&filter), kind);
    }
}
