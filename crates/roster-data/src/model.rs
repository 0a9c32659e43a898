//! OneRoster record types.
//!
//! Records carry a flattened [`BaseModel`] so every JSON object exposes
//! `sourcedId`, `status`, `dateLastModified` and `metadata` at the top level.
//! Cross-references are denormalised [`GuidRef`] values; they do not own the
//! record they point at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::vocabulary::{ClassType, GuidRefType, OrgType, RoleType, SessionType, StatusType};

/// Fields shared by every OneRoster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    /// Identifier unique within the record's collection.
    pub sourced_id: String,
    /// Lifecycle status.
    pub status: StatusType,
    /// Instant the record was produced.
    pub date_last_modified: DateTime<Utc>,
    /// Opaque extension bag; serialised as `null` when absent.
    pub metadata: Option<Value>,
}

impl BaseModel {
    /// Create an active record header stamped with `modified_at`.
    #[must_use]
    pub fn active(sourced_id: String, modified_at: DateTime<Utc>) -> Self {
        Self {
            sourced_id,
            status: StatusType::Active,
            date_last_modified: modified_at,
            metadata: None,
        }
    }
}

/// Reference to another record by identifier and declared type.
///
/// # Examples
/// ```
/// use roster_data::{GuidRef, GuidRefType};
///
/// let reference = GuidRef::org("abc");
/// assert_eq!(reference.href, "/orgs/abc");
/// assert_eq!(reference.kind, GuidRefType::Org);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidRef {
    /// Relative URL of the referenced record.
    pub href: String,
    /// Identifier of the referenced record.
    pub sourced_id: String,
    /// Declared type of the referenced record.
    #[serde(rename = "type")]
    pub kind: GuidRefType,
}

impl GuidRef {
    fn new(collection: &str, sourced_id: &str, kind: GuidRefType) -> Self {
        Self {
            href: format!("/{collection}/{sourced_id}"),
            sourced_id: sourced_id.to_owned(),
            kind,
        }
    }

    /// Reference an organisation through the `/orgs` collection.
    #[must_use]
    pub fn org(sourced_id: &str) -> Self {
        Self::new("orgs", sourced_id, GuidRefType::Org)
    }

    /// Reference an organisation through the `/schools` collection.
    #[must_use]
    pub fn school(sourced_id: &str) -> Self {
        Self::new("schools", sourced_id, GuidRefType::School)
    }

    /// Reference a course.
    #[must_use]
    pub fn course(sourced_id: &str) -> Self {
        Self::new("courses", sourced_id, GuidRefType::Course)
    }

    /// Reference an academic session through the `/terms` collection.
    #[must_use]
    pub fn term(sourced_id: &str) -> Self {
        Self::new("terms", sourced_id, GuidRefType::Term)
    }
}

/// Organisation such as a school or district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Display name.
    pub name: String,
    /// Organisation kind.
    #[serde(rename = "type")]
    pub org_type: OrgType,
    /// Human-facing identifier, for example `SCH001`.
    pub identifier: String,
    /// Parent organisation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<GuidRef>,
    /// Child organisations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GuidRef>,
}

/// External identifier attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentifier {
    /// Identifier scheme.
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifier value.
    pub identifier: String,
}

/// Person in the roster, either a student or a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Login name.
    pub username: String,
    /// Additional identifiers; always empty in generated data.
    #[serde(default)]
    pub user_ids: Vec<UserIdentifier>,
    /// Whether the account may sign in.
    pub enabled_user: bool,
    /// Given name.
    pub given_name: String,
    /// Family name.
    pub family_name: String,
    /// Role in the roster.
    pub role: RoleType,
    /// Human-facing identifier, for example `STU0001`.
    pub identifier: String,
    /// Contact address.
    pub email: String,
    /// Organisations the user belongs to.
    pub orgs: Vec<GuidRef>,
}

/// Course catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Course title.
    pub title: String,
    /// School year the course belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_year: Option<GuidRef>,
    /// Catalogue code, for example `CRS001`.
    pub course_code: String,
    /// Grade levels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grades: Vec<String>,
    /// Subject names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    /// Subject codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_codes: Vec<String>,
    /// Linked learning resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<GuidRef>,
}

/// Timetabled instance of a course at one school for one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Class title.
    pub title: String,
    /// Class code, for example `CRS002-S1`.
    pub class_code: String,
    /// Class kind.
    pub class_type: ClassType,
    /// Room or site.
    pub location: String,
    /// Grade levels.
    pub grades: Vec<String>,
    /// Subject names.
    pub subjects: Vec<String>,
    /// Course this class instantiates.
    pub course: GuidRef,
    /// School hosting the class.
    pub school: GuidRef,
    /// Terms the class runs in.
    pub terms: Vec<GuidRef>,
    /// Subject codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_codes: Vec<String>,
    /// Timetable periods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<String>,
    /// Linked learning resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<GuidRef>,
}

/// Link between a user and a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Enrolled user.
    pub user: GuidRef,
    /// Class enrolled in.
    pub class: GuidRef,
    /// School hosting the class.
    pub school: GuidRef,
    /// Role held in the class.
    pub role: RoleType,
    /// Whether this is the user's primary enrollment.
    pub primary: bool,
    /// First day of the enrollment.
    pub begin_date: String,
    /// Last day of the enrollment.
    pub end_date: String,
}

/// Calendar period such as a term or grading period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSession {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Session title.
    pub title: String,
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
    /// Session kind.
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Enclosing session, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<GuidRef>,
    /// Nested sessions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GuidRef>,
    /// School year label, for example `2025`.
    pub school_year: String,
}

/// Weighted grading category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Shared record fields.
    #[serde(flatten)]
    pub base: BaseModel,
    /// Category title.
    pub title: String,
    /// Percentage weight.
    pub weight: i32,
}

/// Record addressable by `sourcedId`.
pub trait Record {
    /// Shared record fields.
    fn base(&self) -> &BaseModel;

    /// Identifier unique within the record's collection.
    fn sourced_id(&self) -> &str {
        self.base().sourced_id.as_str()
    }
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn base(&self) -> &BaseModel {
                    &self.base
                }
            }
        )+
    };
}

impl_record!(Org, User, Course, Class, Enrollment, AcademicSession, Category);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn modified_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    fn base_fields_are_flattened(modified_at: DateTime<Utc>) {
        let category = Category {
            base: BaseModel::active("cat-1".to_owned(), modified_at),
            title: "Homework".to_owned(),
            weight: 20,
        };

        let value = serde_json::to_value(&category).expect("serialise category");
        assert_eq!(
            value,
            json!({
                "sourcedId": "cat-1",
                "status": "active",
                "dateLastModified": "2025-09-01T08:00:00Z",
                "metadata": null,
                "title": "Homework",
                "weight": 20
            })
        );
    }

    #[rstest]
    fn empty_optional_org_links_are_omitted(modified_at: DateTime<Utc>) {
        let org = Org {
            base: BaseModel::active("org-1".to_owned(), modified_at),
            name: "School #1".to_owned(),
            org_type: OrgType::School,
            identifier: "SCH001".to_owned(),
            parent: None,
            children: Vec::new(),
        };

        let value = serde_json::to_value(&org).expect("serialise org");
        assert_eq!(value.get("type"), Some(&json!("school")));
        assert!(value.get("parent").is_none());
        assert!(value.get("children").is_none());
    }

    #[rstest]
    #[case(GuidRef::org("x"), "/orgs/x", "org")]
    #[case(GuidRef::school("x"), "/schools/x", "school")]
    #[case(GuidRef::course("x"), "/courses/x", "course")]
    #[case(GuidRef::term("x"), "/terms/x", "term")]
    fn guid_refs_point_at_their_collection(
        #[case] reference: GuidRef,
        #[case] href: &str,
        #[case] kind: &str,
    ) {
        let value = serde_json::to_value(&reference).expect("serialise reference");
        assert_eq!(value, json!({ "href": href, "sourcedId": "x", "type": kind }));
    }

    #[rstest]
    fn record_exposes_sourced_id(modified_at: DateTime<Utc>) {
        let category = Category {
            base: BaseModel::active("cat-9".to_owned(), modified_at),
            title: "Exams".to_owned(),
            weight: 50,
        };
        assert_eq!(category.sourced_id(), "cat-9");
    }
}
