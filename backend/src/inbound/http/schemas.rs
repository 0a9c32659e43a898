//! OpenAPI schema definitions for roster records.
//!
//! The record types in `roster-data` stay framework-agnostic and do not
//! derive `ToSchema`. The wrappers below mirror their JSON shape for the
//! generated document only; nothing serialises through them.

use utoipa::ToSchema;

/// Lifecycle status of a record.
#[derive(ToSchema)]
#[schema(as = StatusType)]
pub enum StatusTypeSchema {
    /// The record is live.
    #[schema(rename = "active")]
    Active,
    /// The record is scheduled for removal.
    #[schema(rename = "tobedeleted")]
    ToBeDeleted,
}

/// Kind of organisation.
#[derive(ToSchema)]
#[schema(as = OrgType)]
pub enum OrgTypeSchema {
    /// A single school.
    #[schema(rename = "school")]
    School,
    /// A district.
    #[schema(rename = "district")]
    District,
}

/// Role a user plays.
#[derive(ToSchema)]
#[schema(as = RoleType)]
pub enum RoleTypeSchema {
    /// Learner.
    #[schema(rename = "student")]
    Student,
    /// Teaching staff.
    #[schema(rename = "teacher")]
    Teacher,
}

/// Kind of academic session.
#[derive(ToSchema)]
#[schema(as = SessionType)]
pub enum SessionTypeSchema {
    /// Term.
    #[schema(rename = "term")]
    Term,
    /// Semester.
    #[schema(rename = "semester")]
    Semester,
    /// Grading period.
    #[schema(rename = "gradingPeriod")]
    GradingPeriod,
    /// School year.
    #[schema(rename = "schoolYear")]
    SchoolYear,
}

/// Kind of class.
#[derive(ToSchema)]
#[schema(as = ClassType)]
pub enum ClassTypeSchema {
    /// Homeroom class.
    #[schema(rename = "homeroom")]
    Homeroom,
    /// Timetabled class.
    #[schema(rename = "scheduled")]
    Scheduled,
}

/// Reference to another record.
#[derive(ToSchema)]
#[schema(as = GUIDRef)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GuidRefSchema {
    /// Relative URL of the referenced record.
    #[schema(example = "/orgs/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    href: String,
    /// Identifier of the referenced record.
    #[schema(rename = "sourcedId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    sourced_id: String,
    /// Declared type of the referenced record.
    #[schema(rename = "type", example = "org")]
    kind: String,
}

/// External identifier attached to a user.
#[derive(ToSchema)]
#[schema(as = UserId)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserIdentifierSchema {
    /// Identifier scheme.
    #[schema(rename = "type")]
    kind: String,
    /// Identifier value.
    identifier: String,
}

/// Organisation such as a school or district.
#[derive(ToSchema)]
#[schema(as = Org, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OrgSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "School #1")]
    name: String,
    #[schema(rename = "type")]
    org_type: OrgTypeSchema,
    #[schema(example = "SCH001")]
    identifier: String,
    parent: Option<GuidRefSchema>,
    children: Option<Vec<GuidRefSchema>>,
}

/// Person in the roster.
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "student1")]
    username: String,
    user_ids: Vec<UserIdentifierSchema>,
    enabled_user: bool,
    #[schema(example = "Student")]
    given_name: String,
    #[schema(example = "User1")]
    family_name: String,
    role: RoleTypeSchema,
    #[schema(example = "STU0001")]
    identifier: String,
    #[schema(example = "student1@example.com")]
    email: String,
    orgs: Vec<GuidRefSchema>,
}

/// Course catalogue entry.
#[derive(ToSchema)]
#[schema(as = Course, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "Course 1")]
    title: String,
    school_year: Option<GuidRefSchema>,
    #[schema(example = "CRS001")]
    course_code: String,
    grades: Option<Vec<String>>,
    subjects: Option<Vec<String>>,
    subject_codes: Option<Vec<String>>,
    resources: Option<Vec<GuidRefSchema>>,
}

/// Timetabled instance of a course.
#[derive(ToSchema)]
#[schema(as = Class, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ClassSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "Course 2")]
    title: String,
    #[schema(example = "CRS002-S1")]
    class_code: String,
    class_type: ClassTypeSchema,
    location: String,
    grades: Vec<String>,
    subjects: Vec<String>,
    course: GuidRefSchema,
    school: GuidRefSchema,
    terms: Vec<GuidRefSchema>,
    subject_codes: Option<Vec<String>>,
    periods: Option<Vec<String>>,
    resources: Option<Vec<GuidRefSchema>>,
}

/// Link between a user and a class.
#[derive(ToSchema)]
#[schema(as = Enrollment, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnrollmentSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    user: GuidRefSchema,
    class: GuidRefSchema,
    school: GuidRefSchema,
    role: RoleTypeSchema,
    primary: bool,
    #[schema(example = "2025-09-01")]
    begin_date: String,
    #[schema(example = "2025-12-20")]
    end_date: String,
}

/// Calendar period such as a term.
#[derive(ToSchema)]
#[schema(as = AcademicSession, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AcademicSessionSchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "Fall Semester 2025")]
    title: String,
    #[schema(example = "2025-09-01")]
    start_date: String,
    #[schema(example = "2025-12-20")]
    end_date: String,
    #[schema(rename = "type")]
    session_type: SessionTypeSchema,
    parent: Option<GuidRefSchema>,
    children: Option<Vec<GuidRefSchema>>,
    #[schema(example = "2025")]
    school_year: String,
}

/// Weighted grading category.
#[derive(ToSchema)]
#[schema(as = Category, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CategorySchema {
    sourced_id: String,
    status: StatusTypeSchema,
    #[schema(example = "2025-09-01T08:00:00Z")]
    date_last_modified: String,
    metadata: Option<serde_json::Value>,
    #[schema(example = "Homework")]
    title: String,
    #[schema(example = 20)]
    weight: i32,
}
