//! Response envelopes wrapping roster records under a named key.
//!
//! Collections use the plural key (`{"orgs": [...]}`) and single records the
//! singular one (`{"org": {...}}`). Filtered views reuse the envelope of the
//! underlying collection, so `/schools` answers with `orgs` and `/terms` with
//! `academicSessions`.

use roster_data::{AcademicSession, Category, Class, Course, Enrollment, Org, User};
use serde::Serialize;
use utoipa::ToSchema;

use super::schemas::{
    AcademicSessionSchema, CategorySchema, ClassSchema, CourseSchema, EnrollmentSchema, OrgSchema,
    UserSchema,
};

/// `{"orgs": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct OrgsResponse {
    /// Organisations in the requested view.
    #[schema(value_type = Vec<OrgSchema>)]
    pub orgs: Vec<Org>,
}

/// `{"org": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct OrgResponse {
    /// The requested organisation.
    #[schema(value_type = OrgSchema)]
    pub org: Org,
}

/// `{"users": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    /// Users in the requested view.
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
}

/// `{"user": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// The requested user.
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// `{"courses": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct CoursesResponse {
    /// Every course.
    #[schema(value_type = Vec<CourseSchema>)]
    pub courses: Vec<Course>,
}

/// `{"course": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    /// The requested course.
    #[schema(value_type = CourseSchema)]
    pub course: Course,
}

/// `{"classes": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassesResponse {
    /// Every class.
    #[schema(value_type = Vec<ClassSchema>)]
    pub classes: Vec<Class>,
}

/// `{"class": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassResponse {
    /// The requested class.
    #[schema(value_type = ClassSchema)]
    pub class: Class,
}

/// `{"categories": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Grading categories.
    #[schema(value_type = Vec<CategorySchema>)]
    pub categories: Vec<Category>,
}

/// `{"enrollments": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentsResponse {
    /// Every enrollment.
    #[schema(value_type = Vec<EnrollmentSchema>)]
    pub enrollments: Vec<Enrollment>,
}

/// `{"enrollment": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    /// The requested enrollment.
    #[schema(value_type = EnrollmentSchema)]
    pub enrollment: Enrollment,
}

/// `{"academicSessions": [...]}`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSessionsResponse {
    /// Academic sessions in the requested view.
    #[schema(value_type = Vec<AcademicSessionSchema>)]
    pub academic_sessions: Vec<AcademicSession>,
}

/// `{"academicSession": {...}}`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSessionResponse {
    /// The requested academic session.
    #[schema(value_type = AcademicSessionSchema)]
    pub academic_session: AcademicSession,
}
