//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every roster endpoint, the two health probes, the
//! record schema wrappers from [`crate::inbound::http::schemas`] and the
//! `Authorization` header security scheme. Swagger UI serves the document
//! at `/docs` and `openapi-dump` prints it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::envelopes::{
    AcademicSessionResponse, AcademicSessionsResponse, CategoriesResponse, ClassResponse,
    ClassesResponse, CourseResponse, CoursesResponse, EnrollmentResponse, EnrollmentsResponse,
    OrgResponse, OrgsResponse, UserResponse, UsersResponse,
};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::{
    AcademicSessionSchema, CategorySchema, ClassSchema, ClassTypeSchema, CourseSchema,
    EnrollmentSchema, GuidRefSchema, OrgSchema, OrgTypeSchema, RoleTypeSchema, SessionTypeSchema,
    StatusTypeSchema, UserIdentifierSchema, UserSchema,
};

/// Name of the security scheme registered in the document.
pub const SECURITY_SCHEME: &str = "ApiKeyAuth";

/// Enrich the generated document with the header security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SECURITY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Any non-empty value is accepted.",
            ))),
        );
    }
}

/// OpenAPI document for the roster API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "OneRoster Mock API",
        version = "1.1",
        description = "Read-only OneRoster v1.1 rostering endpoints backed by generated data.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("ApiKeyAuth" = [])),
    paths(
        crate::inbound::http::orgs::get_all_orgs,
        crate::inbound::http::orgs::get_org,
        crate::inbound::http::orgs::get_all_schools,
        crate::inbound::http::orgs::get_school,
        crate::inbound::http::users::get_all_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_all_teachers,
        crate::inbound::http::users::get_teacher,
        crate::inbound::http::users::get_all_students,
        crate::inbound::http::users::get_student,
        crate::inbound::http::courses::get_all_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::classes::get_all_classes,
        crate::inbound::http::classes::get_class,
        crate::inbound::http::classes::get_categories_for_class,
        crate::inbound::http::enrollments::get_all_enrollments,
        crate::inbound::http::enrollments::get_enrollment,
        crate::inbound::http::academic_sessions::get_all_academic_sessions,
        crate::inbound::http::academic_sessions::get_academic_session,
        crate::inbound::http::academic_sessions::get_all_terms,
        crate::inbound::http::academic_sessions::get_term,
        crate::inbound::http::academic_sessions::get_all_grading_periods,
        crate::inbound::http::academic_sessions::get_grading_period,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StatusTypeSchema,
        OrgTypeSchema,
        RoleTypeSchema,
        SessionTypeSchema,
        ClassTypeSchema,
        GuidRefSchema,
        UserIdentifierSchema,
        OrgSchema,
        UserSchema,
        CourseSchema,
        ClassSchema,
        EnrollmentSchema,
        AcademicSessionSchema,
        CategorySchema,
        OrgsResponse,
        OrgResponse,
        UsersResponse,
        UserResponse,
        CoursesResponse,
        CourseResponse,
        ClassesResponse,
        ClassResponse,
        CategoriesResponse,
        EnrollmentsResponse,
        EnrollmentResponse,
        AcademicSessionsResponse,
        AcademicSessionResponse,
        ErrorResponse,
    )),
    tags(
        (name = "orgs", description = "Organisations and schools"),
        (name = "users", description = "Users, teachers and students"),
        (name = "courses", description = "Course catalogue"),
        (name = "classes", description = "Classes and their grading categories"),
        (name = "enrollments", description = "Class enrollments"),
        (name = "academicSessions", description = "Academic sessions, terms and grading periods"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn document_is_titled_and_licensed() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "OneRoster Mock API");
        assert_eq!(
            doc.info.license.as_ref().map(|license| license.name.as_str()),
            Some("Apache-2.0")
        );
    }

    #[test]
    fn header_security_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().expect("components");
        let scheme = components
            .security_schemes
            .get(SECURITY_SCHEME)
            .expect("security scheme");
        let json = serde_json::to_value(scheme).expect("serialises");
        assert_eq!(json["type"], "apiKey");
        assert_eq!(json["in"], "header");
        assert_eq!(json["name"], "Authorization");
    }

    #[rstest]
    #[case("/ims/oneroster/v1p1/orgs")]
    #[case("/ims/oneroster/v1p1/schools/{id}")]
    #[case("/ims/oneroster/v1p1/classes/{id}/categories")]
    #[case("/ims/oneroster/v1p1/gradingPeriods/{id}")]
    #[case("/health/ready")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn record_schemas_expose_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let class = schemas.get("Class").expect("Class schema");
        assert_object_schema_has_field(class, "classCode");
        assert_object_schema_has_field(class, "terms");

        let envelope = schemas
            .get("AcademicSessionsResponse")
            .expect("envelope schema");
        assert_object_schema_has_field(envelope, "academicSessions");
    }
}
