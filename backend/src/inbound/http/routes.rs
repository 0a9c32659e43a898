//! Route table for the roster API.

use actix_web::{Scope, web};

use super::{academic_sessions, classes, courses, enrollments, orgs, users};

/// Path prefix shared by every roster endpoint.
pub const API_BASE_PATH: &str = "/ims/oneroster/v1p1";

/// Build the `/ims/oneroster/v1p1` scope with every roster handler.
///
/// Handlers expect [`super::state::HttpState`] in app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::routes::roster_scope;
///
/// let app = App::new().service(roster_scope());
/// ```
#[must_use]
pub fn roster_scope() -> Scope {
    web::scope(API_BASE_PATH)
        .service(orgs::get_all_orgs)
        .service(orgs::get_org)
        .service(orgs::get_all_schools)
        .service(orgs::get_school)
        .service(users::get_all_users)
        .service(users::get_user)
        .service(users::get_all_teachers)
        .service(users::get_teacher)
        .service(users::get_all_students)
        .service(users::get_student)
        .service(courses::get_all_courses)
        .service(courses::get_course)
        .service(classes::get_all_classes)
        .service(classes::get_class)
        .service(classes::get_categories_for_class)
        .service(enrollments::get_all_enrollments)
        .service(enrollments::get_enrollment)
        .service(academic_sessions::get_all_academic_sessions)
        .service(academic_sessions::get_academic_session)
        .service(academic_sessions::get_all_terms)
        .service(academic_sessions::get_term)
        .service(academic_sessions::get_all_grading_periods)
        .service(academic_sessions::get_grading_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockRosterQuery;
    use crate::inbound::http::test_utils::mock_state;
    use crate::middleware::RequireAuthorization;
    use crate::middleware::authorization::UNAUTHORIZED_BODY;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    #[rstest]
    #[case("/ims/oneroster/v1p1/orgs")]
    #[case("/ims/oneroster/v1p1/users/abc")]
    #[case("/ims/oneroster/v1p1/classes/abc/categories")]
    #[case("/ims/oneroster/v1p1/gradingPeriods")]
    #[actix_web::test]
    async fn missing_authorization_short_circuits_before_any_lookup(#[case] uri: &str) {
        // No expectations: any port call would panic.
        let roster = MockRosterQuery::new();
        let app = test::init_service(
            App::new()
                .app_data(mock_state(roster))
                .wrap(RequireAuthorization)
                .service(roster_scope()),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = test::read_body(response).await;
        assert_eq!(body.as_ref(), UNAUTHORIZED_BODY.as_bytes());
    }

    #[actix_web::test]
    async fn unknown_paths_under_the_scope_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(mock_state(MockRosterQuery::new()))
                .service(roster_scope()),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/ims/oneroster/v1p1/lineItems")
            .insert_header(("Authorization", "Bearer x"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
