//! User handlers, including the teacher and student views.
//!
//! ```text
//! GET /ims/oneroster/v1p1/users[/{id}]
//! GET /ims/oneroster/v1p1/teachers[/{id}]
//! GET /ims/oneroster/v1p1/students[/{id}]
//! ```

use actix_web::{get, web};

use crate::domain::UserFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{UserResponse, UsersResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

fn list(state: &HttpState, filter: UserFilter) -> web::Json<UsersResponse> {
    web::Json(UsersResponse {
        users: state.roster.users(filter),
    })
}

fn fetch(state: &HttpState, id: &str, filter: UserFilter) -> ApiResult<web::Json<UserResponse>> {
    let user = state.roster.user(id, filter)?;
    Ok(web::Json(UserResponse { user }))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/users",
    responses(
        (status = 200, description = "All users", body = UsersResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
#[get("/users")]
pub async fn get_all_users(state: web::Data<HttpState>) -> web::Json<UsersResponse> {
    list(&state, UserFilter::All)
}

/// Fetch one user by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/users/{id}",
    params(("id" = String, Path, description = "sourcedId of the user")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    fetch(&state, id.as_str(), UserFilter::All)
}

/// List users with the `teacher` role.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/teachers",
    responses(
        (status = 200, description = "All teachers", body = UsersResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getAllTeachers"
)]
#[get("/teachers")]
pub async fn get_all_teachers(state: web::Data<HttpState>) -> web::Json<UsersResponse> {
    list(&state, UserFilter::Teachers)
}

/// Fetch one teacher by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/teachers/{id}",
    params(("id" = String, Path, description = "sourcedId of the teacher")),
    responses(
        (status = 200, description = "Teacher", body = UserResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getTeacher"
)]
#[get("/teachers/{id}")]
pub async fn get_teacher(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    fetch(&state, id.as_str(), UserFilter::Teachers)
}

/// List users with the `student` role.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/students",
    responses(
        (status = 200, description = "All students", body = UsersResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getAllStudents"
)]
#[get("/students")]
pub async fn get_all_students(state: web::Data<HttpState>) -> web::Json<UsersResponse> {
    list(&state, UserFilter::Students)
}

/// Fetch one student by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/students/{id}",
    params(("id" = String, Path, description = "sourcedId of the student")),
    responses(
        (status = 200, description = "Student", body = UserResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    fetch(&state, id.as_str(), UserFilter::Students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceKind;
    use crate::domain::ports::MockRosterQuery;
    use crate::inbound::http::test_utils::get_json;
    use actix_web::http::StatusCode;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("/ims/oneroster/v1p1/users", UserFilter::All)]
    #[case("/ims/oneroster/v1p1/teachers", UserFilter::Teachers)]
    #[case("/ims/oneroster/v1p1/students", UserFilter::Students)]
    #[actix_web::test]
    async fn list_routes_pass_their_filter(#[case] uri: &str, #[case] filter: UserFilter) {
        let mut roster = MockRosterQuery::new();
        roster
            .expect_users()
            .with(eq(filter))
            .times(1)
            .return_const(Vec::new());
        let (status, body) = get_json(roster, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "users": [] }));
    }

    #[rstest]
    #[case("/ims/oneroster/v1p1/teachers/abc", UserFilter::Teachers, ResourceKind::Teacher)]
    #[case("/ims/oneroster/v1p1/students/abc", UserFilter::Students, ResourceKind::Student)]
    #[case("/ims/oneroster/v1p1/users/abc", UserFilter::All, ResourceKind::User)]
    #[actix_web::test]
    async fn missing_user_maps_to_not_found(
        #[case] uri: &str,
        #[case] filter: UserFilter,
        #[case] kind: ResourceKind,
    ) {
        let mut roster = MockRosterQuery::new();
        roster
            .expect_user()
            .withf(move |id, requested| id == "abc" && *requested == filter)
            .times(1)
            .returning(move |_, _| Err(kind.not_found()));
        let (status, body) = get_json(roster, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(format!("{} not found", kind.label()).as_str())
        );
    }
}
