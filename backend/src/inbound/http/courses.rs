//! Course handlers.

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{CourseResponse, CoursesResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// List every course.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/courses",
    responses(
        (status = 200, description = "All courses", body = CoursesResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["courses"],
    operation_id = "getAllCourses"
)]
#[get("/courses")]
pub async fn get_all_courses(state: web::Data<HttpState>) -> web::Json<CoursesResponse> {
    web::Json(CoursesResponse {
        courses: state.roster.courses(),
    })
}

/// Fetch one course by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/courses/{id}",
    params(("id" = String, Path, description = "sourcedId of the course")),
    responses(
        (status = 200, description = "Course", body = CourseResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<CourseResponse>> {
    let course = state.roster.course(id.as_str())?;
    Ok(web::Json(CourseResponse { course }))
}
