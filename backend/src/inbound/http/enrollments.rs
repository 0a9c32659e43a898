//! Enrollment handlers.
//!
//! The generated roster carries no enrollments, so the list is always empty
//! and every lookup answers `404`. The routes exist for client compatibility.

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{EnrollmentResponse, EnrollmentsResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// List every enrollment.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/enrollments",
    responses(
        (status = 200, description = "All enrollments", body = EnrollmentsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["enrollments"],
    operation_id = "getAllEnrollments"
)]
#[get("/enrollments")]
pub async fn get_all_enrollments(state: web::Data<HttpState>) -> web::Json<EnrollmentsResponse> {
    web::Json(EnrollmentsResponse {
        enrollments: state.roster.enrollments(),
    })
}

/// Fetch one enrollment by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/enrollments/{id}",
    params(("id" = String, Path, description = "sourcedId of the enrollment")),
    responses(
        (status = 200, description = "Enrollment", body = EnrollmentResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    tags = ["enrollments"],
    operation_id = "getEnrollment"
)]
#[get("/enrollments/{id}")]
pub async fn get_enrollment(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<EnrollmentResponse>> {
    let enrollment = state.roster.enrollment(id.as_str())?;
    Ok(web::Json(EnrollmentResponse { enrollment }))
}
