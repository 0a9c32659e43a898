//! Academic session handlers with the term and grading period views.
//!
//! ```text
//! GET /ims/oneroster/v1p1/academicSessions[/{id}]
//! GET /ims/oneroster/v1p1/terms[/{id}]
//! GET /ims/oneroster/v1p1/gradingPeriods[/{id}]
//! ```
//!
//! All three answer with the `academicSessions` / `academicSession`
//! envelope.

use actix_web::{get, web};

use crate::domain::SessionFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{AcademicSessionResponse, AcademicSessionsResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

fn list(state: &HttpState, filter: SessionFilter) -> web::Json<AcademicSessionsResponse> {
    web::Json(AcademicSessionsResponse {
        academic_sessions: state.roster.academic_sessions(filter),
    })
}

fn fetch(
    state: &HttpState,
    id: &str,
    filter: SessionFilter,
) -> ApiResult<web::Json<AcademicSessionResponse>> {
    let academic_session = state.roster.academic_session(id, filter)?;
    Ok(web::Json(AcademicSessionResponse { academic_session }))
}

/// List every academic session.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/academicSessions",
    responses(
        (status = 200, description = "All academic sessions", body = AcademicSessionsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["academicSessions"],
    operation_id = "getAllAcademicSessions"
)]
#[get("/academicSessions")]
pub async fn get_all_academic_sessions(
    state: web::Data<HttpState>,
) -> web::Json<AcademicSessionsResponse> {
    list(&state, SessionFilter::All)
}

/// Fetch one academic session by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/academicSessions/{id}",
    params(("id" = String, Path, description = "sourcedId of the academic session")),
    responses(
        (status = 200, description = "Academic session", body = AcademicSessionResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Academic Session not found", body = ErrorResponse)
    ),
    tags = ["academicSessions"],
    operation_id = "getAcademicSession"
)]
#[get("/academicSessions/{id}")]
pub async fn get_academic_session(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<AcademicSessionResponse>> {
    fetch(&state, id.as_str(), SessionFilter::All)
}

/// List sessions of type `term`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/terms",
    responses(
        (status = 200, description = "All terms", body = AcademicSessionsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["academicSessions"],
    operation_id = "getAllTerms"
)]
#[get("/terms")]
pub async fn get_all_terms(state: web::Data<HttpState>) -> web::Json<AcademicSessionsResponse> {
    list(&state, SessionFilter::Terms)
}

/// Fetch one term by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/terms/{id}",
    params(("id" = String, Path, description = "sourcedId of the term")),
    responses(
        (status = 200, description = "Term", body = AcademicSessionResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Term not found", body = ErrorResponse)
    ),
    tags = ["academicSessions"],
    operation_id = "getTerm"
)]
#[get("/terms/{id}")]
pub async fn get_term(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<AcademicSessionResponse>> {
    fetch(&state, id.as_str(), SessionFilter::Terms)
}

/// List sessions of type `gradingPeriod`.
///
/// Always empty for the generated roster.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/gradingPeriods",
    responses(
        (status = 200, description = "All grading periods", body = AcademicSessionsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["academicSessions"],
    operation_id = "getAllGradingPeriods"
)]
#[get("/gradingPeriods")]
pub async fn get_all_grading_periods(
    state: web::Data<HttpState>,
) -> web::Json<AcademicSessionsResponse> {
    list(&state, SessionFilter::GradingPeriods)
}

/// Fetch one grading period by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/gradingPeriods/{id}",
    params(("id" = String, Path, description = "sourcedId of the grading period")),
    responses(
        (status = 200, description = "Grading period", body = AcademicSessionResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Grading Period not found", body = ErrorResponse)
    ),
    tags = ["academicSessions"],
    operation_id = "getGradingPeriod"
)]
#[get("/gradingPeriods/{id}")]
pub async fn get_grading_period(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<AcademicSessionResponse>> {
    fetch(&state, id.as_str(), SessionFilter::GradingPeriods)
}
