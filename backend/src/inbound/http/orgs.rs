//! Organisation handlers.
//!
//! ```text
//! GET /ims/oneroster/v1p1/orgs
//! GET /ims/oneroster/v1p1/orgs/{id}
//! GET /ims/oneroster/v1p1/schools
//! GET /ims/oneroster/v1p1/schools/{id}
//! ```

use actix_web::{get, web};

use crate::domain::OrgFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{OrgResponse, OrgsResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// List every organisation.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/orgs",
    responses(
        (status = 200, description = "All organisations", body = OrgsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["orgs"],
    operation_id = "getAllOrgs"
)]
#[get("/orgs")]
pub async fn get_all_orgs(state: web::Data<HttpState>) -> web::Json<OrgsResponse> {
    web::Json(OrgsResponse {
        orgs: state.roster.orgs(OrgFilter::All),
    })
}

/// Fetch one organisation by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/orgs/{id}",
    params(("id" = String, Path, description = "sourcedId of the organisation")),
    responses(
        (status = 200, description = "Organisation", body = OrgResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Org not found", body = ErrorResponse)
    ),
    tags = ["orgs"],
    operation_id = "getOrg"
)]
#[get("/orgs/{id}")]
pub async fn get_org(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<OrgResponse>> {
    let org = state.roster.org(id.as_str(), OrgFilter::All)?;
    Ok(web::Json(OrgResponse { org }))
}

/// List organisations of type `school`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/schools",
    responses(
        (status = 200, description = "All schools", body = OrgsResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["orgs"],
    operation_id = "getAllSchools"
)]
#[get("/schools")]
pub async fn get_all_schools(state: web::Data<HttpState>) -> web::Json<OrgsResponse> {
    web::Json(OrgsResponse {
        orgs: state.roster.orgs(OrgFilter::Schools),
    })
}

/// Fetch one school by `sourcedId`.
///
/// Organisations that exist but are not schools answer `404`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/schools/{id}",
    params(("id" = String, Path, description = "sourcedId of the school")),
    responses(
        (status = 200, description = "School", body = OrgResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tags = ["orgs"],
    operation_id = "getSchool"
)]
#[get("/schools/{id}")]
pub async fn get_school(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<OrgResponse>> {
    let org = state.roster.org(id.as_str(), OrgFilter::Schools)?;
    Ok(web::Json(OrgResponse { org }))
}
