//! Class handlers and the per-class category listing.
//!
//! ```text
//! GET /ims/oneroster/v1p1/classes
//! GET /ims/oneroster/v1p1/classes/{id}
//! GET /ims/oneroster/v1p1/classes/{id}/categories
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelopes::{CategoriesResponse, ClassResponse, ClassesResponse};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// List every class.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/classes",
    responses(
        (status = 200, description = "All classes", body = ClassesResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["classes"],
    operation_id = "getAllClasses"
)]
#[get("/classes")]
pub async fn get_all_classes(state: web::Data<HttpState>) -> web::Json<ClassesResponse> {
    web::Json(ClassesResponse {
        classes: state.roster.classes(),
    })
}

/// Fetch one class by `sourcedId`.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/classes/{id}",
    params(("id" = String, Path, description = "sourcedId of the class")),
    responses(
        (status = 200, description = "Class", body = ClassResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain"),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tags = ["classes"],
    operation_id = "getClass"
)]
#[get("/classes/{id}")]
pub async fn get_class(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<ClassResponse>> {
    let class = state.roster.class(id.as_str())?;
    Ok(web::Json(ClassResponse { class }))
}

/// List grading categories for a class.
///
/// Categories are shared by every class; the id is not checked against the
/// class list, so unknown ids still answer `200` with the full set.
#[utoipa::path(
    get,
    path = "/ims/oneroster/v1p1/classes/{id}/categories",
    params(("id" = String, Path, description = "sourcedId of the class")),
    responses(
        (status = 200, description = "Grading categories", body = CategoriesResponse),
        (status = 401, description = "Missing Authorization header", body = String, content_type = "text/plain")
    ),
    tags = ["classes"],
    operation_id = "getCategoriesForClass"
)]
#[get("/classes/{id}/categories")]
pub async fn get_categories_for_class(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> web::Json<CategoriesResponse> {
    web::Json(CategoriesResponse {
        categories: state.roster.class_categories(id.as_str()),
    })
}
