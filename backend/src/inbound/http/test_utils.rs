//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::ports::MockRosterQuery;
use crate::inbound::http::routes::roster_scope;
use crate::inbound::http::state::HttpState;

/// Wrap a mock port in handler state.
pub fn mock_state(roster: MockRosterQuery) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(roster)))
}

/// Issue an authorised `GET` against the roster routes and decode the JSON
/// body.
///
/// The app carries no middleware, so only handler behaviour is observed.
pub async fn get_json(roster: MockRosterQuery, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(mock_state(roster))
            .service(roster_scope()),
    )
    .await;
    let request = test::TestRequest::get()
        .uri(uri)
        .insert_header((AUTHORIZATION, "Bearer test"))
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let body = test::read_body_json(response).await;
    (status, body)
}
