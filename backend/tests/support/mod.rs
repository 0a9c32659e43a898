//! Shared helpers for roster API integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module builds the full application once per request batch over a single
//! shared, seeded roster.

use std::sync::{Arc, LazyLock};

use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderMap};
use actix_web::test::{self, TestRequest};
use actix_web::web;
use backend::domain::InMemoryRosterQuery;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::build_app;
use chrono::Utc;
use roster_data::{GeneratorOptions, RosterDataset, generate_roster};
use serde_json::Value;

/// Prefix of every roster route.
pub const BASE: &str = "/ims/oneroster/v1p1";

static DATASET: LazyLock<Arc<RosterDataset>> =
    LazyLock::new(|| Arc::new(generate_roster(&GeneratorOptions::seeded(2024), Utc::now())));

/// Response captured from the test service.
#[derive(Debug)]
pub struct Captured {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl Captured {
    /// Decode the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    /// Decode the body as UTF-8 text.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("response body is UTF-8")
    }

    /// Header value as a string, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// `GET` request carrying an arbitrary `Authorization` header.
pub fn authorised(uri: &str) -> TestRequest {
    TestRequest::get()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, "Bearer integration-test"))
}

/// `GET` request without any `Authorization` header.
pub fn anonymous(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

/// Send every request to one application instance, in order.
pub async fn send_all(requests: Vec<TestRequest>, ready: bool) -> Vec<Captured> {
    let health = web::Data::new(HealthState::new());
    if ready {
        health.mark_ready();
    }
    let roster = web::Data::new(HttpState::new(Arc::new(InMemoryRosterQuery::new(
        Arc::clone(&DATASET),
    ))));
    let app = test::init_service(build_app(health, roster)).await;

    let mut captured = Vec::with_capacity(requests.len());
    for request in requests {
        let response = test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let headers = response.headers().clone();
        let body = test::read_body(response).await.to_vec();
        captured.push(Captured {
            status,
            headers,
            body,
        });
    }
    captured
}

/// Send a single request.
pub async fn send(request: TestRequest) -> Captured {
    send_all(vec![request], true)
        .await
        .pop()
        .expect("one response per request")
}

/// Fetch a collection and return its entries under `key`.
pub async fn list(path: &str, key: &str) -> Vec<Value> {
    let response = send(authorised(&format!("{BASE}{path}"))).await;
    assert_eq!(response.status, StatusCode::OK, "listing {path}");
    response.json()[key]
        .as_array()
        .unwrap_or_else(|| panic!("{key} is an array"))
        .clone()
}

/// `sourcedId` of a JSON record.
pub fn sourced_id(record: &Value) -> String {
    record["sourcedId"]
        .as_str()
        .expect("record has a sourcedId")
        .to_owned()
}
