//! Backend entry-point: generates the roster and serves it over HTTP.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::ServerSettings;
use backend::domain::InMemoryRosterQuery;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::create_server;
use backend::startup::build_roster;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = settings.into_server_config().map_err(std::io::Error::other)?;

    let dataset = build_roster(&DefaultClock, config.seed);
    let http_state = web::Data::new(HttpState::new(Arc::new(InMemoryRosterQuery::new(dataset))));
    let health_state = web::Data::new(HealthState::new());

    create_server(health_state, http_state, config)?.await
}
