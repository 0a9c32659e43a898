//! Server construction and middleware wiring.

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::routes::roster_scope;
use crate::inbound::http::state::HttpState;
use crate::middleware::{RequireAuthorization, Trace, cors};

/// Assemble the application: roster routes, health probes and Swagger UI.
///
/// `Trace` is the outermost layer so rejected requests are still logged and
/// tagged with a `trace-id`. CORS sits between it and the header check so
/// preflight requests are answered without credentials.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequireAuthorization)
        .wrap(cors())
        .wrap(Trace)
        .service(roster_scope())
        .service(ready)
        .service(live)
        .service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Construct an Actix HTTP server for the given state and configuration.
///
/// The health state is marked ready once the listener is bound. The request
/// timeout bounds how long a client may take to send the request head; it
/// does not limit handler execution.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .client_request_timeout(config.request_timeout)
        .bind(config.bind_addr)?
        .run();

    info!(bind_addr = %config.bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
