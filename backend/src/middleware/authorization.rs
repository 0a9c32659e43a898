//! Presence-only `Authorization` header check.
//!
//! This is a stub, not authentication: any non-empty header value is
//! accepted and its content is never inspected. Requests without one are
//! answered with `401` and a plain-text body before routing reaches a
//! handler. Documentation and health probe paths are exempt.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, ContentType};
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

/// Plain-text body returned when the header is missing, newline-terminated.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized: Missing Authorization header\n";

/// Path prefixes served without the header.
const EXEMPT_PREFIXES: [&str; 3] = ["/docs", "/api-docs", "/health"];

/// Middleware rejecting requests that carry no `Authorization` header.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::RequireAuthorization;
///
/// let app = App::new().wrap(RequireAuthorization);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAuthorization;

impl<S, B> Transform<S, ServiceRequest> for RequireAuthorization
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthorizationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthorizationMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`RequireAuthorization`].
pub struct RequireAuthorizationMiddleware<S> {
    service: Rc<S>,
}

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

fn has_authorization(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| !value.as_bytes().is_empty())
}

impl<S, B> Service<ServiceRequest> for RequireAuthorizationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_exempt(req.path()) || has_authorization(&req) {
            let service = Rc::clone(&self.service);
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        debug!(path = %req.path(), "rejecting request without Authorization header");
        let response = HttpResponse::Unauthorized()
            .insert_header(ContentType::plaintext())
            .body(UNAUTHORIZED_BODY);
        Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;

    #[rstest]
    #[case("/docs", true)]
    #[case("/docs/index.html", true)]
    #[case("/api-docs/openapi.json", true)]
    #[case("/health/ready", true)]
    #[case("/documents", false)]
    #[case("/healthz", false)]
    #[case("/ims/oneroster/v1p1/orgs", false)]
    fn exemptions_match_whole_segments(#[case] path: &str, #[case] exempt: bool) {
        assert_eq!(is_exempt(path), exempt);
    }

    async fn status_for(request: actix_test::TestRequest) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequireAuthorization)
                .route("/guarded", web::get().to(|| async { "ok" }))
                .route("/health/live", web::get().to(|| async { "alive" })),
        )
        .await;
        let res = actix_test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (
            status,
            String::from_utf8(body.to_vec()).expect("utf8 body"),
        )
    }

    #[actix_web::test]
    async fn missing_header_is_rejected_with_plain_text() {
        let (status, body) = status_for(actix_test::TestRequest::get().uri("/guarded")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, UNAUTHORIZED_BODY);
        assert_eq!(body, "Unauthorized: Missing Authorization header\n");
    }

    #[actix_web::test]
    async fn empty_header_is_rejected() {
        let request = actix_test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, ""));
        let (status, _) = status_for(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn any_non_empty_header_is_accepted() {
        let request = actix_test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, "anything at all"));
        let (status, body) = status_for(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[actix_web::test]
    async fn exempt_paths_skip_the_check() {
        let (status, body) = status_for(actix_test::TestRequest::get().uri("/health/live")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alive");
    }
}
