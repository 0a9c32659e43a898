//! Cross-origin policy for browser clients on local development ports.
//!
//! The policy must wrap outside [`super::RequireAuthorization`]: browsers
//! send preflight requests without credentials, so they are answered here
//! before the header check can reject them.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5100",
];

/// Methods advertised to preflight requests.
const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// Seconds a browser may cache a preflight answer.
const MAX_AGE_SECS: usize = 300;

/// Build the CORS middleware.
///
/// Requests from other origins are served without CORS headers rather than
/// rejected, leaving enforcement to the browser.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors;
///
/// let app = App::new().wrap(cors());
/// ```
#[must_use]
pub fn cors() -> Cors {
    ALLOWED_ORIGINS
        .into_iter()
        .fold(Cors::default(), |policy, origin| policy.allowed_origin(origin))
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .supports_credentials()
        .max_age(MAX_AGE_SECS)
        .block_on_origin_mismatch(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, test, web};
    use rstest::rstest;

    async fn call(request: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/resource", web::get().to(|| async { "ok" })),
        )
        .await;
        test::call_service(&app, request.to_request())
            .await
            .map_into_boxed_body()
    }

    fn header_value<'a>(response: &'a ServiceResponse, name: &HeaderName) -> Option<&'a str> {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[case("http://localhost:3000")]
    #[case("http://localhost:5173")]
    #[case("http://localhost:5100")]
    #[actix_web::test]
    async fn allowed_origins_are_echoed_with_credentials(#[case] origin: &str) {
        let response = call(
            test::TestRequest::get()
                .uri("/resource")
                .insert_header((header::ORIGIN, origin)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_value(&response, &header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin)
        );
        assert_eq!(
            header_value(&response, &header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
        assert!(
            header_value(&response, &header::ACCESS_CONTROL_EXPOSE_HEADERS)
                .is_some_and(|value| value.eq_ignore_ascii_case("link"))
        );
    }

    #[actix_web::test]
    async fn preflight_advertises_policy() {
        let response = call(
            test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/resource")
                .insert_header((header::ORIGIN, "http://localhost:3000"))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
                .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")),
        )
        .await;

        assert!(response.status().is_success());
        assert_eq!(
            header_value(&response, &header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("http://localhost:3000")
        );
        assert_eq!(
            header_value(&response, &header::ACCESS_CONTROL_MAX_AGE),
            Some("300")
        );
        let methods = header_value(&response, &header::ACCESS_CONTROL_ALLOW_METHODS)
            .expect("preflight lists allowed methods");
        for method in ALLOWED_METHODS {
            assert!(methods.contains(method), "missing {method} in {methods}");
        }
    }

    #[actix_web::test]
    async fn unknown_origins_get_no_cors_headers() {
        let response = call(
            test::TestRequest::get()
                .uri("/resource")
                .insert_header((header::ORIGIN, "http://evil.example")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(header_value(&response, &header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
