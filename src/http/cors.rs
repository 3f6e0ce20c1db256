use crate::cli::Args;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&args.allowed_origins))
        .allow_headers([
            HeaderName::from_static("user-agent"),
            HeaderName::from_static("sec-fetch-mode"),
            HeaderName::from_static("referer"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

fn allowed_origins(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }
    let origins = configured
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring malformed allowed origin {origin:?}.");
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(origins)
}
