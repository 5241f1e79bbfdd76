//! Origin allow-list.
//!
//! Permissive-origin logic lives here and only here: one layer built from
//! the configured allow-list. A request from an origin outside the list
//! never receives the `Access-Control-Allow-Origin` header.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::schema::CorsConfig;

/// Build the CORS layer from the configured origin allow-list.
///
/// An origin that does not form a valid header value is skipped with a
/// warning; the remaining list still applies.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
