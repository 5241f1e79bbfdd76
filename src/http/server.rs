//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay handlers
//! - Wire up middleware (tracing, request ID, CORS, headers, rate limit)
//! - Bind the server to a listener with graceful shutdown
//! - Relay `/submit` payloads through the forward subsystem

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::forward::client::{build_client, forward, ForwardClient};
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::security::cors::cors_layer;
use crate::security::headers::security_headers_middleware;
use crate::security::rate_limit::{rate_limit_middleware, RateLimiterState};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: ForwardClient,
    pub destination_url: Arc<str>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            client: build_client(),
            destination_url: config.forward.destination_url.clone().into(),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let submit = if config.rate_limit.enabled {
            let limiter = Arc::new(RateLimiterState::new(config.rate_limit.clone()));
            post(submit_handler).layer(axum::middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ))
        } else {
            post(submit_handler)
        };

        let router = Router::new()
            .route("/submit", submit)
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size));

        let router = if config.security.enable_headers {
            router.layer(axum::middleware::from_fn(security_headers_middleware))
        } else {
            router
        };

        router
            .layer(cors_layer(&config.cors))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl-C/SIGTERM or when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handler for `POST /submit`: relays the payload to the configured
/// destination.
///
/// The body is opaque bytes: it is never parsed, validated, or rewritten,
/// only forwarded. The destination's status and body come back unchanged;
/// a destination that never answered maps to a fixed 500.
async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        bytes = body.len(),
        "Relaying submission"
    );

    match forward(&state.client, &state.destination_url, &request_id, body).await {
        Ok(response) => {
            let status = response.status();
            tracing::info!(
                request_id = %request_id,
                status = %status,
                "Destination responded"
            );

            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body)).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Error forwarding request"
            );
            e.into_response()
        }
    }
}

/// Handler for `GET /health`: liveness probe.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
