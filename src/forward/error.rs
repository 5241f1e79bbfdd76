//! Error types for the forwarding plane.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures that prevent a destination response from being relayed.
///
/// A destination that answered with an error status is not represented here:
/// its status and body pass through to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The destination never produced a response (unreachable, refused,
    /// reset, or timed out at the transport layer).
    #[error("No response received from the server.")]
    NoResponse,

    /// Any other failure while constructing or issuing the outbound call.
    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
