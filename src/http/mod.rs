//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (tag with x-request-id)
//!     → security layers (cors, headers, rate limit)
//!     → /submit handler → forward subsystem → destination
//!     → pass-through of destination status + body to the client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
