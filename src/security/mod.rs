//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (origin allow-list, one layer, no second header path)
//!     → rate_limit.rs (per-IP fixed window on /submit)
//!     → handler
//! Outgoing response:
//!     → headers.rs (hardening response headers)
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - No trust in client input

pub mod cors;
pub mod headers;
pub mod rate_limit;
