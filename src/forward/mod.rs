//! Outbound forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! /submit handler
//!     → client.rs (build outbound POST, dispatch once)
//!     → destination responded: status + body relayed untouched
//!     → no response obtained: error.rs → fixed 500
//!     → construction failed:  error.rs → 500 with description
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound request: no retries, no backoff
//! - The payload is opaque bytes and is never inspected
//! - Transport errors are logged locally, never exposed to the caller

pub mod client;
pub mod error;

pub use client::{build_client, forward, ForwardClient};
pub use error::ForwardError;
