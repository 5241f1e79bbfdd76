//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID flows through every line
//! - Destination errors are logged with their message, payloads never are

pub mod logging;
