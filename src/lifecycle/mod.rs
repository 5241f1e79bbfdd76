//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate (fail fast) → Init logging → Bind → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT or coordinator trigger → stop accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - Any startup error is fatal; the relay never serves half-configured
//! - Shutdown is cooperative: in-flight requests finish

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
