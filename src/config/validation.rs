//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject a missing or non-http(s) destination URL before startup
//! - Validate value ranges (window and limits non-zero, address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the listener binds, so a broken destination never serves

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic configuration problem.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("forward.destination_url is empty; set DESTINATION_URL or provide it in the config file")]
    MissingDestination,

    #[error("forward.destination_url is not a valid http(s) URL: {0}")]
    InvalidDestination(String),

    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("rate_limit.window_secs must be greater than zero")]
    ZeroWindow,

    #[error("rate_limit.max_requests must be greater than zero")]
    ZeroLimit,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodySize,

    #[error("cors.allowed_origins is empty; no browser caller would be admitted")]
    EmptyOriginList,
}

/// Check the loaded configuration for semantic problems.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.forward.destination_url.trim().is_empty() {
        errors.push(ValidationError::MissingDestination);
    } else {
        match Url::parse(&config.forward.destination_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::InvalidDestination(format!(
                "unsupported scheme '{}'",
                url.scheme()
            ))),
            Err(e) => errors.push(ValidationError::InvalidDestination(e.to_string())),
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.rate_limit.enabled {
        if config.rate_limit.window_secs == 0 {
            errors.push(ValidationError::ZeroWindow);
        }
        if config.rate_limit.max_requests == 0 {
            errors.push(ValidationError::ZeroLimit);
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodySize);
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::EmptyOriginList);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Join a batch of validation errors into one readable line.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
