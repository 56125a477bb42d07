//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and upstream URLs
//! - Validate value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{GatewayConfig, UpstreamConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field}: path '{value}' must start with '/'")]
    InvalidPath { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    ZeroTimeout { field: String },

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs".to_string(),
        });
    }

    check_upstream("upstreams.auth", &config.upstreams.auth, &mut errors);
    check_upstream("upstreams.customers", &config.upstreams.customers, &mut errors);

    let observability = &config.observability;
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }
    if observability.metrics_enabled {
        check_address("observability.metrics_address", &observability.metrics_address, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_upstream(field: &'static str, upstream: &UpstreamConfig, errors: &mut Vec<ValidationError>) {
    if let Some(path) = &upstream.path {
        if !path.starts_with('/') {
            errors.push(ValidationError::InvalidPath {
                field,
                value: path.clone(),
            });
        }
    }

    match url::Url::parse(&upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidUrl {
            field,
            value: upstream.base_url.clone(),
        }),
    }

    if upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: format!("{field}.connect_timeout_secs"),
        });
    }
    if upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: format!("{field}.request_timeout_secs"),
        });
    }
}
