//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the customer gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Shape of the customer pipeline.
    pub pipeline: PipelineConfig,

    /// Upstream endpoints the gateway calls.
    pub upstreams: UpstreamsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Whether the pipeline fetches a bearer token before calling the data upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthStep {
    /// Call the auth upstream first and forward its token.
    #[default]
    Required,
    /// Call the data upstream without an Authorization header.
    Disabled,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub auth: AuthStep,
}

/// Both upstream endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamsConfig {
    /// Token endpoint.
    pub auth: UpstreamConfig,

    /// Customer listing endpoint.
    pub customers: UpstreamConfig,
}

/// Default path of the token endpoint.
pub const DEFAULT_AUTH_PATH: &str = "/auth";

/// Default path of the customer listing endpoint.
pub const DEFAULT_CUSTOMERS_PATH: &str = "/wiremock";

impl UpstreamsConfig {
    pub fn auth_endpoint(&self) -> String {
        self.auth.endpoint(DEFAULT_AUTH_PATH)
    }

    pub fn customers_endpoint(&self) -> String {
        self.customers.endpoint(DEFAULT_CUSTOMERS_PATH)
    }
}

/// A single upstream endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL (e.g., "http://localhost:8089").
    pub base_url: String,

    /// Path joined onto the base URL. Each upstream has its own default.
    pub path: Option<String>,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl UpstreamConfig {
    /// Full endpoint URL as text, before parsing.
    pub fn endpoint(&self, default_path: &str) -> String {
        let path = self.path.as_deref().unwrap_or(default_path);
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8089".to_string(),
            path: None,
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty output for development, JSON for production.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.pipeline.auth, AuthStep::Required);
        assert_eq!(config.upstreams.auth_endpoint(), "http://localhost:8089/auth");
        assert_eq!(config.upstreams.customers_endpoint(), "http://localhost:8089/wiremock");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [pipeline]
            auth = "disabled"

            [upstreams.customers]
            base_url = "http://mock:9000/"
            "#,
        )
        .unwrap();

        assert_eq!(config.pipeline.auth, AuthStep::Disabled);
        assert_eq!(config.upstreams.customers_endpoint(), "http://mock:9000/wiremock");
        assert_eq!(config.upstreams.auth_endpoint(), "http://localhost:8089/auth");
        assert_eq!(config.upstreams.customers.request_timeout_secs, 10);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_auth_step_rejected() {
        let result = toml::from_str::<GatewayConfig>("[pipeline]\nauth = \"sometimes\"\n");
        assert!(result.is_err());
    }
}
