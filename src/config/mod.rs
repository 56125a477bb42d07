//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → used once at startup to build clients and the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AuthStep, GatewayConfig, ListenerConfig, LogFormat, ObservabilityConfig, PipelineConfig,
    TimeoutConfig, UpstreamConfig, UpstreamsConfig,
};
pub use validation::{validate_config, ValidationError};
