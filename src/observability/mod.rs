//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and upstream clients produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every log line of a request
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
