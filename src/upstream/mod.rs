//! Outbound clients for the two upstream services.
//!
//! # Data Flow
//! ```text
//! pipeline
//!     → auth.rs      GET /auth      → UpstreamReply (raw status + body)
//!     → customers.rs GET /wiremock  → UpstreamReply (raw status + body)
//! ```
//!
//! # Design Decisions
//! - Clients never interpret bodies; translation happens in the pipeline
//! - A call that never got a status is a `TransportError`, never a reply
//! - The pipeline depends on the traits below so tests can swap in fakes

pub mod auth;
pub mod customers;
pub mod error;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;

use crate::config::UpstreamConfig;
use crate::observability::metrics;

pub use auth::AuthClient;
pub use customers::CustomerClient;
pub use error::{ClientError, TransportError};

/// Upstream label used in logs and metrics for the token endpoint.
pub const AUTH_UPSTREAM: &str = "auth";

/// Upstream label used in logs and metrics for the customer endpoint.
pub const CUSTOMERS_UPSTREAM: &str = "customers";

/// Raw outcome of one outbound call that reached the upstream.
///
/// The body is kept as bytes so error bodies pass through unaltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Statuses of 400 and above are upstream errors.
    pub fn is_error(&self) -> bool {
        self.status.as_u16() >= 400
    }
}

/// Source of bearer tokens.
#[async_trait]
pub trait AuthUpstream: Send + Sync {
    async fn fetch_token(&self) -> Result<UpstreamReply, TransportError>;
}

/// Source of customer listings.
#[async_trait]
pub trait CustomerUpstream: Send + Sync {
    async fn fetch_customers(&self, bearer_token: Option<&str>) -> Result<UpstreamReply, TransportError>;
}

/// Build a reqwest client and endpoint URL for one upstream.
pub(crate) fn build_http_client(
    upstream: &'static str,
    config: &UpstreamConfig,
    default_path: &str,
) -> Result<(reqwest::Client, url::Url), ClientError> {
    let endpoint = config.endpoint(default_path);
    let url = url::Url::parse(&endpoint).map_err(|source| ClientError::InvalidUrl {
        upstream,
        url: endpoint.clone(),
        source,
    })?;

    // One call per upstream: redirects are replies, not hops. Upstreams are
    // reached directly, whatever HTTP_PROXY says.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(concat!("customer-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| ClientError::Build { upstream, source })?;

    Ok((client, url))
}

/// Read a response to completion, recording the call outcome.
pub(crate) async fn read_reply(
    upstream: &'static str,
    sent: Result<reqwest::Response, reqwest::Error>,
    start: Instant,
) -> Result<UpstreamReply, TransportError> {
    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            metrics::record_upstream_call(upstream, "transport_error", start);
            return Err(TransportError::from_reqwest(upstream, e));
        }
    };

    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        metrics::record_upstream_call(upstream, "transport_error", start);
        TransportError::from_reqwest(upstream, e)
    })?;

    metrics::record_upstream_call(upstream, status.as_str(), start);
    Ok(UpstreamReply { status, body })
}
