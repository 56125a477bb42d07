//! Upstream client error definitions.

use thiserror::Error;

/// An outbound call that never produced an HTTP status.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured client timeout elapsed.
    #[error("{upstream} upstream timed out")]
    Timeout { upstream: &'static str },

    /// Connection refused, DNS failure and the like.
    #[error("could not connect to {upstream} upstream: {reason}")]
    Connect { upstream: &'static str, reason: String },

    /// Any other failure while sending or reading the body.
    #[error("request to {upstream} upstream failed: {source}")]
    Request {
        upstream: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// Categorize a reqwest failure.
    pub fn from_reqwest(upstream: &'static str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout { upstream }
        } else if error.is_connect() {
            Self::Connect {
                upstream,
                reason: error.to_string(),
            }
        } else {
            Self::Request {
                upstream,
                source: error,
            }
        }
    }

    /// Name of the upstream the failure belongs to.
    pub fn upstream(&self) -> &'static str {
        match self {
            Self::Timeout { upstream } | Self::Connect { upstream, .. } | Self::Request { upstream, .. } => {
                *upstream
            }
        }
    }
}

/// Errors raised while constructing an upstream client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid {upstream} upstream url '{url}': {source}")]
    InvalidUrl {
        upstream: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build {upstream} http client: {source}")]
    Build {
        upstream: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
