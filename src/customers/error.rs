//! Pipeline error definitions.

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;

use crate::customers::types::ErrorResponse;
use crate::upstream::TransportError;

/// Body carried by an upstream error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// The upstream body parsed as an `ErrorResponse`.
    Structured(ErrorResponse),
    /// The upstream body verbatim.
    Raw(Bytes),
}

/// Terminal failures of the customer pipeline.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream could not be reached at all.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The upstream answered with status 400 or above.
    #[error("{upstream} upstream returned {status}")]
    Upstream {
        upstream: &'static str,
        status: StatusCode,
        body: ErrorBody,
    },

    /// A success status carried a body we could not parse.
    #[error("failed to deserialize {what} from {upstream} upstream: {source}")]
    Deserialize {
        upstream: &'static str,
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Status code the caller receives.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Transport(_) | Self::Deserialize { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::Upstream { .. })
    }
}

/// Result type for pipeline operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = GatewayError::Upstream {
            upstream: "customers",
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::Raw("missing".into()),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(!err.is_internal());

        let err = GatewayError::from(TransportError::Timeout { upstream: "auth" });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "auth upstream timed out");
    }
}
