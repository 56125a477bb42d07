//! Upstream reply translation.
//!
//! Success statuses must carry the expected payload; anything else is our
//! fault and becomes an internal error. Error statuses keep their code and
//! carry the upstream body, structured when it parses as an `ErrorResponse`
//! and verbatim otherwise.

use serde::de::DeserializeOwned;

use crate::customers::error::{ErrorBody, GatewayError, GatewayResult};
use crate::customers::types::ErrorResponse;
use crate::upstream::UpstreamReply;

/// Translate a reply into the expected payload `T` or a gateway error.
pub fn translate<T: DeserializeOwned>(
    upstream: &'static str,
    what: &'static str,
    reply: UpstreamReply,
) -> GatewayResult<T> {
    if reply.is_error() {
        let body = match serde_json::from_slice::<ErrorResponse>(&reply.body) {
            Ok(error) => ErrorBody::Structured(error),
            Err(e) => {
                tracing::warn!(
                    upstream,
                    status = %reply.status,
                    error = %e,
                    "Upstream error body is not an ErrorResponse, passing it through"
                );
                ErrorBody::Raw(reply.body)
            }
        };
        return Err(GatewayError::Upstream {
            upstream,
            status: reply.status,
            body,
        });
    }

    serde_json::from_slice(&reply.body).map_err(|source| GatewayError::Deserialize {
        upstream,
        what,
        source,
    })
}
