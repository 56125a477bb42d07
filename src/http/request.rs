//! Request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) when the caller sent none
//! - Capture the per-request context (headers and query filters) for logging
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The context is observed only; nothing in it is forwarded upstream
//! - Authorization values are logged with their credential redacted

use axum::http::{HeaderMap, HeaderValue, Request};
use serde::Deserialize;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Inbound header carrying the caller's session.
pub const SESSION_ID: &str = "session-id";

/// Inbound header naming the calling device.
pub const ORIGIN_DEVICE: &str = "origin-device";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Query filters accepted on `GET /customers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerFilters {
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "minAge")]
    pub min_age: Option<i32>,
}

/// Everything observed about one inbound customer request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub authorization: Option<String>,
    pub session_id: Option<String>,
    pub origin_device: Option<String>,
    pub filters: CustomerFilters,
}

impl RequestContext {
    pub fn new(headers: &HeaderMap, filters: CustomerFilters) -> Self {
        Self {
            request_id: header_text(headers, X_REQUEST_ID),
            authorization: header_text(headers, axum::http::header::AUTHORIZATION.as_str()),
            session_id: header_text(headers, SESSION_ID),
            origin_device: header_text(headers, ORIGIN_DEVICE),
            filters,
        }
    }

    /// Emit the received headers and filters as one structured event.
    pub fn log_received(&self) {
        tracing::info!(
            request_id = self.request_id.as_deref().unwrap_or("unknown"),
            authorization = ?self.authorization.as_deref().map(redact_authorization),
            session_id = ?self.session_id,
            origin_device = ?self.origin_device,
            name = ?self.filters.name,
            status = ?self.filters.status,
            min_age = ?self.filters.min_age,
            "Customer request received"
        );
    }
}

/// Keep the scheme of an Authorization value and hide the credential.
pub fn redact_authorization(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{scheme} ***"),
        None => "***".to_string(),
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        assert_eq!(redact_authorization("Bearer secret-token"), "Bearer ***");
        assert_eq!(redact_authorization("opaque"), "***");
    }

    #[test]
    fn test_context_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer test-token"));
        headers.insert(SESSION_ID, HeaderValue::from_static("sess-001"));
        headers.insert(ORIGIN_DEVICE, HeaderValue::from_static("mobile"));
        headers.insert(X_REQUEST_ID, HeaderValue::from_static("req-1"));

        let filters = CustomerFilters {
            name: Some("Ana".into()),
            status: None,
            min_age: Some(21),
        };
        let context = RequestContext::new(&headers, filters.clone());

        assert_eq!(context.request_id.as_deref(), Some("req-1"));
        assert_eq!(context.authorization.as_deref(), Some("Bearer test-token"));
        assert_eq!(context.session_id.as_deref(), Some("sess-001"));
        assert_eq!(context.origin_device.as_deref(), Some("mobile"));
        assert_eq!(context.filters, filters);
    }

    #[test]
    fn test_missing_headers_are_none() {
        let context = RequestContext::new(&HeaderMap::new(), CustomerFilters::default());
        assert_eq!(context, RequestContext::default());
    }

    #[test]
    fn test_uuid_request_ids_are_unique() {
        let request = Request::new(());
        let mut make = UuidRequestId;
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
        assert!(Uuid::parse_str(a.header_value().to_str().unwrap()).is_ok());
    }
}
