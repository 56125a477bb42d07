//! Response rendering.
//!
//! # Responsibilities
//! - Render pipeline errors as HTTP responses
//! - Keep upstream status codes untouched
//!
//! # Design Decisions
//! - Structured upstream errors are re-serialized as JSON
//! - Unparseable upstream errors are passed through verbatim as `application/json`
//! - Internal failures hide their cause behind a fixed 500 body

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::customers::{ErrorBody, ErrorResponse, GatewayError};

/// Body sent with every internal error.
pub fn internal_error_body() -> ErrorResponse {
    ErrorResponse::new("500", "Internal server error")
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Upstream {
                status,
                body: ErrorBody::Structured(error),
                ..
            } => (status, Json(error)).into_response(),
            GatewayError::Upstream {
                status,
                body: ErrorBody::Raw(bytes),
                ..
            } => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
            GatewayError::Transport(_) | GatewayError::Deserialize { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(internal_error_body())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::TransportError;
    use axum::body::Bytes;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_structured_error_response() {
        let response = GatewayError::Upstream {
            upstream: "customers",
            status: StatusCode::UNAUTHORIZED,
            body: ErrorBody::Structured(ErrorResponse::new("401", "expired")),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, serde_json::json!({"code": "401", "description": "expired"}));
    }

    #[tokio::test]
    async fn test_raw_error_response_is_verbatim() {
        let response = GatewayError::Upstream {
            upstream: "customers",
            status: StatusCode::IM_A_TEAPOT,
            body: ErrorBody::Raw("short and stout".into()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, "short and stout");
    }

    #[tokio::test]
    async fn test_raw_error_response_keeps_invalid_utf8() {
        let raw = Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]);
        let response = GatewayError::Upstream {
            upstream: "customers",
            status: StatusCode::BAD_GATEWAY,
            body: ErrorBody::Raw(raw.clone()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes, raw);
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let response = GatewayError::from(TransportError::Timeout { upstream: "auth" }).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, internal_error_body());
    }
}
