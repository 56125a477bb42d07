//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Build the customer pipeline from configuration
//! - Bind server to listener and stop on shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AuthStep, GatewayConfig};
use crate::customers::CustomerPipeline;
use crate::http::handlers::{get_customers, get_health};
use crate::http::request::UuidRequestId;
use crate::upstream::{AuthClient, ClientError, CustomerClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<CustomerPipeline>,
}

/// HTTP server for the customer gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a server whose pipeline talks to the configured upstreams.
    pub fn new(config: GatewayConfig) -> Result<Self, ClientError> {
        let pipeline = build_pipeline(&config)?;
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Create a server around an already built pipeline.
    pub fn with_pipeline(config: GatewayConfig, pipeline: CustomerPipeline) -> Self {
        let state = AppState {
            pipeline: Arc::new(pipeline),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/customers", get(get_customers))
            .route("/health", get(get_health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The router, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self, listener: TcpListener, mut shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            auth_step = ?self.config.pipeline.auth,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the pipeline shape selected by `[pipeline] auth`.
pub fn build_pipeline(config: &GatewayConfig) -> Result<CustomerPipeline, ClientError> {
    let customers = Arc::new(CustomerClient::new(&config.upstreams.customers)?);
    tracing::info!(url = %customers.url(), "Customer upstream configured");

    match config.pipeline.auth {
        AuthStep::Required => {
            let auth = Arc::new(AuthClient::new(&config.upstreams.auth)?);
            tracing::info!(url = %auth.url(), "Auth upstream configured");
            Ok(CustomerPipeline::with_auth(auth, customers))
        }
        AuthStep::Disabled => Ok(CustomerPipeline::without_auth(customers)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::upstream::{CustomerUpstream, TransportError, UpstreamReply};

    struct Down;

    #[async_trait]
    impl CustomerUpstream for Down {
        async fn fetch_customers(&self, _bearer_token: Option<&str>) -> Result<UpstreamReply, TransportError> {
            Err(TransportError::Timeout { upstream: "customers" })
        }
    }

    #[tokio::test]
    async fn test_router_renders_internal_error() {
        let server = GatewayServer::with_pipeline(
            GatewayConfig::default(),
            CustomerPipeline::without_auth(Arc::new(Down)),
        );

        let response = server
            .router()
            .oneshot(Request::get("/customers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key(crate::http::X_REQUEST_ID));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"code": "500", "description": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = GatewayServer::with_pipeline(
            GatewayConfig::default(),
            CustomerPipeline::without_auth(Arc::new(Down)),
        );

        let response = server
            .router()
            .oneshot(Request::get("/wiremock").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_pipeline_shape_follows_config() {
        let mut config = GatewayConfig::default();
        assert_eq!(build_pipeline(&config).unwrap().auth_step(), AuthStep::Required);

        config.pipeline.auth = AuthStep::Disabled;
        assert_eq!(build_pipeline(&config).unwrap().auth_step(), AuthStep::Disabled);
    }

    #[test]
    fn test_invalid_upstream_url_fails_construction() {
        let mut config = GatewayConfig::default();
        config.upstreams.customers.base_url = "::nope::".to_string();
        assert!(GatewayServer::new(config).is_err());
    }
}
