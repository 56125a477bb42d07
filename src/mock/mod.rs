//! Mock upstream used by the integration tests and the `mock-upstream` binary.
//!
//! Serves `/auth` and `/wiremock` with programmable replies and records what
//! the gateway sent.

pub mod scenarios;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use crate::config::schema::{DEFAULT_AUTH_PATH, DEFAULT_CUSTOMERS_PATH};

pub use scenarios::Scenario;

/// A canned upstream reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl MockReply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn token(access_token: &str) -> Self {
        Self::new(
            StatusCode::OK,
            serde_json::json!({ "accessToken": access_token }).to_string(),
        )
    }
}

impl IntoResponse for MockReply {
    fn into_response(self) -> Response {
        (self.status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// What the mock saw.
#[derive(Debug, Default)]
pub struct CallRecorder {
    auth_calls: AtomicUsize,
    customer_calls: AtomicUsize,
    last_authorization: Mutex<Option<String>>,
}

impl CallRecorder {
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn customer_calls(&self) -> usize {
        self.customer_calls.load(Ordering::SeqCst)
    }

    /// Authorization header of the latest customer call, if it had one.
    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
struct MockState {
    auth: MockReply,
    customers: MockReply,
    recorder: Arc<CallRecorder>,
}

/// Programmable stand-in for both upstreams.
#[derive(Clone)]
pub struct MockUpstream {
    state: MockState,
}

impl MockUpstream {
    pub fn new(auth: MockReply, customers: MockReply) -> Self {
        Self {
            state: MockState {
                auth,
                customers,
                recorder: Arc::new(CallRecorder::default()),
            },
        }
    }

    /// Mock serving one of the canned scenarios behind a working token endpoint.
    pub fn scenario(scenario: Scenario) -> Self {
        Self::new(MockReply::token(scenarios::MOCK_TOKEN), scenario.customers_reply())
    }

    pub fn recorder(&self) -> Arc<CallRecorder> {
        self.state.recorder.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(DEFAULT_AUTH_PATH, get(auth_handler))
            .route(DEFAULT_CUSTOMERS_PATH, get(customers_handler))
            .with_state(self.state.clone())
    }

    /// Serve on `listener` in a background task, returning its address.
    pub async fn spawn(self, listener: TcpListener) -> std::io::Result<SocketAddr> {
        let addr = listener.local_addr()?;
        let router = self.router();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!(error = %e, "Mock upstream stopped");
            }
        });
        Ok(addr)
    }
}

async fn auth_handler(State(state): State<MockState>) -> MockReply {
    state.recorder.auth_calls.fetch_add(1, Ordering::SeqCst);
    state.auth
}

async fn customers_handler(State(state): State<MockState>, headers: HeaderMap) -> MockReply {
    state.recorder.customer_calls.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Ok(mut last) = state.recorder.last_authorization.lock() {
        *last = authorization;
    }
    state.customers
}
