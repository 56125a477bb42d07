//! Route handlers.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::request::{CustomerFilters, RequestContext};
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /customers`
pub async fn get_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filters): Query<CustomerFilters>,
) -> Response {
    let start = Instant::now();
    let context = RequestContext::new(&headers, filters);
    context.log_received();

    let response = match state.pipeline.fetch_customers().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => e.into_response(),
    };

    tracing::info!(
        request_id = context.request_id.as_deref().unwrap_or("unknown"),
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Customer request completed"
    );
    metrics::record_request(response.status().as_u16(), start);
    response
}
