//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): inbound requests by status
//! - `gateway_request_duration_seconds` (histogram): inbound latency
//! - `gateway_upstream_calls_total` (counter): outbound calls by upstream, outcome
//! - `gateway_upstream_duration_seconds` (histogram): outbound latency by upstream

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("gateway_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("gateway_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one outbound call; `outcome` is the status code or `transport_error`.
pub fn record_upstream_call(upstream: &'static str, outcome: &str, start: Instant) {
    metrics::counter!(
        "gateway_upstream_calls_total",
        "upstream" => upstream,
        "outcome" => outcome.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_upstream_duration_seconds", "upstream" => upstream)
        .record(start.elapsed().as_secs_f64());
}
