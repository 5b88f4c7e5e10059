//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (request counts, latency)
//! - Expose a Prometheus-compatible scrape endpoint
//!
//! # Metrics
//! - `search_proxy_requests_total` (counter): requests by method, status
//! - `search_proxy_request_duration_seconds` (histogram): latency
//!   distribution by method, status
//!
//! # Design Decisions
//! - The exporter runs on its own listener, away from client traffic
//! - Label cardinality stays small: method and status code only
//! - Recording without an installed exporter is a no-op, so handlers
//!   never need to know whether metrics are enabled

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "search_proxy_requests_total",
        "Total requests served, by method and status code"
    );
    describe_histogram!(
        "search_proxy_request_duration_seconds",
        "Request latency in seconds, by method and status code"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();

    counter!(
        "search_proxy_requests_total",
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "search_proxy_request_duration_seconds",
        "method" => method,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
