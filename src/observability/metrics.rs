//! Metrics collection and exposition.
//!
//! # Metrics
//! - `blog_http_requests_total` (counter): requests by route, status
//! - `blog_http_request_duration_seconds` (histogram): latency by route
//! - `blog_upstream_attempts_total` (counter): upstream attempts by outcome
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled HTTP request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    counter!(
        "blog_http_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("blog_http_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream attempt (`success` or `failure`).
pub fn record_upstream_attempt(outcome: &'static str) {
    counter!("blog_upstream_attempts_total", "outcome" => outcome).increment(1);
}
