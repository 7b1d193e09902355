//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, path, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//!
//! The Prometheus recorder is installed once at startup; the resulting
//! handle renders the exposition text for `GET /metrics`.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Request counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Request latency metric name.
pub const METRIC_HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Install the global Prometheus recorder and register metric descriptions.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total HTTP requests by method, path and status"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "HTTP request latency in seconds"
    );

    Ok(handle)
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!(METRIC_HTTP_REQUESTS, &labels).increment(1);
    histogram!(METRIC_HTTP_REQUEST_DURATION, &labels).record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_requests_are_rendered() {
        // The recorder is process-global, so this is the only test in the
        // unit suite that installs it.
        let handle = install_recorder().unwrap();

        record_request("GET", "/hello", 200, Instant::now());

        let rendered = handle.render();
        assert!(rendered.contains(METRIC_HTTP_REQUESTS));
        assert!(rendered.contains("method=\"GET\""));
        assert!(rendered.contains("status=\"200\""));
    }
}
