//! Prometheus metrics for request latency and task operations.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::{debug, trace};

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Tasks created counter metric name.
pub const METRIC_TASKS_CREATED: &str = "tasks_created_total";
/// Validation failures counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";
/// Storage failures counter metric name.
pub const METRIC_STORAGE_FAILURES: &str = "storage_failures_total";

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_TASKS_CREATED, "Total number of tasks created");
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of requests rejected by input validation"
    );
    describe_counter!(
        METRIC_STORAGE_FAILURES,
        "Total number of requests failed by the task store"
    );

    debug!("Metrics initialized");
}

/// Increment tasks created counter.
pub fn inc_tasks_created() {
    counter!(METRIC_TASKS_CREATED).increment(1);
}

/// Increment validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}

/// Increment storage failures counter.
pub fn inc_storage_failures() {
    counter!(METRIC_STORAGE_FAILURES).increment(1);
}

/// RAII guard for timing a request.
/// Records latency for its endpoint when dropped.
pub struct RequestTimer {
    start: Instant,
    endpoint: &'static str,
}

impl RequestTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let latency_ms = self.elapsed_ms();
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => self.endpoint).record(latency_ms);
        trace!(endpoint = self.endpoint, latency_ms, "Request handled");
    }
}
