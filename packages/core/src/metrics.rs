//! Prometheus metrics registry for the livestock health tracker.
//!
//! [`AppMetrics`] owns all registered metrics and the [`Registry`] they
//! belong to. Construct it once at startup, wrap in `Arc`, and hand it to
//! the router state.
//!
//! Exposed at `GET /metrics` in Prometheus text exposition format
//! (`text/plain; version=0.0.4`).

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{
    CounterVec, GaugeVec, Histogram, HistogramOpts, Opts, Registry,
};

/// All application-level Prometheus metrics.
pub struct AppMetrics {
    /// HTTP request count, labelled by method, route template, and status code.
    pub http_requests_total: CounterVec,
    /// HTTP request latency histogram in seconds.
    pub http_request_duration: Histogram,
    /// Records currently held per store, labelled by entity.
    pub records_stored: GaugeVec,
    /// Writes refused by a validator or a missing id, labelled by entity and reason.
    pub writes_rejected_total: CounterVec,
    /// The registry that owns all of the above metrics.
    pub registry: Registry,
}

impl AppMetrics {
    /// Create and register all metrics. Returns an error if any metric
    /// name is invalid or duplicated.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new(
                "livestock_tracker_http_requests_total",
                "HTTP requests by method, path, and status",
            ),
            &["method", "path", "status"],
        )?;

        let http_request_duration = Histogram::with_opts(
            HistogramOpts::new(
                "livestock_tracker_http_request_duration_seconds",
                "HTTP request latency in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        )?;

        let records_stored = GaugeVec::new(
            Opts::new(
                "livestock_tracker_records_stored",
                "Records currently held in each store",
            ),
            &["entity"],
        )?;

        let writes_rejected_total = CounterVec::new(
            Opts::new(
                "livestock_tracker_writes_rejected_total",
                "Rejected store writes by entity and reason",
            ),
            &["entity", "reason"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration.clone()))?;
        registry.register(Box::new(records_stored.clone()))?;
        registry.register(Box::new(writes_rejected_total.clone()))?;

        Ok(Self {
            http_requests_total,
            http_request_duration,
            records_stored,
            writes_rejected_total,
            registry,
        })
    }

    /// Record the current size of one store.
    pub fn set_records(&self, entity: &str, count: usize) {
        self.records_stored
            .with_label_values(&[entity])
            .set(count as f64);
    }

    pub fn reject_write(&self, entity: &str, reason: &str) {
        self.writes_rejected_total
            .with_label_values(&[entity, reason])
            .inc();
    }

    /// Render all metrics as Prometheus text format (for the `/metrics` endpoint).
    pub fn render(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&metric_families, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap_or_default())
    }
}

/// Middleware counting requests and timing them.
///
/// The `path` label is the matched route template (`/api/movements/:id`),
/// not the raw URI, so label cardinality stays bounded.
pub async fn track_http(
    State(metrics): State<Arc<AppMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let started = Instant::now();
    let response = next.run(request).await;

    metrics
        .http_request_duration
        .observe(started.elapsed().as_secs_f64());
    metrics
        .http_requests_total
        .with_label_values(&[method.as_str(), path.as_str(), response.status().as_str()])
        .inc();

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_metrics_register_without_error() {
        let metrics = AppMetrics::new();
        assert!(metrics.is_ok(), "AppMetrics::new() failed: {:?}", metrics.err());
    }

    #[test]
    fn set_records_updates_gauge() {
        let metrics = AppMetrics::new().unwrap();
        metrics.set_records("movements", 5);
        let val = metrics.records_stored.with_label_values(&["movements"]).get();
        assert!((val - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reject_write_increments_labelled_counter() {
        let metrics = AppMetrics::new().unwrap();
        metrics.reject_write("vaccinations", "invalid_input");
        metrics.reject_write("vaccinations", "invalid_input");
        let val = metrics
            .writes_rejected_total
            .with_label_values(&["vaccinations", "invalid_input"])
            .get();
        assert!((val - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn render_contains_metric_names_after_use() {
        let metrics = AppMetrics::new().unwrap();
        metrics.set_records("outbreaks", 4);
        metrics.reject_write("movements", "conflict");
        metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/movements", "200"])
            .inc();
        metrics.http_request_duration.observe(0.002);

        let output = metrics.render().unwrap();
        assert!(output.contains("livestock_tracker_records_stored"));
        assert!(output.contains("livestock_tracker_writes_rejected_total"));
        assert!(output.contains("livestock_tracker_http_requests_total"));
        assert!(output.contains("livestock_tracker_http_request_duration_seconds"));
    }
}
