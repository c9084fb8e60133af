//! Metrics middleware and instrumentation for the Showreel API.
//!
//! Provides Prometheus metrics for:
//! - Request duration and throughput
//! - Catalog aggregation failures by kind
//! - Catalog result sizes

use std::sync::OnceLock;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// API request duration histogram.
pub const API_REQUEST_DURATION: &str = "api_request_duration_seconds";

/// API request counter.
pub const API_REQUEST_TOTAL: &str = "api_request_total";

/// Catalog aggregation failure counter, labeled by failure kind.
pub const CATALOG_FAILURE_TOTAL: &str = "catalog_failure_total";

/// Histogram of how many records a successful aggregation returned.
pub const CATALOG_VIDEOS_RETURNED: &str = "catalog_videos_returned";

const UNMATCHED_ENDPOINT: &str = "unmatched";

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initializes the global metrics recorder with Prometheus exporter.
///
/// Safe to call multiple times; subsequent calls are no-ops.
///
/// Returns a handle for rendering metrics. The handle is also stored globally
/// for use by the `/metrics` endpoint.
///
/// # Panics
///
/// Panics if the Prometheus recorder cannot be installed. This is intentional
/// as metrics are critical infrastructure and the server should not start
/// without them.
#[allow(clippy::panic)]
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let builder = PrometheusBuilder::new();
            let handle = builder
                .install_recorder()
                .unwrap_or_else(|e| panic!("failed to install prometheus recorder: {e}"));

            describe_histogram!(API_REQUEST_DURATION, "Duration of API requests in seconds");
            describe_counter!(API_REQUEST_TOTAL, "Total number of API requests");
            describe_counter!(
                CATALOG_FAILURE_TOTAL,
                "Total number of catalog aggregation failures by kind"
            );
            describe_histogram!(
                CATALOG_VIDEOS_RETURNED,
                "Number of video records returned per successful aggregation"
            );

            tracing::info!("Prometheus metrics recorder initialized");
            handle
        })
        .clone()
}

/// Returns the global Prometheus handle, if initialized.
#[must_use]
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

pub(crate) fn endpoint_label<B>(request: &Request<B>) -> String {
    request.extensions().get::<MatchedPath>().map_or_else(
        || UNMATCHED_ENDPOINT.to_string(),
        |path| path.as_str().to_string(),
    )
}

/// Middleware that records request metrics.
///
/// Captures:
/// - `api_request_duration_seconds{endpoint, method, status_class}` - histogram of request durations
/// - `api_request_total{endpoint, method, status_class}` - counter of total requests
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let path = endpoint_label(&request);
    let method = request.method().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    let status_class = status_class(response.status());

    let labels = [
        ("endpoint", path.clone()),
        ("method", method.clone()),
        ("status_class", status_class.to_string()),
    ];

    histogram!(API_REQUEST_DURATION, &labels).record(duration);
    counter!(API_REQUEST_TOTAL, &labels).increment(1);

    // Log slow requests (> 1s)
    if duration > 1.0 {
        tracing::warn!(
            endpoint = %path,
            method = %method,
            status = %status,
            duration_secs = %duration,
            "Slow request detected"
        );
    }

    response
}

/// Returns the status class (2xx, 3xx, 4xx, 5xx) for a status code.
fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

/// Handler for the `/metrics` endpoint.
///
/// Returns Prometheus-formatted metrics text.
pub async fn serve_metrics() -> impl IntoResponse {
    prometheus_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain; charset=utf-8")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            let metrics = handle.render();
            (
                StatusCode::OK,
                [("content-type", "text/plain; charset=utf-8")],
                metrics,
            )
        },
    )
}

/// Records a catalog aggregation failure.
pub fn record_catalog_failure(kind: &'static str) {
    counter!(CATALOG_FAILURE_TOTAL, "kind" => kind).increment(1);
}

/// Records the size of a successful catalog response.
#[allow(clippy::cast_precision_loss)]
pub fn record_catalog_size(records: usize) {
    histogram!(CATALOG_VIDEOS_RETURNED).record(records as f64);
}
