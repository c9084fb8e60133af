//! Observability infrastructure for Showreel.
//!
//! Structured logging with consistent spans: this module provides the
//! one-time logging initialization and the span constructor used by the
//! catalog request path.

use std::sync::Once;

use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON structured logs (for production).
    Json,
    /// Pretty-printed logs (for development).
    #[default]
    Pretty,
}

/// Initializes the logging subsystem.
///
/// Call once at application startup. Safe to call multiple times;
/// subsequent calls are no-ops.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Controls log levels (e.g., `info`, `showreel_catalog=debug`)
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty())
                    .init();
            }
        }
    });
}

/// Creates a span for catalog operations with standard fields.
///
/// # Example
///
/// ```rust
/// use showreel_core::observability::catalog_span;
///
/// let span = catalog_span("get_catalog", "01J8ZQ6W9K");
/// let _guard = span.enter();
/// // ... do catalog operation
/// ```
#[must_use]
pub fn catalog_span(operation: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "catalog",
        op = operation,
        request_id = request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_succeeds() {
        // Should not panic (uses Once internally)
        init_logging(LogFormat::Pretty);
        init_logging(LogFormat::Pretty); // Second call should be no-op
    }

    #[test]
    fn test_span_helper_creates_span() {
        let span = catalog_span("test_operation", "req-1");
        let _guard = span.enter();
        tracing::info!("test message in span");
    }
}
