//! # showreel-api
//!
//! HTTP composition layer for the Showreel video catalog service.
//!
//! This crate provides the API surface for Showreel, handling:
//!
//! - **Routing**: the catalog, health, readiness, and metrics endpoints
//! - **Adapters**: the MongoDB identifier store and the provider HTTP client
//! - **Configuration**: environment-driven server settings
//! - **Observability**: request metrics, tracing, request-id correlation
//!
//! ## Design Principles
//!
//! This crate is a **thin composition layer** with no domain policy.
//! The aggregation algorithm and failure taxonomy live in `showreel-catalog`.
//!
//! ## Endpoints
//!
//! ```text
//! GET /videos  - Aggregated catalog (stored identifiers joined against the provider)
//! GET /health  - Health check
//! GET /ready   - Readiness check (store connectivity)
//! GET /metrics - Prometheus metrics
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod server;
pub mod store;
pub mod youtube;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::context::RequestContext;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
