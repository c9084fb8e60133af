//! HTTP route handlers.

pub mod videos;

use std::sync::Arc;

use axum::Router;

use crate::server::AppState;

/// Catalog routes.
pub fn catalog_routes() -> Router<Arc<AppState>> {
    videos::routes()
}
