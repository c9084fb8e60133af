//! Video catalog routes.
//!
//! ## Routes
//!
//! - `GET /videos` - The aggregated catalog: every stored identifier
//!   resolved to the provider's metadata record, in provider order.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::Instrument;

use showreel_core::VideoRecord;
use showreel_core::observability::catalog_span;

use crate::context::RequestContext;
use crate::error::{ApiError, ApiResult};
use crate::server::AppState;

/// Creates video routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/videos", get(list_videos))
}

/// The aggregated video catalog.
///
/// GET /videos
///
/// 200 with a JSON array of provider records on success; each failure kind
/// maps to its own status so clients can tell "nothing to show" from
/// "service degraded".
pub(crate) async fn list_videos(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<VideoRecord>>> {
    let span = catalog_span("list_videos", &ctx.request_id);

    let result = state.catalog().get_catalog().instrument(span).await;

    match result {
        Ok(records) => {
            crate::metrics::record_catalog_size(records.len());
            tracing::info!(
                request_id = %ctx.request_id,
                records = records.len(),
                "catalog aggregated"
            );
            Ok(Json(records))
        }
        Err(err) => {
            crate::metrics::record_catalog_failure(err.kind());
            tracing::warn!(
                request_id = %ctx.request_id,
                kind = err.kind(),
                error = %err,
                "catalog aggregation failed"
            );
            Err(ApiError::from(err))
        }
    }
}
