//! HTTP client for the external metadata provider (YouTube Data API v3).

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use showreel_catalog::{CatalogError, MetadataProvider};
use showreel_core::{VideoId, VideoRecord};

/// The provider accepts at most this many identifiers per call.
///
/// Larger batches are rejected locally before any network I/O rather than
/// chunked into several calls; the one-call-per-request contract and its
/// failure classification would not survive a half-failed merge.
pub const MAX_BATCH_IDS: usize = 50;

/// Metadata parts requested for every video.
const VIDEOS_PART: &str = "snippet,contentDetails";

/// HTTP client for the batched video lookup endpoint.
#[derive(Clone)]
pub struct YouTubeClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Wire shape of the provider's list response.
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoRecord>,
}

impl YouTubeClient {
    /// Creates a new client targeting the given base URL.
    ///
    /// The underlying HTTP client is deliberately built without an explicit
    /// timeout: the transport default applies (known gap, stated in the
    /// service docs rather than fixed).
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MetadataProvider for YouTubeClient {
    async fn resolve(&self, ids: &[VideoId]) -> Result<Vec<VideoRecord>, CatalogError> {
        if ids.len() > MAX_BATCH_IDS {
            return Err(CatalogError::internal_request(format!(
                "batch of {} identifiers exceeds the provider limit of {MAX_BATCH_IDS} per call",
                ids.len()
            )));
        }

        let joined = ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(self.videos_url())
            .query(&[
                ("part", VIDEOS_PART),
                ("id", joined.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    CatalogError::internal_request(format!("failed to build provider request: {e}"))
                } else {
                    CatalogError::ProviderUnreachable {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(provider_rejected(status, response).await);
        }

        let body: VideoListResponse = response.json().await.map_err(|e| {
            CatalogError::internal_request(format!("invalid provider response body: {e}"))
        })?;

        Ok(body.items)
    }
}

/// Builds a [`CatalogError::ProviderRejected`] carrying the provider's own
/// error payload (raw text when the body is not JSON).
async fn provider_rejected(status: StatusCode, response: reqwest::Response) -> CatalogError {
    let details = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<Value>(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).to_string())),
        Err(e) => Value::String(format!("error body unavailable: {e}")),
    };

    CatalogError::ProviderRejected {
        status: status.as_u16(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::RawQuery;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use serde_json::json;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{addr}")
    }

    async fn spawn_status_server(status: AxumStatus, body: Value) -> String {
        let app = Router::new().route(
            "/videos",
            get(move || {
                let body = body.clone();
                async move { (status, axum::Json(body)) }
            }),
        );
        spawn_server(app).await
    }

    fn ids(tokens: &[&str]) -> Vec<VideoId> {
        tokens.iter().map(|t| VideoId::from(*t)).collect()
    }

    #[tokio::test]
    async fn resolves_a_batch_and_sends_one_comma_joined_query() {
        let captured: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let captured_in_handler = Arc::clone(&captured);

        let app = Router::new().route(
            "/videos",
            get(move |RawQuery(query): RawQuery| {
                let captured = Arc::clone(&captured_in_handler);
                async move {
                    *captured.lock().unwrap() = query;
                    axum::Json(json!({
                        "items": [
                            { "id": "a1", "snippet": { "title": "first" } },
                            { "id": "a2", "snippet": { "title": "second" } }
                        ]
                    }))
                }
            }),
        );
        let base_url = spawn_server(app).await;

        let client = YouTubeClient::new(base_url, "test-key");
        let records = client.resolve(&ids(&["a1", "a2"])).await.unwrap();

        let resolved: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(resolved, vec!["a1", "a2"]);

        let query = captured.lock().unwrap().clone().expect("query captured");
        assert!(query.contains("part=snippet%2CcontentDetails"));
        assert!(query.contains("id=a1%2Ca2"));
        assert!(query.contains("key=test-key"));
    }

    #[tokio::test]
    async fn non_success_status_is_provider_rejected_with_payload() {
        let payload = json!({"error": {"code": 403, "message": "quotaExceeded"}});
        let base_url = spawn_status_server(AxumStatus::FORBIDDEN, payload.clone()).await;

        let client = YouTubeClient::new(base_url, "test-key");
        let err = client.resolve(&ids(&["a1"])).await.unwrap_err();

        let CatalogError::ProviderRejected { status, details } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(status, 403);
        assert_eq!(details, payload);
    }

    #[tokio::test]
    async fn empty_and_missing_items_resolve_to_an_empty_batch() {
        for body in [json!({ "items": [] }), json!({})] {
            let base_url = spawn_status_server(AxumStatus::OK, body).await;
            let client = YouTubeClient::new(base_url, "test-key");
            let records = client.resolve(&ids(&["gone"])).await.unwrap();
            assert!(records.is_empty());
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_an_internal_request_error() {
        let app = Router::new().route("/videos", get(|| async { "not json" }));
        let base_url = spawn_server(app).await;

        let client = YouTubeClient::new(base_url, "test-key");
        let err = client.resolve(&ids(&["a1"])).await.unwrap_err();
        assert!(matches!(err, CatalogError::InternalRequest { .. }));
    }

    #[tokio::test]
    async fn connection_failure_is_provider_unreachable() {
        // Bind to get a free port, then drop the listener so nothing answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = YouTubeClient::new(format!("http://{addr}"), "test-key");
        let err = client.resolve(&ids(&["a1"])).await.unwrap_err();
        assert!(matches!(err, CatalogError::ProviderUnreachable { .. }));
    }

    #[tokio::test]
    async fn oversized_batch_is_rejected_before_any_network_call() {
        // Deliberately unroutable base URL: the ceiling check must fire first.
        let client = YouTubeClient::new("http://127.0.0.1:1", "test-key");
        let too_many: Vec<VideoId> = (0..=MAX_BATCH_IDS)
            .map(|i| VideoId::from(format!("video-{i}")))
            .collect();

        let err = client.resolve(&too_many).await.unwrap_err();
        assert!(matches!(err, CatalogError::InternalRequest { .. }));
    }
}
