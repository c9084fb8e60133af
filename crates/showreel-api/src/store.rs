//! MongoDB adapter for the identifier store.
//!
//! The curated identifier list lives in the `videos` collection of the
//! database named by the connection string, one document per identifier:
//! `{ "videoId": "<token>" }`. The driver connects once at process start;
//! there is no reconnect logic here — a lost session surfaces as
//! `StoreUnavailable` on every subsequent request until the process is
//! restarted.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use showreel_catalog::{CatalogError, IdentifierStore};
use showreel_core::VideoId;

/// Collection holding the curated identifier set.
pub const VIDEOS_COLLECTION: &str = "videos";

/// One stored identifier document.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentifierDocument {
    /// The opaque provider-namespace token.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Identifier store backed by MongoDB.
#[derive(Debug, Clone)]
pub struct MongoIdentifierStore {
    collection: Collection<IdentifierDocument>,
}

impl MongoIdentifierStore {
    /// Connects to the store and verifies the session with a ping.
    ///
    /// The connection string must include the database name. This must
    /// complete successfully before the server starts serving; a failure
    /// here is fatal to the whole process (no partial-degraded mode).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::StoreUnavailable`] when the client cannot be
    /// built, the URI names no database, or the ping fails.
    pub async fn connect(uri: &str) -> Result<Self, CatalogError> {
        let client = Client::with_uri_str(uri).await.map_err(|e| {
            CatalogError::store_unavailable(format!("failed to connect to store: {e}"))
        })?;

        let database = client.default_database().ok_or_else(|| {
            CatalogError::store_unavailable(
                "connection string must include the database name",
            )
        })?;

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CatalogError::store_unavailable(format!("store ping failed: {e}")))?;

        Ok(Self {
            collection: database.collection(VIDEOS_COLLECTION),
        })
    }
}

#[async_trait]
impl IdentifierStore for MongoIdentifierStore {
    async fn list_identifiers(&self) -> Result<Vec<VideoId>, CatalogError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            CatalogError::store_unavailable(format!("failed to list identifiers: {e}"))
        })?;

        let documents: Vec<IdentifierDocument> = cursor.try_collect().await.map_err(|e| {
            CatalogError::store_unavailable(format!("failed to read identifiers: {e}"))
        })?;

        Ok(documents
            .into_iter()
            .map(|d| VideoId::new(d.video_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_document_uses_the_wire_field_name() {
        let document = IdentifierDocument {
            video_id: "dQw4w9WgXcQ".to_string(),
        };
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json, serde_json::json!({ "videoId": "dQw4w9WgXcQ" }));
    }

    #[tokio::test]
    async fn connect_rejects_a_uri_without_a_database() {
        let err = MongoIdentifierStore::connect("mongodb://localhost:27017")
            .await
            .unwrap_err();
        let CatalogError::StoreUnavailable { message } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(message.contains("database name"));
    }
}
