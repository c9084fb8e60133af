//! The identifier store capability.
//!
//! The document store holding the curated identifier list is an external
//! collaborator; the catalog only needs one read-only operation from it.
//! Production uses the MongoDB adapter in `showreel-api`; tests and debug
//! mode use [`MemoryIdentifierStore`].

use std::sync::RwLock;

use async_trait::async_trait;

use showreel_core::VideoId;

use crate::error::{CatalogError, Result};

/// Read-only access to the stored identifier set.
#[async_trait]
pub trait IdentifierStore: Send + Sync {
    /// Lists every stored identifier.
    ///
    /// No filtering, sorting, limiting, or deduplication: the returned order
    /// is whatever the underlying store yields and is not guaranteed stable
    /// across calls.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::StoreUnavailable`] when the store cannot be
    /// reached.
    async fn list_identifiers(&self) -> Result<Vec<VideoId>>;
}

/// In-memory identifier store for tests and debug mode.
#[derive(Debug, Default)]
pub struct MemoryIdentifierStore {
    ids: RwLock<Vec<VideoId>>,
}

impl MemoryIdentifierStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given identifiers.
    #[must_use]
    pub fn with_identifiers(ids: impl IntoIterator<Item = VideoId>) -> Self {
        Self {
            ids: RwLock::new(ids.into_iter().collect()),
        }
    }

    /// Replaces the entire identifier set (the seeding operation).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::StoreUnavailable`] if the store lock is
    /// poisoned.
    pub fn replace_all(&self, ids: impl IntoIterator<Item = VideoId>) -> Result<()> {
        let mut guard = self
            .ids
            .write()
            .map_err(|_| CatalogError::store_unavailable("identifier store lock poisoned"))?;
        *guard = ids.into_iter().collect();
        Ok(())
    }
}

#[async_trait]
impl IdentifierStore for MemoryIdentifierStore {
    async fn list_identifiers(&self) -> Result<Vec<VideoId>> {
        let guard = self
            .ids
            .read()
            .map_err(|_| CatalogError::store_unavailable("identifier store lock poisoned"))?;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_lists_in_insertion_order() {
        let store = MemoryIdentifierStore::with_identifiers([
            VideoId::from("a1"),
            VideoId::from("b2"),
            VideoId::from("a1"), // duplicates are kept
        ]);

        let ids = store.list_identifiers().await.unwrap();
        assert_eq!(
            ids,
            vec![VideoId::from("a1"), VideoId::from("b2"), VideoId::from("a1")]
        );
    }

    #[tokio::test]
    async fn replace_all_swaps_the_whole_set() {
        let store = MemoryIdentifierStore::with_identifiers([VideoId::from("old")]);
        store.replace_all([VideoId::from("new1"), VideoId::from("new2")]).unwrap();

        let ids = store.list_identifiers().await.unwrap();
        assert_eq!(ids, vec![VideoId::from("new1"), VideoId::from("new2")]);
    }
}
