//! The catalog aggregation service.
//!
//! One store read, one batched provider call, per request. The identifier
//! set sent to the provider is exactly the set the store read returned — a
//! read-then-call snapshot with no additions, removals, or deduplication in
//! between.

use std::sync::Arc;

use showreel_core::VideoRecord;

use crate::error::{CatalogError, Result};
use crate::provider::MetadataProvider;
use crate::store::IdentifierStore;

/// Joins the stored identifier set against the external metadata provider.
///
/// Stateless and shared-nothing: cloning is two `Arc` bumps and parallel
/// invocations of [`CatalogService::get_catalog`] are safe without locking.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn IdentifierStore>,
    provider: Arc<dyn MetadataProvider>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("store", &"<IdentifierStore>")
            .field("provider", &"<MetadataProvider>")
            .finish()
    }
}

impl CatalogService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(store: Arc<dyn IdentifierStore>, provider: Arc<dyn MetadataProvider>) -> Self {
        Self { store, provider }
    }

    /// Produces the current catalog: every stored identifier resolved to the
    /// provider's metadata record, in provider-supplied order.
    ///
    /// Makes at most one store read and at most one provider call; no
    /// retries at any step. A result shorter than the identifier set is
    /// success — records for identifiers the provider could not resolve are
    /// simply absent.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::StoreUnavailable`] when the store read fails
    /// - [`CatalogError::EmptyCatalog`] when the store holds no identifiers
    /// - [`CatalogError::ProviderUnreachable`], [`CatalogError::ProviderRejected`],
    ///   or [`CatalogError::InternalRequest`] from the provider call
    /// - [`CatalogError::ProviderEmptyResult`] when the provider resolved
    ///   none of the requested identifiers
    pub async fn get_catalog(&self) -> Result<Vec<VideoRecord>> {
        let ids = self.store.list_identifiers().await?;
        tracing::debug!(stored = ids.len(), "listed stored identifiers");

        if ids.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let records = self.provider.resolve(&ids).await?;

        if records.is_empty() {
            return Err(CatalogError::ProviderEmptyResult {
                requested: ids.len(),
            });
        }

        if records.len() < ids.len() {
            tracing::debug!(
                requested = ids.len(),
                resolved = records.len(),
                "provider resolved a subset of the requested identifiers"
            );
        }

        Ok(records)
    }
}
