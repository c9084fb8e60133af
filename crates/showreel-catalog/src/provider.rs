//! The metadata provider capability.
//!
//! The external provider resolves a batch of identifiers to rich video
//! records in a single call. Production uses the HTTP client in
//! `showreel-api`; tests implement this trait directly to simulate each
//! failure kind deterministically without network access.

use async_trait::async_trait;

use showreel_core::{VideoId, VideoRecord};

use crate::error::Result;

/// Batched lookup against the external metadata provider.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolves the given identifiers in one batched call.
    ///
    /// Returns the provider's records in provider-supplied order. The result
    /// may be shorter than the request: identifiers the provider cannot
    /// resolve are simply absent. An all-unresolved batch yields an empty
    /// vector, not an error; classification of that case belongs to the
    /// caller.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ProviderUnreachable`] when no transport-level
    ///   response was received
    /// - [`CatalogError::ProviderRejected`] when the provider returned a
    ///   structured protocol-level error
    /// - [`CatalogError::InternalRequest`] for local construction or
    ///   serialization faults
    ///
    /// [`CatalogError::ProviderUnreachable`]: crate::CatalogError::ProviderUnreachable
    /// [`CatalogError::ProviderRejected`]: crate::CatalogError::ProviderRejected
    /// [`CatalogError::InternalRequest`]: crate::CatalogError::InternalRequest
    async fn resolve(&self, ids: &[VideoId]) -> Result<Vec<VideoRecord>>;
}
