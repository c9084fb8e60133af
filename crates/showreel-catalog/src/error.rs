//! Error types for catalog aggregation.
//!
//! Every failure of the aggregation path is classified by origin so the API
//! layer can surface a distinct status per kind: "nothing to show" must be
//! distinguishable from "service degraded". All failures are terminal for
//! the current request; there is no retry, fallback, or stale data.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur during catalog aggregation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The identifier store is unreachable or its session was lost.
    #[error("identifier store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the store failure.
        message: String,
    },

    /// The store holds zero identifiers.
    ///
    /// Distinct from [`CatalogError::ProviderEmptyResult`]: an empty store
    /// is a data-population problem, not a provider/query problem.
    #[error("no identifiers on record")]
    EmptyCatalog,

    /// No transport-level response was received from the provider
    /// (network failure, timeout, DNS, connection reset).
    #[error("no response from provider: {message}")]
    ProviderUnreachable {
        /// Description of the transport failure.
        message: String,
    },

    /// The provider responded with a protocol-level error.
    #[error("provider rejected the request (status {status})")]
    ProviderRejected {
        /// HTTP status the provider returned.
        status: u16,
        /// The provider's own error payload, kept for diagnostics.
        details: serde_json::Value,
    },

    /// The provider responded successfully but resolved zero of the
    /// requested identifiers.
    ///
    /// Distinct from [`CatalogError::EmptyCatalog`]: the store believes
    /// these identifiers exist, the provider disagrees.
    #[error("provider resolved none of the {requested} requested identifiers")]
    ProviderEmptyResult {
        /// How many identifiers were sent to the provider.
        requested: usize,
    },

    /// A local fault while constructing or sending the provider request
    /// (malformed input, serialization failure).
    #[error("internal request error: {message}")]
    InternalRequest {
        /// Description of the local fault.
        message: String,
    },
}

impl CatalogError {
    /// Stable machine-readable kind, used as a metrics label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::EmptyCatalog => "empty_catalog",
            Self::ProviderUnreachable { .. } => "provider_unreachable",
            Self::ProviderRejected { .. } => "provider_rejected",
            Self::ProviderEmptyResult { .. } => "provider_empty_result",
            Self::InternalRequest { .. } => "internal_request",
        }
    }

    /// Creates a store-unavailable error with the given message.
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Creates an internal request error with the given message.
    #[must_use]
    pub fn internal_request(message: impl Into<String>) -> Self {
        Self::InternalRequest {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            CatalogError::store_unavailable("down"),
            CatalogError::EmptyCatalog,
            CatalogError::ProviderUnreachable {
                message: "timed out".to_string(),
            },
            CatalogError::ProviderRejected {
                status: 403,
                details: serde_json::json!({"error": "quota"}),
            },
            CatalogError::ProviderEmptyResult { requested: 2 },
            CatalogError::internal_request("bad batch"),
        ];

        let mut kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn empty_catalog_message_is_stable() {
        // The API layer relays this message verbatim to clients.
        assert_eq!(CatalogError::EmptyCatalog.to_string(), "no identifiers on record");
    }
}
