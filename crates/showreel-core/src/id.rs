//! The opaque video identifier type.
//!
//! A [`VideoId`] names a video in the external metadata provider's
//! namespace. The token is opaque by contract: Showreel never parses,
//! validates, or normalizes it, and duplicates are passed through to the
//! provider unchanged. The newtype exists so identifiers cannot be mixed up
//! with other strings at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque identifier for a video in the provider's namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a raw provider token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the raw token.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for VideoId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
