//! # showreel-core
//!
//! Core abstractions for the Showreel video catalog service.
//!
//! This crate provides the foundational types shared by all Showreel
//! components:
//!
//! - **Identifiers**: the opaque [`VideoId`] token naming a video in the
//!   metadata provider's namespace
//! - **Records**: the pass-through [`VideoRecord`] model for provider
//!   metadata
//! - **Error Types**: shared error definitions and result types
//! - **Observability**: logging initialization and span helpers
//!
//! ## Crate Boundary
//!
//! `showreel-core` defines shared primitives only. Domain policy lives in
//! `showreel-catalog`; HTTP composition lives in `showreel-api`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod observability;
pub mod record;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::id::VideoId;
    pub use crate::record::{Thumbnail, VideoRecord, VideoSnippet};
}

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use id::VideoId;
pub use observability::{LogFormat, init_logging};
pub use record::{Thumbnail, VideoRecord, VideoSnippet};
