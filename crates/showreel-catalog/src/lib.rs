//! # showreel-catalog
//!
//! The catalog aggregation domain for Showreel.
//!
//! One operation lives here: join the stored set of opaque video
//! identifiers against the external metadata provider and relay the
//! provider's records, classifying every failure by origin. The two
//! collaborators are expressed as capability traits so adapters (MongoDB,
//! the provider HTTP client, test doubles) can be substituted freely:
//!
//! - [`IdentifierStore`] — "list all stored identifiers"
//! - [`MetadataProvider`] — "given a batch of identifiers, return metadata
//!   for those that exist"
//!
//! [`CatalogService::get_catalog`] is the whole request path: one store
//! read, one batched provider call, no retries, no caching.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod provider;
pub mod service;
pub mod store;

pub use error::{CatalogError, Result};
pub use provider::MetadataProvider;
pub use service::CatalogService;
pub use store::{IdentifierStore, MemoryIdentifierStore};
