#![warn(missing_docs)]
//! # cascade-core
//!
//! Core types for the Cascade composite-cache dispatch crates.
//!
//! This crate carries the vocabulary shared by every store implementation
//! and by the dispatcher in the `cascade` crate:
//!
//! - [`CacheKey`] - identifies a cached entry; opaque to the dispatcher
//! - [`StoreLabel`] - symbolic name of a store, used for registry lookup
//!   and tracing output
//! - [`Lookup`] - the two-variant result of a single store operation,
//!   separating "store declined" from any real result

pub mod key;
pub mod label;
pub mod lookup;

pub use key::CacheKey;
pub use label::StoreLabel;
pub use lookup::Lookup;

/// Raw byte payload type for cached values.
/// Using `Bytes` keeps cloning cheap when a value is handed across stores.
pub type Raw = bytes::Bytes;
