//! Composite cache store dispatch.
//!
//! This crate composes any number of cache stores behind one handle,
//! [`AdhocStore`], which tries its stores in a fixed order. Read-path
//! operations stop at the first store that answers; write/delete-path
//! "all" operations touch every store unconditionally and succeed only
//! when every store did.
//!
//! If you want to implement your own store, you are in the right place:
//! implement the [`Store`] trait, register the store under a name in a
//! [`StoreRegistry`], and build dispatchers from lists of names.

mod adhoc;
mod registry;
mod store;

pub use adhoc::AdhocStore;
pub use cascade_core::{CacheKey, Lookup, Raw, StoreLabel};
pub use registry::StoreRegistry;
pub use store::{Store, StoreResult};

use thiserror::Error;

/// Proxy error describing general groups of errors raised by a store.
///
/// A store *declining* an operation is not an error and is reported as
/// [`Lookup::Miss`]; `StoreError` is the channel for real failures, and
/// the dispatcher propagates it to the caller without catching it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Internal store error, state or computation error.
    ///
    /// Any error not bound to network interaction.
    #[error(transparent)]
    InternalError(Box<dyn std::error::Error + Send>),
    /// Network interaction error.
    #[error(transparent)]
    ConnectionError(Box<dyn std::error::Error + Send>),
}

/// A store name that no store is registered under.
///
/// Raised by [`StoreRegistry::lookup`] and therefore fatal to
/// [`AdhocStore`] construction: a dispatcher never comes up with a hole
/// in its store list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no store registered under name `{name}`")]
pub struct UnknownStoreError {
    /// The name that failed to resolve.
    pub name: StoreLabel,
}
