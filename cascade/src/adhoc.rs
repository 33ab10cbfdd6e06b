//! Ordered fan-out across a list of cache stores.
//!
//! [`AdhocStore`] is the composite dispatcher: it owns nothing but an
//! ordered list of store handles and forwards every operation across
//! that list. Two fan-out shapes cover all operations:
//!
//! - **first-success**: walk the list in order, return the first
//!   non-declined result, never touch the remaining stores
//! - **apply-to-all**: invoke every store unconditionally, report
//!   success only when every store succeeded
//!
//! Store precedence is strictly construction order. A store that
//! declines is skipped for that call; there is no reordering, retry or
//! backoff at this layer, and a store `Err` aborts the iteration and
//! propagates as-is.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cascade_core::{CacheKey, Lookup, Raw, StoreLabel};

use crate::{Store, StoreRegistry, StoreResult, UnknownStoreError};

/// Composite store dispatching over an ordered list of stores.
///
/// `AdhocStore` implements [`Store`] itself, so a dispatcher can be
/// registered in a [`StoreRegistry`] and stacked inside another
/// dispatcher.
///
/// # Example
/// ```ignore
/// let registry = StoreRegistry::new();
/// registry.register("memory", Arc::new(memory_store));
/// registry.register("file", Arc::new(file_store));
///
/// // Reads prefer "memory"; writes land in the first store that takes them.
/// let cache = AdhocStore::new(&registry, ["memory", "file"])?;
/// ```
///
/// # Consistency
///
/// The apply-to-all operations (`write_all`, `delete`, `delete_all`)
/// touch each store sequentially and independently. If a store errors
/// mid-sequence, earlier stores stay updated and later ones are never
/// reached; nothing is rolled back. Concurrent `fetch_with` calls for
/// the same absent key may each run their compute closure.
pub struct AdhocStore {
    stores: Vec<Arc<dyn Store>>,
}

impl AdhocStore {
    /// Builds a dispatcher by resolving `names` through `registry`, in
    /// the given order. The order is significant: it is the precedence
    /// order for every subsequent dispatch.
    ///
    /// Fails with [`UnknownStoreError`] on the first name with no
    /// registered store.
    pub fn new<I, N>(registry: &StoreRegistry, names: I) -> Result<Self, UnknownStoreError>
    where
        I: IntoIterator<Item = N>,
        N: Into<StoreLabel>,
    {
        let mut stores = Vec::new();
        for name in names {
            stores.push(registry.lookup(name)?);
        }
        Ok(Self { stores })
    }

    /// Builds a dispatcher directly from store handles, bypassing the
    /// registry.
    pub fn from_stores(stores: Vec<Arc<dyn Store>>) -> Self {
        Self { stores }
    }

    /// The store list, in precedence order.
    pub fn stores(&self) -> &[Arc<dyn Store>] {
        &self.stores
    }

    /// Replaces the store list. Mainly for tests; the list is otherwise
    /// fixed at construction.
    pub fn set_stores(&mut self, stores: Vec<Arc<dyn Store>>) {
        self.stores = stores;
    }

    /// Fetches `key`, falling back to `compute` on a total miss.
    ///
    /// Same path as [`fetch`](Store::fetch): the dispatcher's own
    /// `read` runs first, then each store's `fetch` in order. Only when
    /// all of that declines is `compute` evaluated, and its value is
    /// returned **without** being written back to any store.
    pub async fn fetch_with<F, Fut>(&self, key: &CacheKey, compute: F) -> StoreResult<Raw>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Raw> + Send,
    {
        match self.fetch(key).await? {
            Lookup::Found(value) => Ok(value),
            Lookup::Miss => Ok(compute().await),
        }
    }
}

impl std::fmt::Debug for AdhocStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<StoreLabel> = self.stores.iter().map(|s| s.label()).collect();
        f.debug_struct("AdhocStore").field("stores", &labels).finish()
    }
}

#[async_trait]
impl Store for AdhocStore {
    /// First-success: true as soon as any store reports writable.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn writable(&self, key: &CacheKey) -> StoreResult<Lookup<()>> {
        for store in &self.stores {
            if store.writable(key).await?.is_found() {
                tracing::trace!(store = %store.label(), "writable");
                return Ok(Lookup::Found(()));
            }
        }
        Ok(Lookup::Miss)
    }

    /// First-success over the stores' `read`.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn read(&self, key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        for store in &self.stores {
            if let Lookup::Found(value) = store.read(key).await? {
                tracing::trace!(store = %store.label(), "read hit");
                return Ok(Lookup::Found(value));
            }
        }
        tracing::trace!("read miss on every store");
        Ok(Lookup::Miss)
    }

    /// First-success: the write lands in the first store that accepts
    /// it; later stores are never asked.
    #[tracing::instrument(level = "trace", skip(self, value))]
    async fn write(
        &self,
        key: &CacheKey,
        value: Raw,
        ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        for store in &self.stores {
            if store.write(key, value.clone(), ttl).await?.is_found() {
                tracing::trace!(store = %store.label(), "write accepted");
                return Ok(Lookup::Found(()));
            }
        }
        tracing::trace!("write declined by every store");
        Ok(Lookup::Miss)
    }

    /// Apply-to-all: every store gets the write even after one has
    /// declined; `Found(())` only when every store accepted.
    #[tracing::instrument(level = "trace", skip(self, value))]
    async fn write_all(
        &self,
        key: &CacheKey,
        value: Raw,
        ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        let mut accepted = true;
        for store in &self.stores {
            if store.write_all(key, value.clone(), ttl).await?.is_miss() {
                tracing::trace!(store = %store.label(), "write_all declined");
                accepted = false;
            }
        }
        Ok(if accepted { Lookup::Found(()) } else { Lookup::Miss })
    }

    /// The dispatcher's own `read` runs first as a virtual zeroth
    /// store; only on a miss does each store's `fetch` get its turn.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn fetch(&self, key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        if let Lookup::Found(value) = self.read(key).await? {
            return Ok(Lookup::Found(value));
        }
        for store in &self.stores {
            if let Lookup::Found(value) = store.fetch(key).await? {
                tracing::trace!(store = %store.label(), "fetch hit");
                return Ok(Lookup::Found(value));
            }
        }
        Ok(Lookup::Miss)
    }

    /// First-success: true as soon as any store holds the key.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn exists(&self, key: &CacheKey) -> StoreResult<Lookup<()>> {
        for store in &self.stores {
            if store.exists(key).await?.is_found() {
                tracing::trace!(store = %store.label(), "exists");
                return Ok(Lookup::Found(()));
            }
        }
        Ok(Lookup::Miss)
    }

    /// Apply-to-all: every store is asked to delete; `Found(())` only
    /// when every store deleted.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn delete(&self, key: &CacheKey) -> StoreResult<Lookup<()>> {
        let mut deleted = true;
        for store in &self.stores {
            if store.delete(key).await?.is_miss() {
                tracing::trace!(store = %store.label(), "delete declined");
                deleted = false;
            }
        }
        Ok(if deleted { Lookup::Found(()) } else { Lookup::Miss })
    }

    /// Apply-to-all: every store is flushed; `Found(())` only when
    /// every store flushed.
    #[tracing::instrument(level = "trace", skip(self))]
    async fn delete_all(&self) -> StoreResult<Lookup<()>> {
        let mut flushed = true;
        for store in &self.stores {
            if store.delete_all().await?.is_miss() {
                tracing::trace!(store = %store.label(), "delete_all declined");
                flushed = false;
            }
        }
        Ok(if flushed { Lookup::Found(()) } else { Lookup::Miss })
    }

    fn label(&self) -> StoreLabel {
        StoreLabel::new_static("adhoc")
    }
}
