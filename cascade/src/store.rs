use std::time::Duration;

use async_trait::async_trait;
use cascade_core::{CacheKey, Lookup, Raw, StoreLabel};

use crate::StoreError;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The interface every cache store exposes to the dispatcher.
///
/// A store answers each operation with [`Lookup::Found`] when it can
/// satisfy it and [`Lookup::Miss`] when it declines. Declining is
/// routine: a read for an absent key, a write to a read-only store, a
/// delete of a missing entry all come back as `Miss`. Errors are for
/// real failures only and short-circuit the dispatcher's iteration.
///
/// Keys and values pass through opaquely; no serialization happens at
/// this layer. The `ttl` argument on the write path is likewise opaque
/// to the dispatcher and interpreted by each store on its own terms.
#[async_trait]
pub trait Store: Send + Sync {
    /// Can this store accept a write for `key` right now?
    async fn writable(&self, key: &CacheKey) -> StoreResult<Lookup<()>>;

    /// Reads the value cached under `key`.
    async fn read(&self, key: &CacheKey) -> StoreResult<Lookup<Raw>>;

    /// Writes `value` under `key`. `Found(())` means the store accepted
    /// the write, `Miss` means it declined it.
    async fn write(
        &self,
        key: &CacheKey,
        value: Raw,
        ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>>;

    /// Writes `value` under `key` to every replica this store manages.
    /// Single stores treat this the same as [`write`](Store::write).
    async fn write_all(
        &self,
        key: &CacheKey,
        value: Raw,
        ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>>;

    /// Reads `key`, giving the store a chance to do more than a plain
    /// read (refresh a TTL, revalidate). Defaults to `read`.
    async fn fetch(&self, key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        self.read(key).await
    }

    /// Does this store hold an entry for `key`?
    async fn exists(&self, key: &CacheKey) -> StoreResult<Lookup<()>>;

    /// Deletes the entry under `key`. `Miss` when there was nothing to
    /// delete or the store declined.
    async fn delete(&self, key: &CacheKey) -> StoreResult<Lookup<()>>;

    /// Deletes every entry this store holds.
    async fn delete_all(&self) -> StoreResult<Lookup<()>>;

    /// Returns the label identifying this store in tracing output.
    fn label(&self) -> StoreLabel {
        StoreLabel::new_static("store")
    }
}
