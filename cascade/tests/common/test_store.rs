//! Store implementations for integration tests: a scripted store with
//! per-operation responses and call counting, a store that always
//! errors, and a simple DashMap-backed memory store.

use std::time::Duration;

use async_trait::async_trait;
use cascade::{CacheKey, Lookup, Raw, Store, StoreError, StoreLabel, StoreResult};
use dashmap::DashMap;

/// Store answering each operation with a pre-scripted response and
/// counting how often every operation was invoked.
pub struct ScriptedStore {
    label: StoreLabel,
    on_writable: Lookup<()>,
    on_read: Lookup<Raw>,
    on_write: Lookup<()>,
    on_write_all: Lookup<()>,
    on_fetch: Lookup<Raw>,
    on_exists: Lookup<()>,
    on_delete: Lookup<()>,
    on_delete_all: Lookup<()>,
    calls: DashMap<&'static str, usize>,
}

impl ScriptedStore {
    /// A store that accepts every operation, answering reads and
    /// fetches with `payload`.
    pub fn accepting(label: &str, payload: &'static str) -> Self {
        Self {
            label: StoreLabel::new(label),
            on_writable: Lookup::Found(()),
            on_read: Lookup::Found(Raw::from(payload)),
            on_write: Lookup::Found(()),
            on_write_all: Lookup::Found(()),
            on_fetch: Lookup::Found(Raw::from(payload)),
            on_exists: Lookup::Found(()),
            on_delete: Lookup::Found(()),
            on_delete_all: Lookup::Found(()),
            calls: DashMap::new(),
        }
    }

    /// A store that declines every operation.
    pub fn declining(label: &str) -> Self {
        Self {
            label: StoreLabel::new(label),
            on_writable: Lookup::Miss,
            on_read: Lookup::Miss,
            on_write: Lookup::Miss,
            on_write_all: Lookup::Miss,
            on_fetch: Lookup::Miss,
            on_exists: Lookup::Miss,
            on_delete: Lookup::Miss,
            on_delete_all: Lookup::Miss,
            calls: DashMap::new(),
        }
    }

    /// Overrides the scripted `fetch` response.
    pub fn with_fetch(mut self, response: Lookup<Raw>) -> Self {
        self.on_fetch = response;
        self
    }

    /// Number of times `op` was invoked on this store.
    pub fn calls(&self, op: &'static str) -> usize {
        self.calls.get(op).map(|c| *c).unwrap_or(0)
    }

    fn record(&self, op: &'static str) {
        *self.calls.entry(op).or_insert(0) += 1;
    }
}

#[async_trait]
impl Store for ScriptedStore {
    async fn writable(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        self.record("writable");
        Ok(self.on_writable)
    }

    async fn read(&self, _key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        self.record("read");
        Ok(self.on_read.clone())
    }

    async fn write(
        &self,
        _key: &CacheKey,
        _value: Raw,
        _ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        self.record("write");
        Ok(self.on_write)
    }

    async fn write_all(
        &self,
        _key: &CacheKey,
        _value: Raw,
        _ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        self.record("write_all");
        Ok(self.on_write_all)
    }

    async fn fetch(&self, _key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        self.record("fetch");
        Ok(self.on_fetch.clone())
    }

    async fn exists(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        self.record("exists");
        Ok(self.on_exists)
    }

    async fn delete(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        self.record("delete");
        Ok(self.on_delete)
    }

    async fn delete_all(&self) -> StoreResult<Lookup<()>> {
        self.record("delete_all");
        Ok(self.on_delete_all)
    }

    fn label(&self) -> StoreLabel {
        self.label.clone()
    }
}

/// Store that fails every operation (for error propagation tests).
#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::InternalError(Box::new(std::io::Error::other("simulated error")))
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn writable(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    async fn read(&self, _key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        Err(Self::error())
    }

    async fn write(
        &self,
        _key: &CacheKey,
        _value: Raw,
        _ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    async fn write_all(
        &self,
        _key: &CacheKey,
        _value: Raw,
        _ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    async fn exists(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    async fn delete(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    async fn delete_all(&self) -> StoreResult<Lookup<()>> {
        Err(Self::error())
    }

    fn label(&self) -> StoreLabel {
        StoreLabel::new_static("failing")
    }
}

/// Simple in-memory store backed by DashMap.
///
/// Thread-safe and cheap to share behind an `Arc`. TTL is ignored.
pub struct MemoryStore {
    label: StoreLabel,
    data: DashMap<CacheKey, Raw>,
}

impl MemoryStore {
    /// Creates an empty memory store with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: StoreLabel::new(label),
            data: DashMap::new(),
        }
    }

    /// Whether the store currently holds `key`.
    pub fn has(&self, key: &CacheKey) -> bool {
        self.data.contains_key(key)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn writable(&self, _key: &CacheKey) -> StoreResult<Lookup<()>> {
        Ok(Lookup::Found(()))
    }

    async fn read(&self, key: &CacheKey) -> StoreResult<Lookup<Raw>> {
        Ok(self.data.get(key).map(|v| v.clone()).into())
    }

    async fn write(
        &self,
        key: &CacheKey,
        value: Raw,
        _ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        self.data.insert(key.clone(), value);
        Ok(Lookup::Found(()))
    }

    async fn write_all(
        &self,
        key: &CacheKey,
        value: Raw,
        ttl: Option<Duration>,
    ) -> StoreResult<Lookup<()>> {
        self.write(key, value, ttl).await
    }

    async fn exists(&self, key: &CacheKey) -> StoreResult<Lookup<()>> {
        Ok(if self.data.contains_key(key) {
            Lookup::Found(())
        } else {
            Lookup::Miss
        })
    }

    async fn delete(&self, key: &CacheKey) -> StoreResult<Lookup<()>> {
        Ok(if self.data.remove(key).is_some() {
            Lookup::Found(())
        } else {
            Lookup::Miss
        })
    }

    async fn delete_all(&self) -> StoreResult<Lookup<()>> {
        self.data.clear();
        Ok(Lookup::Found(()))
    }

    fn label(&self) -> StoreLabel {
        self.label.clone()
    }
}
