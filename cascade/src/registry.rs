use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use cascade_core::StoreLabel;

use crate::{Store, UnknownStoreError};

/// Name table resolving symbolic store names to store handles.
///
/// The registry is an explicit object handed to [`AdhocStore::new`]
/// rather than process-global state, so two parts of an application can
/// hold disjoint registries without stepping on each other. Backed by
/// [`DashMap`], it is cheap to share behind an `Arc` and safe to call
/// from concurrent tasks.
///
/// [`AdhocStore::new`]: crate::AdhocStore::new
#[derive(Default)]
pub struct StoreRegistry {
    stores: DashMap<StoreLabel, Arc<dyn Store>>,
    lookup_log: Mutex<Vec<StoreLabel>>,
}

impl StoreRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `store` under `name`, replacing any previous store
    /// registered under the same name.
    pub fn register(&self, name: impl Into<StoreLabel>, store: Arc<dyn Store>) {
        self.stores.insert(name.into(), store);
    }

    /// Resolves `name` to the store registered under it.
    pub fn lookup(&self, name: impl Into<StoreLabel>) -> Result<Arc<dyn Store>, UnknownStoreError> {
        let name = name.into();
        if let Ok(mut log) = self.lookup_log.lock() {
            log.push(name.clone());
        }
        self.stores
            .get(&name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(UnknownStoreError { name })
    }

    /// Every name this registry has been asked to resolve, in call
    /// order, unresolvable names included. Mainly for tests asserting
    /// how a dispatcher walked the registry during construction.
    pub fn lookup_log(&self) -> Vec<StoreLabel> {
        self.lookup_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Returns `true` if a store is registered under `name`.
    pub fn contains(&self, name: impl Into<StoreLabel>) -> bool {
        self.stores.contains_key(&name.into())
    }

    /// Number of registered stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns `true` if no store has been registered.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<StoreLabel> = self.stores.iter().map(|e| e.key().clone()).collect();
        f.debug_struct("StoreRegistry").field("names", &names).finish()
    }
}
