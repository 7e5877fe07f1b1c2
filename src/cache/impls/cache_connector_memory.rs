use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::{expiration_millis, is_expired};
use ahash::AHashMap;
use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::sync::Arc;

static SHARED_STORES: Lazy<Mutex<AHashMap<CacheDriver, CacheConnectorMemory>>> =
    Lazy::new(|| Mutex::new(AHashMap::new()));

impl CacheConnectorMemory {
    pub fn new(driver: CacheDriver) -> Self {
        Self {
            driver,
            entries: Arc::new(RwLock::new(AHashMap::new())),
        }
    }

    /// Process-wide store for `driver`; every call returns a handle to the same entries.
    pub fn shared(driver: CacheDriver) -> Self {
        let mut stores = SHARED_STORES.lock();
        stores
            .entry(driver)
            .or_insert_with(|| {
                debug!("[Memory] Creating shared store for {}", driver);
                CacheConnectorMemory::new(driver)
            })
            .clone()
    }

    /// Shared store for the shared-memory drivers, a private one otherwise.
    pub fn for_driver(driver: CacheDriver) -> Self {
        if driver.is_shared_memory() {
            Self::shared(driver)
        } else {
            Self::new(driver)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn live_value(&self, key: &str) -> Option<Value> {
        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !is_expired(entry.expires_at) => return Some(entry.value.clone()),
                Some(_) => true,
            }
        };
        if expired {
            self.entries.write().remove(key);
        }
        None
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    fn driver(&self) -> &'static str {
        self.driver.as_str()
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(self.live_value(key))
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.live_value(key).is_some())
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let entry = CacheEntry {
            value: value.clone(),
            expires_at: expiration_millis(ttl),
        };
        self.entries.write().insert(key.to_string(), entry);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.entries.write().remove(key);
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        self.entries.write().clear();
        debug!("[Memory] Flushed {} store", self.driver);
        Ok(true)
    }
}
