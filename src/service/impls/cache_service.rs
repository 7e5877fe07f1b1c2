use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::configuration::Configuration;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::registry::structs::cache_registry::CacheRegistry;
use crate::service::structs::cache_service::CacheService;
use serde_json::Value;
use std::sync::Arc;

impl CacheService {
    pub fn new(registry: Arc<CacheRegistry>) -> Self {
        Self { registry }
    }

    /// Built-in drivers over the `[cache]` section of `config`.
    pub fn from_config(config: &Configuration) -> Self {
        let registry = CacheRegistry::new(Arc::new(CacheFactory::new()), config.cache.clone());
        Self::new(Arc::new(registry))
    }

    pub fn registry(&self) -> &Arc<CacheRegistry> {
        &self.registry
    }

    /// Backend of the named profile.
    pub async fn select(&self, name: &str) -> Result<Arc<dyn CacheBackend>, CacheError> {
        self.registry.get(name).await
    }

    /// Profile names with the default one flagged, in configuration order.
    pub fn profiles(&self) -> Result<Vec<(String, bool)>, CacheError> {
        let default = self.registry.default_name()?;
        Ok(self
            .registry
            .profile_names()?
            .into_iter()
            .map(|name| {
                let is_default = name == default;
                (name, is_default)
            })
            .collect())
    }

    pub async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        self.registry.get_default().await?.fetch(key).await
    }

    pub async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        self.registry.get_default().await?.contains(key).await
    }

    pub async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        self.registry.get_default().await?.save(key, value, ttl).await
    }

    pub async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.registry.get_default().await?.delete(key).await
    }

    pub async fn flush_all(&self) -> Result<bool, CacheError> {
        self.registry.get_default().await?.flush_all().await
    }
}
