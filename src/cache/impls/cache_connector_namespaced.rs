use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_namespaced::CacheConnectorNamespaced;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for CacheConnectorNamespaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorNamespaced")
            .field("inner", &self.inner.driver())
            .field("namespace", &self.namespace)
            .field("version", &*self.version.lock())
            .finish()
    }
}

impl CacheConnectorNamespaced {
    pub fn new(inner: Arc<dyn CacheBackend>, namespace: &str) -> Self {
        Self {
            inner,
            namespace: namespace.to_string(),
            version: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &Arc<dyn CacheBackend> {
        &self.inner
    }

    pub fn version_key(&self) -> String {
        format!("CacheNamespaceVersion[{}]", self.namespace)
    }

    pub async fn namespace_version(&self) -> Result<u64, CacheError> {
        if let Some(version) = *self.version.lock() {
            return Ok(version);
        }
        let version = self
            .inner
            .fetch(&self.version_key())
            .await?
            .and_then(|value| value.as_u64())
            .unwrap_or(1);
        *self.version.lock() = Some(version);
        Ok(version)
    }

    pub async fn namespaced_key(&self, key: &str) -> Result<String, CacheError> {
        let version = self.namespace_version().await?;
        Ok(format!("{}[{}][{}]", self.namespace, key, version))
    }

    /// Makes every key of this namespace unreachable by moving to the next version.
    pub async fn delete_all(&self) -> Result<bool, CacheError> {
        let next = self.namespace_version().await? + 1;
        let stored = self.inner.save(&self.version_key(), &Value::from(next), None).await?;
        *self.version.lock() = Some(next);
        debug!("[Namespace] {} moved to version {}", self.namespace, next);
        Ok(stored)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorNamespaced {
    fn driver(&self) -> &'static str {
        self.inner.driver()
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        self.inner.ping().await
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let key = self.namespaced_key(key).await?;
        self.inner.fetch(&key).await
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        let key = self.namespaced_key(key).await?;
        self.inner.contains(&key).await
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let key = self.namespaced_key(key).await?;
        self.inner.save(&key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let key = self.namespaced_key(key).await?;
        self.inner.delete(&key).await
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let flushed = self.inner.flush_all().await?;
        *self.version.lock() = None;
        Ok(flushed)
    }
}
