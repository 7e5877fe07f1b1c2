use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_void::CacheConnectorVoid;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
impl CacheBackend for CacheConnectorVoid {
    fn driver(&self) -> &'static str {
        "void"
    }

    async fn fetch(&self, _key: &str) -> Result<Option<Value>, CacheError> {
        Ok(None)
    }

    async fn contains(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(false)
    }

    async fn save(&self, _key: &str, _value: &Value, _ttl: Option<u64>) -> Result<bool, CacheError> {
        Ok(true)
    }

    async fn delete(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        Ok(true)
    }
}
