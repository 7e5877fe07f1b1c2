use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use crate::cache::errors::CacheError;

#[async_trait]
pub trait CacheBackend: Send + Sync {
    fn driver(&self) -> &'static str;

    fn namespace(&self) -> Option<&str> {
        None
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError>;

    async fn contains(&self, key: &str) -> Result<bool, CacheError>;

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError>;

    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    async fn flush_all(&self) -> Result<bool, CacheError>;

    async fn fetch_multiple(&self, keys: &[String]) -> Result<HashMap<String, Value>, CacheError> {
        let mut found = HashMap::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.fetch(key).await? {
                found.insert(key.clone(), value);
            }
        }
        Ok(found)
    }

    async fn save_multiple(
        &self,
        items: &[(String, Value)],
        ttl: Option<u64>,
    ) -> Result<bool, CacheError> {
        let mut success = true;
        for (key, value) in items {
            success &= self.save(key, value, ttl).await?;
        }
        Ok(success)
    }

    async fn delete_multiple(&self, keys: &[String]) -> Result<bool, CacheError> {
        let mut success = true;
        for key in keys {
            success &= self.delete(key).await?;
        }
        Ok(success)
    }
}
