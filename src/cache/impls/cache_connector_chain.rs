use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_chain::CacheConnectorChain;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for CacheConnectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drivers: Vec<&str> = self.members.iter().map(|member| member.driver()).collect();
        f.debug_struct("CacheConnectorChain")
            .field("members", &drivers)
            .finish()
    }
}

impl CacheConnectorChain {
    pub fn new(members: Vec<Arc<dyn CacheBackend>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Arc<dyn CacheBackend>] {
        &self.members
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorChain {
    fn driver(&self) -> &'static str {
        "chain"
    }

    async fn ping(&self) -> Result<(), CacheError> {
        for member in &self.members {
            member.ping().await?;
        }
        Ok(())
    }

    /// First hit wins; the value is copied back into every member before the one that had it.
    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        for (index, member) in self.members.iter().enumerate() {
            if let Some(value) = member.fetch(key).await? {
                for earlier in self.members[..index].iter().rev() {
                    earlier.save(key, &value, None).await?;
                }
                if index > 0 {
                    debug!("[Chain] {} found in member {} ({})", key, index, member.driver());
                }
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        for member in &self.members {
            if member.contains(key).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let mut stored = true;
        for member in &self.members {
            stored &= member.save(key, value, ttl).await?;
        }
        Ok(stored)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut deleted = true;
        for member in &self.members {
            deleted &= member.delete(key).await?;
        }
        Ok(deleted)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let mut flushed = true;
        for member in &self.members {
            flushed &= member.flush_all().await?;
        }
        Ok(flushed)
    }
}
