use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::connector_options::MemcacheOptions;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use parking_lot::Mutex;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Lifetimes above this are read by memcached as absolute unix timestamps.
const MAX_RELATIVE_TTL: u64 = 2_592_000;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("driver", &self.driver)
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

impl MemcacheOptions {
    pub fn connection_url(&self) -> String {
        let auth = match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), password) if !username.is_empty() => format!(
                "{}:{}@",
                utf8_percent_encode(username, NON_ALPHANUMERIC),
                utf8_percent_encode(password.unwrap_or_default(), NON_ALPHANUMERIC)
            ),
            _ => String::new(),
        };
        format!("memcache://{}{}:{}", auth, self.host, self.port)
    }
}

impl CacheConnectorMemcache {
    #[tracing::instrument(level = "debug", skip(options))]
    pub fn connect(driver: CacheDriver, options: &MemcacheOptions) -> Result<Self, CacheError> {
        let client = memcache::connect(options.connection_url())
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Failed to connect to Memcache at {}:{}: {}", options.host, options.port, e)))?;
        info!("[Memcache] Connected to {}:{} ({})", options.host, options.port, driver);
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            driver,
            key_prefix: options.key_prefix.clone(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn expiration(ttl: Option<u64>) -> u32 {
        let ttl = ttl.unwrap_or(0);
        let expiration = if ttl > MAX_RELATIVE_TTL {
            (Utc::now().timestamp().max(0) as u64).saturating_add(ttl)
        } else {
            ttl
        };
        u32::try_from(expiration).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    fn driver(&self) -> &'static str {
        self.driver.as_str()
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version()
            .map_err(CacheError::Memcache)?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let client = self.client.lock();
        match client.get::<String>(&self.prefixed(key)) {
            Ok(Some(raw)) => Ok(Some(serde_json::from_str(&raw)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(CacheError::Memcache(e)),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        let client = self.client.lock();
        let raw = client.get::<String>(&self.prefixed(key))
            .map_err(CacheError::Memcache)?;
        Ok(raw.is_some())
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let data = serde_json::to_string(value)?;
        let client = self.client.lock();
        client.set(&self.prefixed(key), data.as_str(), Self::expiration(ttl))
            .map_err(CacheError::Memcache)?;
        debug!("[Memcache] Set {}", key);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let client = self.client.lock();
        client.delete(&self.prefixed(key))
            .map_err(CacheError::Memcache)?;
        debug!("[Memcache] Deleted {}", key);
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let client = self.client.lock();
        client.flush()
            .map_err(CacheError::Memcache)?;
        info!("[Memcache] Flushed all entries");
        Ok(true)
    }
}
