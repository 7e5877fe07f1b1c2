use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::connector_options::{RedisEndpoint, RedisOptions};
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::{debug, info};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use redis::AsyncCommands;
use serde_json::Value;
use std::fmt;

impl fmt::Debug for CacheConnectorRedis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorRedis")
            .field("connection", &"<redis::aio::MultiplexedConnection>")
            .field("driver", &self.driver)
            .field("address", &self.address)
            .finish()
    }
}

impl RedisOptions {
    pub fn connection_url(&self) -> String {
        let password = self
            .password
            .as_deref()
            .map(|password| utf8_percent_encode(password, NON_ALPHANUMERIC).to_string());
        match &self.endpoint {
            RedisEndpoint::Tcp { host, port, tls } => {
                let scheme = if *tls { "rediss" } else { "redis" };
                let auth = password.map(|p| format!(":{}@", p)).unwrap_or_default();
                format!("{}://{}{}:{}/{}", scheme, auth, host, port, self.database)
            }
            RedisEndpoint::Unix { path } => {
                let mut url = format!("redis+unix://{}?db={}", path, self.database);
                if let Some(password) = password {
                    url.push_str(&format!("&pass={}", password));
                }
                url
            }
        }
    }

    pub fn address(&self) -> String {
        match &self.endpoint {
            RedisEndpoint::Tcp { host, port, .. } => format!("{}:{}", host, port),
            RedisEndpoint::Unix { path } => path.clone(),
        }
    }
}

impl CacheConnectorRedis {
    #[tracing::instrument(level = "debug", skip(options))]
    pub async fn connect(driver: CacheDriver, options: &RedisOptions) -> Result<Self, CacheError> {
        let address = options.address();
        let client = redis::Client::open(options.connection_url())
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Failed to connect to Redis at {}: {}", address, e)))?;
        info!("[Redis] Connected to {} ({})", address, driver);
        Ok(Self {
            connection,
            driver,
            address,
        })
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    fn driver(&self) -> &'static str {
        self.driver.as_str()
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::Redis)?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let mut conn = self.connection.clone();
        let raw: Option<String> = conn.get(key).await.map_err(CacheError::Redis)?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await.map_err(CacheError::Redis)?;
        Ok(exists)
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let data = serde_json::to_string(value)?;
        match ttl {
            Some(ttl_secs) if ttl_secs > 0 => {
                conn.set_ex::<_, _, ()>(key, data, ttl_secs)
                    .await
                    .map_err(CacheError::Redis)?;
            }
            _ => {
                conn.set::<_, _, ()>(key, data)
                    .await
                    .map_err(CacheError::Redis)?;
            }
        }
        debug!("[Redis] Set {} on {}", key, self.address);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        conn.del::<_, i64>(key)
            .await
            .map_err(CacheError::Redis)?;
        debug!("[Redis] Deleted {} on {}", key, self.address);
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::Redis)?;
        info!("[Redis] Flushed database on {}", self.address);
        Ok(true)
    }
}
