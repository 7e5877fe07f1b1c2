use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_riak::CacheConnectorRiak;
use crate::cache::structs::connector_options::RiakOptions;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::{expiration_millis, is_expired};
use async_trait::async_trait;
use log::{debug, info};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

const DRIVER: &str = "riak";
const EXPIRES_HEADER: &str = "x-riak-meta-expires";

impl CacheConnectorRiak {
    #[tracing::instrument(level = "debug", skip(options))]
    pub async fn connect(options: &RiakOptions) -> Result<Self, CacheError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CacheError::connection(DRIVER, format!("Failed to create HTTP client: {}", e)))?;
        let base_url = format!("http://{}:{}", options.host, options.port);
        let response = client
            .get(format!("{}/ping", base_url))
            .send()
            .await
            .map_err(|e| CacheError::connection(DRIVER, format!("Failed to reach Riak at {}: {}", base_url, e)))?;
        if !response.status().is_success() {
            return Err(CacheError::connection(
                DRIVER,
                format!("Riak at {} answered ping with {}", base_url, response.status()),
            ));
        }
        info!("[Riak] Connected to {} bucket {}", base_url, options.bucket);
        Ok(Self {
            client,
            base_url,
            bucket: options.bucket.clone(),
        })
    }

    fn bucket_url(&self) -> String {
        format!(
            "{}/buckets/{}",
            self.base_url,
            utf8_percent_encode(&self.bucket, NON_ALPHANUMERIC)
        )
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/keys/{}", self.bucket_url(), utf8_percent_encode(key, NON_ALPHANUMERIC))
    }

    fn expires_at(headers: &HeaderMap) -> Option<i64> {
        headers
            .get(EXPIRES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i64>().ok())
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRiak {
    fn driver(&self) -> &'static str {
        DRIVER
    }

    async fn ping(&self) -> Result<(), CacheError> {
        self.client
            .get(format!("{}/ping", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let response = self.client.get(self.key_url(key)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        if is_expired(Self::expires_at(response.headers())) {
            self.delete(key).await?;
            debug!("[Riak] Removed expired {}", key);
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        let response = self.client.head(self.key_url(key)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        let response = response.error_for_status()?;
        Ok(!is_expired(Self::expires_at(response.headers())))
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let mut request = self
            .client
            .put(self.key_url(key))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(value)?);
        if let Some(expires_at) = expiration_millis(ttl) {
            request = request.header(EXPIRES_HEADER, expires_at.to_string());
        }
        request.send().await?.error_for_status()?;
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let response = self.client.delete(self.key_url(key)).send().await?;
        if response.status() != StatusCode::NOT_FOUND {
            response.error_for_status()?;
        }
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let listing: Value = self
            .client
            .get(format!("{}/keys?keys=true", self.bucket_url()))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let keys: Vec<String> = listing
            .get("keys")
            .and_then(Value::as_array)
            .map(|keys| keys.iter().filter_map(|key| key.as_str().map(str::to_string)).collect())
            .unwrap_or_default();
        for key in &keys {
            self.delete(key).await?;
        }
        info!("[Riak] Flushed {} keys from bucket {}", keys.len(), self.bucket);
        Ok(true)
    }
}
