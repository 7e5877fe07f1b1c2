use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::helpers::{
    create_table_query, delete_all_query, delete_entry_query, select_entry_query,
    upsert_entry_query,
};
use crate::cache::structs::cache_connector_sql::CacheConnectorSql;
use crate::cache::structs::connector_options::SqlOptions;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::{expiration_millis, is_expired};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;
use sqlx::any::AnyPoolOptions;
use sqlx::Row;
use std::time::Duration;

/// In-memory databases keep one connection open for the life of the pool.
pub(crate) fn pool_options(options: &SqlOptions) -> AnyPoolOptions {
    let pool = AnyPoolOptions::new().max_connections(options.max_connections);
    if options.in_memory {
        pool.min_connections(1).idle_timeout(None::<Duration>).max_lifetime(None::<Duration>)
    } else {
        pool
    }
}

impl CacheConnectorSql {
    #[tracing::instrument(level = "debug", skip(options))]
    pub async fn connect(driver: CacheDriver, options: &SqlOptions) -> Result<Self, CacheError> {
        sqlx::any::install_default_drivers();
        let pool = pool_options(options)
            .connect(&options.url)
            .await
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Unable to connect to {:?} database: {}", options.engine, e)))?;
        sqlx::query(&create_table_query(options.engine, &options.table))
            .execute(&pool)
            .await
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Unable to create table {}: {}", options.table, e)))?;
        info!("[SQL] Connected ({:?}), using table {}", options.engine, options.table);
        Ok(Self {
            pool,
            driver,
            engine: options.engine,
            table: options.table.clone(),
        })
    }

    async fn live_row(&self, key: &str) -> Result<Option<Option<String>>, CacheError> {
        let row = sqlx::query(&select_entry_query(self.engine, &self.table))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let expires_at: Option<i64> = row.try_get("expire")?;
        if is_expired(expires_at) {
            sqlx::query(&delete_entry_query(self.engine, &self.table))
                .bind(key)
                .execute(&self.pool)
                .await?;
            debug!("[SQL] Removed expired {}", key);
            return Ok(None);
        }
        let data: Option<String> = row.try_get("data")?;
        Ok(Some(data))
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorSql {
    fn driver(&self) -> &'static str {
        self.driver.as_str()
    }

    async fn ping(&self) -> Result<(), CacheError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        match self.live_row(key).await? {
            Some(Some(raw)) => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.live_row(key).await?.is_some())
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let data = serde_json::to_string(value)?;
        sqlx::query(&upsert_entry_query(self.engine, &self.table))
            .bind(key)
            .bind(data)
            .bind(expiration_millis(ttl))
            .execute(&self.pool)
            .await?;
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        sqlx::query(&delete_entry_query(self.engine, &self.table))
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let result = sqlx::query(&delete_all_query(self.engine, &self.table))
            .execute(&self.pool)
            .await?;
        info!("[SQL] Flushed {} rows from {}", result.rows_affected(), self.table);
        Ok(true)
    }
}
