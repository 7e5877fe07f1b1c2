use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_mongodb::CacheConnectorMongoDb;
use crate::cache::structs::connector_options::MongoDbOptions;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::{expiration_millis, is_expired};
use async_trait::async_trait;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::Client;
use serde_json::Value;

const DRIVER: &str = "mongodb";
const DATA_FIELD: &str = "d";
const EXPIRATION_FIELD: &str = "e";

impl CacheConnectorMongoDb {
    #[tracing::instrument(level = "debug", skip(options))]
    pub async fn connect(options: &MongoDbOptions) -> Result<Self, CacheError> {
        let client = Client::with_uri_str(&options.server)
            .await
            .map_err(|e| CacheError::connection(DRIVER, format!("Failed to create MongoDB client: {}", e)))?;
        let database = client.database(&options.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CacheError::connection(DRIVER, format!("Failed to reach MongoDB at {}: {}", options.server, e)))?;
        let collection = database.collection::<Document>(&options.collection);
        info!("[MongoDB] Connected to {}.{}", options.database, options.collection);
        Ok(Self {
            database,
            collection,
        })
    }

    async fn live_document(&self, key: &str) -> Result<Option<Document>, CacheError> {
        let Some(document) = self.collection.find_one(doc! { "_id": key }).await? else {
            return Ok(None);
        };
        let expires_at = document.get_i64(EXPIRATION_FIELD).ok();
        if is_expired(expires_at) {
            self.collection.delete_one(doc! { "_id": key }).await?;
            debug!("[MongoDB] Removed expired {}", key);
            return Ok(None);
        }
        Ok(Some(document))
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMongoDb {
    fn driver(&self) -> &'static str {
        DRIVER
    }

    async fn ping(&self) -> Result<(), CacheError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        match self.live_document(key).await? {
            Some(document) => match document.get_str(DATA_FIELD) {
                Ok(raw) => Ok(Some(serde_json::from_str(raw)?)),
                Err(_) => Ok(None),
            },
            None => Ok(None),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.live_document(key).await?.is_some())
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let data = serde_json::to_string(value)?;
        let expires_at = expiration_millis(ttl);
        let document = doc! {
            "_id": key,
            "d": data,
            "e": expires_at,
        };
        self.collection
            .replace_one(doc! { "_id": key }, document)
            .upsert(true)
            .await?;
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.collection.delete_one(doc! { "_id": key }).await?;
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let result = self.collection.delete_many(doc! {}).await?;
        info!("[MongoDB] Flushed {} documents", result.deleted_count);
        Ok(true)
    }
}
