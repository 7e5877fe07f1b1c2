use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache driver <{0}> not supported")]
    UnsupportedDriver(String),

    #[error("Invalid configuration for driver <{driver}>: {message}")]
    InvalidConfiguration {
        driver: String,
        fields: Vec<String>,
        message: String,
    },

    #[error("Unknown cache profile: {0}")]
    UnknownProfile(String),

    #[error("Connection error [{driver}]: {message}")]
    BackendConnection {
        driver: String,
        message: String,
    },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    Memcache(#[from] memcache::MemcacheError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CacheError {
    /// Missing or empty required fields, reported all at once.
    pub fn missing_fields(driver: &str, fields: &[&str]) -> Self {
        let quoted: Vec<String> = fields.iter().map(|field| format!("\"{}\"", field)).collect();
        CacheError::InvalidConfiguration {
            driver: driver.to_string(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
            message: format!("you must specify {}", quoted.join(", ")),
        }
    }

    pub fn invalid_field(driver: &str, field: &str, message: impl Into<String>) -> Self {
        CacheError::InvalidConfiguration {
            driver: driver.to_string(),
            fields: vec![field.to_string()],
            message: message.into(),
        }
    }

    pub fn connection(driver: &str, error: impl std::fmt::Display) -> Self {
        CacheError::BackendConnection {
            driver: driver.to_string(),
            message: error.to_string(),
        }
    }
}
