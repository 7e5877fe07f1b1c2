use crate::cache::enums::database_drivers::DatabaseDrivers;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedisEndpoint {
    Tcp { host: String, port: u16, tls: bool },
    Unix { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisOptions {
    pub endpoint: RedisEndpoint,
    pub password: Option<String>,
    pub database: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcacheOptions {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub key_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    pub directory: PathBuf,
    pub extension: String,
    pub umask: u32,
    pub create_directory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoDbOptions {
    pub server: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiakOptions {
    pub host: String,
    pub port: u16,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOptions {
    pub url: String,
    pub engine: DatabaseDrivers,
    pub table: String,
    pub max_connections: u32,
    /// The database lives inside its only connection; the pool must never drop it.
    pub in_memory: bool,
}
