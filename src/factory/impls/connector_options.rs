use crate::cache::enums::database_drivers::DatabaseDrivers;
use crate::cache::errors::CacheError;
use crate::cache::structs::connector_options::{
    FileOptions, MemcacheOptions, MongoDbOptions, RedisEndpoint, RedisOptions, RiakOptions,
    SqlOptions,
};
use crate::factory::structs::driver_parameters::DriverParameters;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use std::path::PathBuf;

pub const DEFAULT_FILE_EXTENSION: &str = ".doctrinecache.data";
pub const DEFAULT_PHPFILE_EXTENSION: &str = ".doctrinecache.php";
pub const DEFAULT_UMASK: u32 = 0o002;
pub const DEFAULT_COUCHBASE_BUCKET: &str = "default";

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("table name pattern is valid")
});

fn validate_table(params: &DriverParameters<'_>) -> Result<String, CacheError> {
    let table = params.require_string("table")?;
    if !TABLE_NAME.is_match(&table) {
        return Err(CacheError::invalid_field(
            params.driver(),
            "table",
            format!("\"table\" must match {}", TABLE_NAME.as_str()),
        ));
    }
    Ok(table)
}

impl RedisOptions {
    pub fn from_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["host", "port"])?;
        Ok(Self {
            endpoint: RedisEndpoint::Tcp {
                host: params.require_string("host")?,
                port: params.require_port("port")?,
                tls: false,
            },
            password: params.optional_string("password")?.filter(|p| !p.is_empty()),
            database: params.integer("database")?.unwrap_or(0),
        })
    }

    /// `scheme` plus either `host` and `port`, or a unix socket `path`.
    pub fn from_predis_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        let scheme = params.require_string("scheme")?.to_ascii_lowercase();
        let has_tcp = params.is_present("host") && params.is_present("port");
        let has_path = params.is_present("path");
        if !has_tcp && !has_path {
            return Err(CacheError::InvalidConfiguration {
                driver: params.driver().to_string(),
                fields: vec!["host".to_string(), "port".to_string(), "path".to_string()],
                message: "you must specify \"host\" and \"port\" or \"path\"".to_string(),
            });
        }
        let endpoint = match scheme.as_str() {
            "unix" if has_path => RedisEndpoint::Unix {
                path: params.require_string("path")?,
            },
            "tcp" | "redis" | "tls" | "rediss" if has_tcp => RedisEndpoint::Tcp {
                host: params.require_string("host")?,
                port: params.require_port("port")?,
                tls: matches!(scheme.as_str(), "tls" | "rediss"),
            },
            "unix" | "tcp" | "redis" | "tls" | "rediss" => {
                let fields: &[&str] = if scheme == "unix" { &["path"] } else { &["host", "port"] };
                return Err(CacheError::missing_fields(params.driver(), fields));
            }
            _ => {
                return Err(CacheError::invalid_field(
                    params.driver(),
                    "scheme",
                    format!("unsupported scheme \"{}\" (expected tcp, tls or unix)", scheme),
                ));
            }
        };
        Ok(Self {
            endpoint,
            password: params.optional_string("password")?.filter(|p| !p.is_empty()),
            database: params.integer("database")?.unwrap_or(0),
        })
    }
}

impl MemcacheOptions {
    pub fn from_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["host", "port"])?;
        Ok(Self {
            host: params.require_string("host")?,
            port: params.require_port("port")?,
            username: None,
            password: None,
            key_prefix: String::new(),
        })
    }

    /// Couchbase buckets are addressed through the memcached protocol; the bucket becomes a key prefix.
    pub fn from_couchbase_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["host", "port"])?;
        let bucket = params
            .string("bucket")?
            .unwrap_or_else(|| DEFAULT_COUCHBASE_BUCKET.to_string());
        Ok(Self {
            host: params.require_string("host")?,
            port: params.require_port("port")?,
            username: params.optional_string("username")?.filter(|u| !u.is_empty()),
            password: params.optional_string("password")?,
            key_prefix: format!("{}:", bucket),
        })
    }
}

impl FileOptions {
    /// `filesystem` / `file`: `cache_dir` (or `directory`), which must already exist.
    pub fn from_filesystem_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        let directory = match params.string("cache_dir")? {
            Some(directory) => directory,
            None => params
                .string("directory")?
                .ok_or_else(|| CacheError::missing_fields(params.driver(), &["cache_dir"]))?,
        };
        let directory = PathBuf::from(directory);
        if !directory.is_dir() {
            return Err(CacheError::invalid_field(
                params.driver(),
                "cache_dir",
                format!("\"cache_dir\" {} is not an existing directory", directory.display()),
            ));
        }
        Ok(Self {
            directory,
            extension: params
                .string("extension")?
                .unwrap_or_else(|| DEFAULT_FILE_EXTENSION.to_string()),
            umask: params.umask("umask")?.unwrap_or(DEFAULT_UMASK),
            create_directory: false,
        })
    }

    /// `phpfile`: `directory`, created on demand.
    pub fn from_phpfile_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        Ok(Self {
            directory: PathBuf::from(params.require_string("directory")?),
            extension: params
                .string("extension")?
                .unwrap_or_else(|| DEFAULT_PHPFILE_EXTENSION.to_string()),
            umask: params.umask("umask")?.unwrap_or(DEFAULT_UMASK),
            create_directory: true,
        })
    }
}

impl MongoDbOptions {
    pub fn from_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["server", "name", "collection"])?;
        Ok(Self {
            server: params.require_string("server")?,
            database: params.require_string("name")?,
            collection: params.require_string("collection")?,
        })
    }
}

impl RiakOptions {
    pub fn from_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["host", "port", "bucket"])?;
        Ok(Self {
            host: params.require_string("host")?,
            port: params.require_port("port")?,
            bucket: params.require_string("bucket")?,
        })
    }
}

impl SqlOptions {
    pub fn from_sqlite_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["filename", "table"])?;
        let filename = params.require_string("filename")?;
        let table = validate_table(params)?;
        let (url, max_connections) = if filename == ":memory:" {
            ("sqlite::memory:".to_string(), 1)
        } else {
            (format!("sqlite://{}?mode=rwc", filename), 5)
        };
        Ok(Self {
            url,
            engine: DatabaseDrivers::sqlite3,
            table,
            max_connections,
            in_memory: filename == ":memory:",
        })
    }

    /// `dns` is a connection URL (`sqlite:`, `mysql://`, `postgres://`); `username` and
    /// `password` are injected into it when it carries no credentials of its own.
    pub fn from_pdo_parameters(params: &DriverParameters<'_>) -> Result<Self, CacheError> {
        params.require(&["dns", "table"])?;
        let dsn = params.require_string("dns")?;
        let engine = DatabaseDrivers::from_url(&dsn).ok_or_else(|| {
            CacheError::invalid_field(
                params.driver(),
                "dns",
                "\"dns\" must start with sqlite:, mysql:, mariadb:, postgres: or postgresql:",
            )
        })?;
        let table = validate_table(params)?;
        let username = params.optional_string("username")?.filter(|u| !u.is_empty());
        let password = params.optional_string("password")?.unwrap_or_default();
        let in_memory = engine == DatabaseDrivers::sqlite3 && is_sqlite_memory_url(&dsn);
        let url = match username {
            Some(username) => with_credentials(&dsn, &username, &password),
            None => dsn,
        };
        Ok(Self {
            url,
            engine,
            table,
            max_connections: if engine == DatabaseDrivers::sqlite3 { 1 } else { 5 },
            in_memory,
        })
    }
}

fn is_sqlite_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn with_credentials(dsn: &str, username: &str, password: &str) -> String {
    let Some((scheme, rest)) = dsn.split_once("://") else {
        return dsn.to_string();
    };
    let authority = rest.split('/').next().unwrap_or_default();
    if authority.contains('@') {
        return dsn.to_string();
    }
    let mut credentials = utf8_percent_encode(username, NON_ALPHANUMERIC).to_string();
    if !password.is_empty() {
        credentials.push(':');
        credentials.push_str(&utf8_percent_encode(password, NON_ALPHANUMERIC).to_string());
    }
    format!("{}://{}@{}", scheme, credentials, rest)
}
