use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::connector_options::FileOptions;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::{expiration_millis, is_expired};
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const LOG_PREFIX: &str = "[File]";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

impl CacheConnectorFile {
    #[tracing::instrument(level = "debug")]
    pub async fn open(driver: CacheDriver, options: &FileOptions) -> Result<Self, CacheError> {
        if options.create_directory {
            tokio::fs::create_dir_all(&options.directory)
                .await
                .map_err(|e| CacheError::connection(driver.as_str(), format!("Failed to create {}: {}", options.directory.display(), e)))?;
        }
        let metadata = tokio::fs::metadata(&options.directory)
            .await
            .map_err(|e| CacheError::connection(driver.as_str(), format!("Failed to open {}: {}", options.directory.display(), e)))?;
        if !metadata.is_dir() {
            return Err(CacheError::connection(
                driver.as_str(),
                format!("{} is not a directory", options.directory.display()),
            ));
        }
        debug!("{} Using directory {}", LOG_PREFIX, options.directory.display());
        Ok(Self {
            driver,
            directory: options.directory.clone(),
            extension: options.extension.clone(),
            umask: options.umask,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `<dir>/<first two hex chars>/<remaining sha1 hex><extension>`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut hasher = Sha1::new();
        hasher.update(key.as_bytes());
        let hash = hex::encode(hasher.finalize().as_slice());
        self.directory
            .join(&hash[..2])
            .join(format!("{}{}", &hash[2..], self.extension))
    }

    async fn read_entry(&self, path: &Path) -> Result<Option<Value>, CacheError> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };
        let Some((header, body)) = contents.split_once('\n') else {
            return Ok(None);
        };
        let expires_at = match header.trim().parse::<i64>() {
            Ok(0) => None,
            Ok(at) => Some(at),
            Err(_) => return Ok(None),
        };
        if is_expired(expires_at) {
            remove_if_exists(path).await?;
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(body)?))
    }

    async fn create_directory(&self, directory: &Path) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(directory).await?;
        self.apply_mode(directory, 0o777).await
    }

    #[cfg(unix)]
    async fn apply_mode(&self, path: &Path, base: u32) -> Result<(), CacheError> {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(base & !self.umask);
        tokio::fs::set_permissions(path, permissions).await?;
        Ok(())
    }

    #[cfg(not(unix))]
    async fn apply_mode(&self, _path: &Path, _base: u32) -> Result<(), CacheError> {
        Ok(())
    }
}

async fn remove_if_exists(path: &Path) -> Result<(), CacheError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CacheError::Io(e)),
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorFile {
    fn driver(&self) -> &'static str {
        self.driver.as_str()
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let path = self.path_for(key);
        self.read_entry(&path).await
    }

    async fn contains(&self, key: &str) -> Result<bool, CacheError> {
        let path = self.path_for(key);
        Ok(self.read_entry(&path).await?.is_some())
    }

    async fn save(&self, key: &str, value: &Value, ttl: Option<u64>) -> Result<bool, CacheError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            self.create_directory(parent).await?;
        }
        let contents = format!(
            "{}\n{}",
            expiration_millis(ttl).unwrap_or(0),
            serde_json::to_string(value)?
        );
        let temp_path = path.with_extension(format!(
            "{}.{}.tmp",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&temp_path, contents).await?;
        self.apply_mode(&temp_path, 0o666).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            remove_if_exists(&temp_path).await?;
            return Err(CacheError::Io(e));
        }
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        remove_if_exists(&self.path_for(key)).await?;
        Ok(true)
    }

    async fn flush_all(&self) -> Result<bool, CacheError> {
        let mut removed = 0u64;
        let mut directories = tokio::fs::read_dir(&self.directory).await?;
        while let Some(directory) = directories.next_entry().await? {
            if !directory.file_type().await?.is_dir() {
                continue;
            }
            let mut files = tokio::fs::read_dir(directory.path()).await?;
            while let Some(file) = files.next_entry().await? {
                if file.file_name().to_string_lossy().ends_with(&self.extension) {
                    remove_if_exists(&file.path()).await?;
                    removed += 1;
                }
            }
            let _ = tokio::fs::remove_dir(directory.path()).await;
        }
        debug!("{} Flushed {} entries from {}", LOG_PREFIX, removed, self.directory.display());
        Ok(true)
    }
}
