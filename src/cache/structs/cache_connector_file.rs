use crate::cache::enums::cache_driver::CacheDriver;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CacheConnectorFile {
    pub(crate) driver: CacheDriver,
    pub(crate) directory: PathBuf,
    pub(crate) extension: String,
    pub(crate) umask: u32,
}
