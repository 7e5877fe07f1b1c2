use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::structs::cache_entry::CacheEntry;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheConnectorMemory {
    pub(crate) driver: CacheDriver,
    pub(crate) entries: Arc<RwLock<AHashMap<String, CacheEntry>>>,
}
