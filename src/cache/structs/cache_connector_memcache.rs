use crate::cache::enums::cache_driver::CacheDriver;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct CacheConnectorMemcache {
    pub(crate) client: Arc<Mutex<memcache::Client>>,
    pub(crate) driver: CacheDriver,
    pub(crate) key_prefix: String,
}
