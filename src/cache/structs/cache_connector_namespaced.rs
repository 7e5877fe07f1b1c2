use crate::cache::traits::cache_backend::CacheBackend;
use parking_lot::Mutex;
use std::sync::Arc;

pub struct CacheConnectorNamespaced {
    pub(crate) inner: Arc<dyn CacheBackend>,
    pub(crate) namespace: String,
    pub(crate) version: Mutex<Option<u64>>,
}
