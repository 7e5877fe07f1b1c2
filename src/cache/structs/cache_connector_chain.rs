use crate::cache::traits::cache_backend::CacheBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct CacheConnectorChain {
    pub(crate) members: Vec<Arc<dyn CacheBackend>>,
}
