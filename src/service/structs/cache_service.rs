use crate::registry::structs::cache_registry::CacheRegistry;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheService {
    pub(crate) registry: Arc<CacheRegistry>,
}
