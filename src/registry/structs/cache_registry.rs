use crate::config::structs::caches_config::CachesConfig;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::registry::structs::registry_state::RegistryState;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub struct CacheRegistry {
    pub(crate) factory: Arc<CacheFactory>,
    pub(crate) config: CachesConfig,
    pub(crate) state: OnceCell<RegistryState>,
}
