use crate::cache::traits::cache_backend::CacheBackend;
use crate::registry::structs::cache_profile::CacheProfile;
use ahash::AHashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct RegistryState {
    pub(crate) profiles: Vec<CacheProfile>,
    pub(crate) index: AHashMap<String, usize>,
    /// One slot per profile, same order as `profiles`.
    pub(crate) slots: Vec<OnceCell<Arc<dyn CacheBackend>>>,
    pub(crate) default_name: String,
}
