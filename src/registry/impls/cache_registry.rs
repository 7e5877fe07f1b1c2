use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_namespaced::CacheConnectorNamespaced;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::caches_config::CachesConfig;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::registry::structs::cache_profile::CacheProfile;
use crate::registry::structs::cache_registry::CacheRegistry;
use crate::registry::structs::registry_state::RegistryState;
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

const LOG_PREFIX: &str = "[Registry]";

impl fmt::Debug for CacheRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheRegistry")
            .field("drivers", &self.factory.drivers())
            .field("state", &self.state.get())
            .finish()
    }
}

impl CacheRegistry {
    /// `config` is used the first time a profile is needed, unless
    /// [`CacheRegistry::initialize`] ran before.
    pub fn new(factory: Arc<CacheFactory>, config: CachesConfig) -> Self {
        Self {
            factory,
            config,
            state: OnceCell::new(),
        }
    }

    /// Resolves the profiles once. Later calls keep the first configuration and return `Ok`.
    pub fn initialize(&self, config: CachesConfig) -> Result<(), CacheError> {
        if self.state.get().is_some() {
            debug!("{} Already initialized, ignoring configuration", LOG_PREFIX);
            return Ok(());
        }
        self.state.get_or_try_init(|| Self::resolve(config))?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    fn resolve(config: CachesConfig) -> Result<RegistryState, CacheError> {
        let state = RegistryState::build(config)?;
        info!(
            "{} {} profile(s) registered, default is \"{}\"",
            LOG_PREFIX,
            state.profiles.len(),
            state.default_name
        );
        Ok(state)
    }

    fn state(&self) -> Result<&RegistryState, CacheError> {
        self.state.get_or_try_init(|| Self::resolve(self.config.clone()))
    }

    pub fn default_name(&self) -> Result<String, CacheError> {
        Ok(self.state()?.default_name.clone())
    }

    pub fn profile(&self, name: &str) -> Result<CacheProfile, CacheError> {
        let state = self.state()?;
        Ok(state.profiles[state.position(name)?].clone())
    }

    /// Profile names in configuration order.
    pub fn profile_names(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.state()?.profiles.iter().map(|profile| profile.name.clone()).collect())
    }

    pub fn is_built(&self, name: &str) -> Result<bool, CacheError> {
        let state = self.state()?;
        Ok(state.slots[state.position(name)?].initialized())
    }

    /// The backend for `name`, built on first use and shared afterwards.
    /// Concurrent first calls wait for a single construction; a failed one leaves the slot empty.
    pub async fn get(&self, name: &str) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let state = self.state()?;
        let position = state.position(name)?;
        let profile = &state.profiles[position];
        let backend = state.slots[position]
            .get_or_try_init(|| self.build_profile(profile))
            .await?;
        Ok(Arc::clone(backend))
    }

    pub async fn get_default(&self) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let name = self.default_name()?;
        self.get(&name).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn build_profile(&self, profile: &CacheProfile) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let backend = self.factory.build(&profile.driver, &profile.parameters).await?;
        let backend: Arc<dyn CacheBackend> = match profile.effective_namespace() {
            Some(namespace) => Arc::new(CacheConnectorNamespaced::new(backend, namespace)),
            None => backend,
        };
        info!("{} Profile \"{}\" built with driver {}", LOG_PREFIX, profile.name, profile.driver);
        Ok(backend)
    }
}
