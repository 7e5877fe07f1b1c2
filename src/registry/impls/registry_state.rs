use crate::cache::errors::CacheError;
use crate::config::impls::cache_profile_config::DEFAULT_PROFILE_NAME;
use crate::config::structs::caches_config::CachesConfig;
use crate::registry::structs::cache_profile::CacheProfile;
use crate::registry::structs::registry_state::RegistryState;
use ahash::AHashMap;
use std::fmt;
use tokio::sync::OnceCell;

impl fmt::Debug for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<&str> = self
            .profiles
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.initialized())
            .map(|(profile, _)| profile.name.as_str())
            .collect();
        f.debug_struct("RegistryState")
            .field("profiles", &self.profiles)
            .field("default_name", &self.default_name)
            .field("built", &built)
            .finish()
    }
}

impl RegistryState {
    pub fn build(config: CachesConfig) -> Result<Self, CacheError> {
        let defaults = config.effective_defaults();
        let profiles: Vec<CacheProfile> = if config.profiles.is_empty() {
            let mut profile = defaults.clone();
            profile.name = DEFAULT_PROFILE_NAME.to_string();
            vec![CacheProfile::from_config(profile)]
        } else {
            config
                .profiles
                .iter()
                .map(|profile| CacheProfile::from_config(profile.merged_over(&defaults)))
                .collect()
        };

        let mut index = AHashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(CacheError::invalid_field(
                    &profile.driver,
                    "name",
                    format!("cache profile #{} has no name", position),
                ));
            }
            if index.insert(profile.name.clone(), position).is_some() {
                return Err(CacheError::invalid_field(
                    &profile.driver,
                    "name",
                    format!("cache profile \"{}\" is defined more than once", profile.name),
                ));
            }
        }

        let default_name = match config.default {
            Some(name) if !index.contains_key(&name) => return Err(CacheError::UnknownProfile(name)),
            Some(name) => name,
            None => profiles[0].name.clone(),
        };

        let slots = profiles.iter().map(|_| OnceCell::new()).collect();
        Ok(Self {
            profiles,
            index,
            slots,
            default_name,
        })
    }

    pub fn position(&self, name: &str) -> Result<usize, CacheError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CacheError::UnknownProfile(name.to_string()))
    }
}
