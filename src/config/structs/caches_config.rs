use crate::config::structs::cache_profile_config::CacheProfileConfig;
use serde::{
    Deserialize,
    Serialize
};

/// The `[cache]` section: profiles in file order, optional default name and defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CachesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_options: Option<CacheProfileConfig>,
    #[serde(default)]
    pub profiles: Vec<CacheProfileConfig>,
}
