use serde::{Deserialize, Serialize};
use crate::config::structs::caches_config::CachesConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub cache: CachesConfig,
}
