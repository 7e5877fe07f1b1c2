use serde::{
    Deserialize,
    Serialize
};
use serde_json::{Map, Value};

/// One `[[cache.profiles]]` entry as written by the user; unset fields fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CacheProfileConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
}
