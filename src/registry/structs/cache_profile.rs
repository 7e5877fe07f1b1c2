use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CacheProfile {
    pub name: String,
    pub driver: String,
    pub namespace: Option<String>,
    pub parameters: Map<String, Value>,
}
