#![allow(dead_code)]
use serde_json::{Map, Value};
use std::sync::Arc;
use tempfile::TempDir;
use multicache::config::structs::cache_profile_config::CacheProfileConfig;
use multicache::config::structs::caches_config::CachesConfig;
use multicache::config::structs::configuration::Configuration;
use multicache::factory::structs::cache_factory::CacheFactory;
use multicache::registry::structs::cache_registry::CacheRegistry;

pub type TestRegistry = Arc<CacheRegistry>;

pub fn parameters(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a table of parameters, got {}", other),
    }
}

pub fn profile(name: &str, driver: &str, value: Value) -> CacheProfileConfig {
    let mut profile = CacheProfileConfig::new(name, driver);
    profile.parameters = Some(parameters(value));
    profile
}

pub fn create_test_config(profiles: Vec<CacheProfileConfig>) -> Configuration {
    let mut config = Configuration::init();
    config.cache = CachesConfig {
        default: None,
        default_options: None,
        profiles,
    };
    config
}

pub fn create_test_registry(cache: CachesConfig) -> TestRegistry {
    Arc::new(CacheRegistry::new(Arc::new(CacheFactory::new()), cache))
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("temporary directory")
}

pub fn unique_key(prefix: &str) -> String {
    format!("{}:{}:{}", prefix, std::process::id(), multicache::common::common::current_time_millis())
}
