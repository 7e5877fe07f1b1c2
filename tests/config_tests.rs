mod common;

use multicache::config::structs::configuration::Configuration;
use multicache::service::structs::cache_service::CacheService;
use serde_json::json;
use std::fs;

#[tokio::test]
async fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let cache_dir = temp_dir.path().join("files");
    fs::create_dir(&cache_dir).unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = format!(
        r#"
log_level = "warn"

[cache]
default = "files"

[[cache.profiles]]
name = "memory"

[[cache.profiles]]
name = "files"
driver = "filesystem"
namespace = "app"
parameters = {{ cache_dir = "{}" }}
"#,
        cache_dir.display()
    );
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");

    let service = CacheService::from_config(&config);
    assert_eq!(
        service.profiles().unwrap(),
        vec![(String::from("memory"), false), (String::from("files"), true)]
    );
    service.save("greeting", &json!("hello"), None).await.unwrap();
    assert_eq!(service.fetch("greeting").await.unwrap(), Some(json!("hello")));
    assert_eq!(service.select("memory").await.unwrap().fetch("greeting").await.unwrap(), None);
}

#[test]
fn test_config_missing_file_without_create() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
    assert!(!config_path.exists());
}

#[test]
fn test_config_default_file_creation() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), true).is_err());
    assert!(config_path.exists());

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.cache, Configuration::init().cache);
}

#[test]
fn test_config_validation_failure() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "log_level = \"info\"\n[[cache.profiles]]\nname = \"a\"\n[[cache.profiles]]\nname = \"a\"\n",
    )
    .unwrap();
    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("saved.toml");
    let config = common::create_test_config(vec![
        common::profile("redis", "redis", json!({"host": "127.0.0.1", "port": 6379})),
    ]);
    let text = toml::to_string(&config).unwrap();
    Configuration::save_file(config_path.to_str().unwrap(), text).unwrap();
    let loaded = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.cache, config.cache);
    let parameters = loaded.cache.profiles[0].parameters.as_ref().unwrap();
    assert_eq!(parameters["port"], json!(6379));
}
