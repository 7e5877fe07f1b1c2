mod common;

use multicache::cache::errors::CacheError;
use multicache::config::structs::caches_config::CachesConfig;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_registry_builds_each_profile_once() {
    let registry = common::create_test_registry(
        CachesConfig::default()
            .with_profile(common::profile("one", "array", json!({})))
            .with_profile(common::profile("two", "array", json!({}))),
    );
    let one = registry.get("one").await.unwrap();
    let two = registry.get("two").await.unwrap();
    assert!(!Arc::ptr_eq(&one, &two));
    assert!(Arc::ptr_eq(&one, &registry.get("one").await.unwrap()));

    one.save("k", &json!(1), None).await.unwrap();
    assert_eq!(two.fetch("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_shared_memory_profiles_see_each_other() {
    let key = common::unique_key("apcu");
    let registry = common::create_test_registry(
        CachesConfig::default()
            .with_profile(common::profile("first", "apcu", json!({})))
            .with_profile(common::profile("second", "apcu", json!({}))),
    );
    let first = registry.get("first").await.unwrap();
    let second = registry.get("second").await.unwrap();
    first.save(&key, &json!("shared"), None).await.unwrap();
    assert_eq!(second.fetch(&key).await.unwrap(), Some(json!("shared")));
    second.delete(&key).await.unwrap();
}

#[tokio::test]
async fn test_namespaced_profiles_on_shared_store() {
    let key = common::unique_key("ns");
    let mut users = common::profile("users", "xcache", json!({}));
    users.namespace = Some(String::from("users"));
    let mut posts = common::profile("posts", "xcache", json!({}));
    posts.namespace = Some(String::from("posts"));
    let registry = common::create_test_registry(CachesConfig::default().with_profile(users).with_profile(posts));

    let users = registry.get("users").await.unwrap();
    let posts = registry.get("posts").await.unwrap();
    users.save(&key, &json!("user"), None).await.unwrap();
    posts.save(&key, &json!("post"), None).await.unwrap();
    assert_eq!(users.fetch(&key).await.unwrap(), Some(json!("user")));
    assert_eq!(posts.fetch(&key).await.unwrap(), Some(json!("post")));
    assert_eq!(users.namespace(), Some("users"));
}

#[tokio::test]
async fn test_chain_profile_writes_back() {
    let dir = common::create_temp_dir();
    let registry = common::create_test_registry(CachesConfig::default().with_profile(common::profile(
        "layered",
        "chain",
        json!({"providers": [
            {"driver": "array"},
            {"driver": "filesystem", "parameters": {"cache_dir": dir.path().to_str().unwrap()}}
        ]}),
    )));
    let disk = common::create_test_registry(CachesConfig::default().with_profile(common::profile(
        "disk",
        "filesystem",
        json!({"cache_dir": dir.path().to_str().unwrap()}),
    )));

    disk.get("disk").await.unwrap().save("warm", &json!(7), None).await.unwrap();
    let layered = registry.get("layered").await.unwrap();
    assert_eq!(layered.fetch("warm").await.unwrap(), Some(json!(7)));

    disk.get("disk").await.unwrap().delete("warm").await.unwrap();
    assert_eq!(layered.fetch("warm").await.unwrap(), Some(json!(7)));
}

#[tokio::test]
async fn test_profile_errors_surface_on_first_use() {
    let registry = common::create_test_registry(
        CachesConfig::default()
            .with_profile(common::profile("ok", "array", json!({})))
            .with_profile(common::profile("broken", "redis", json!({"host": "localhost"}))),
    );
    assert_eq!(registry.profile_names().unwrap(), vec!["ok", "broken"]);
    assert!(registry.get("ok").await.is_ok());
    match registry.get("broken").await {
        Err(CacheError::InvalidConfiguration { fields, .. }) => assert_eq!(fields, vec!["port"]),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("broken profile was built"),
    }
}
