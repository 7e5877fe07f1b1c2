mod common;

use multicache::cache::errors::CacheError;
use multicache::factory::structs::cache_factory::CacheFactory;
use serde_json::json;

#[tokio::test]
async fn test_factory_reports_missing_parameters_per_driver() {
    let factory = CacheFactory::new();
    let cases = vec![
        ("redis", json!({}), vec!["host", "port"]),
        ("redis", json!({"host": "localhost", "port": 0}), vec!["port"]),
        ("memcached", json!({"port": 11211}), vec!["host"]),
        ("memcache", json!({"host": ""}), vec!["host", "port"]),
        ("couchbase", json!({"host": "cb"}), vec!["port"]),
        ("mongodb", json!({"server": "mongodb://localhost"}), vec!["name", "collection"]),
        ("riak", json!({"host": "riak", "port": 8098}), vec!["bucket"]),
        ("sqlite3", json!({"table": "cache"}), vec!["filename"]),
        ("pdo", json!({"dns": "sqlite::memory:"}), vec!["table"]),
        ("phpfile", json!({"directory": null}), vec!["directory"]),
        ("predis", json!({"host": "localhost", "port": 6379}), vec!["scheme"]),
        ("chain", json!({"providers": []}), vec!["providers"]),
    ];
    for (driver, parameters, expected) in cases {
        match factory.build(driver, &common::parameters(parameters)).await {
            Err(CacheError::InvalidConfiguration { driver: reported, fields, .. }) => {
                assert_eq!(reported, driver);
                assert_eq!(fields, expected, "fields reported for {}", driver);
            }
            Err(other) => panic!("{}: unexpected error {:?}", driver, other),
            Ok(_) => panic!("{}: built without its required parameters", driver),
        }
    }
}

#[tokio::test]
async fn test_factory_rejects_unknown_drivers() {
    let factory = CacheFactory::new();
    for driver in ["bogus", "", "Redis", "apc"] {
        assert!(matches!(
            factory.build(driver, &serde_json::Map::new()).await,
            Err(CacheError::UnsupportedDriver(_))
        ));
    }
}

#[tokio::test]
async fn test_unreachable_backends_fail_to_connect() {
    let factory = CacheFactory::new();
    let cases = vec![
        ("redis", json!({"host": "127.0.0.1", "port": 1})),
        ("predis", json!({"scheme": "tcp", "host": "127.0.0.1", "port": 1})),
        ("riak", json!({"host": "127.0.0.1", "port": 1, "bucket": "cache"})),
        ("mongodb", json!({"server": "not-a-mongodb-uri", "name": "db", "collection": "cache"})),
    ];
    for (driver, parameters) in cases {
        match factory.build(driver, &common::parameters(parameters)).await {
            Err(CacheError::BackendConnection { driver: reported, .. }) => assert_eq!(reported, driver),
            Err(other) => panic!("{}: unexpected error {:?}", driver, other),
            Ok(_) => panic!("{}: connected to a closed port", driver),
        }
    }
}

#[tokio::test]
async fn test_memcache_connection_failure() {
    let factory = CacheFactory::new();
    let parameters = common::parameters(json!({"host": "127.0.0.1", "port": 1}));
    assert!(factory.build("memcached", &parameters).await.is_err());
}

#[tokio::test]
async fn test_phpfile_creates_its_directory() {
    let dir = common::create_temp_dir();
    let directory = dir.path().join("nested").join("cache");
    let factory = CacheFactory::new();
    let cache = factory
        .build("phpfile", &common::parameters(json!({"directory": directory.to_str().unwrap()})))
        .await
        .unwrap();
    assert_eq!(cache.driver(), "phpfile");
    assert!(directory.is_dir());
    cache.save("k", &json!("v"), None).await.unwrap();
    assert_eq!(cache.fetch("k").await.unwrap(), Some(json!("v")));
}

#[tokio::test]
async fn test_sqlite3_round_trip_on_disk() {
    let dir = common::create_temp_dir();
    let filename = dir.path().join("cache.db");
    let factory = CacheFactory::new();
    let parameters = common::parameters(json!({"filename": filename.to_str().unwrap(), "table": "entries"}));

    let cache = factory.build("sqlite3", &parameters).await.unwrap();
    assert_eq!(cache.driver(), "sqlite3");
    assert!(cache.save("answer", &json!({"value": 42}), None).await.unwrap());
    drop(cache);

    let reopened = factory.build("sqlite3", &parameters).await.unwrap();
    assert_eq!(reopened.fetch("answer").await.unwrap(), Some(json!({"value": 42})));
    assert!(filename.exists());
}

#[tokio::test]
async fn test_pdo_with_sqlite_dns() {
    let factory = CacheFactory::new();
    let parameters = common::parameters(json!({"dns": "sqlite::memory:", "table": "cache"}));
    let cache = factory.build("pdo", &parameters).await.unwrap();
    assert_eq!(cache.driver(), "pdo");
    cache.save("k", &json!([1, 2, 3]), Some(60)).await.unwrap();
    assert!(cache.contains("k").await.unwrap());
}

#[tokio::test]
async fn test_nested_chain() {
    let dir = common::create_temp_dir();
    let factory = CacheFactory::new();
    let parameters = common::parameters(json!({
        "providers": [
            {"driver": "array"},
            {"driver": "chain", "parameters": {"providers": [
                {"driver": "filesystem", "parameters": {"cache_dir": dir.path().to_str().unwrap()}}
            ]}}
        ]
    }));
    let cache = factory.build("chain", &parameters).await.unwrap();
    cache.save("deep", &json!(true), None).await.unwrap();
    assert_eq!(cache.fetch("deep").await.unwrap(), Some(json!(true)));
}
