mod common;

use multicache::cache::enums::cache_driver::CacheDriver;
use multicache::cache::structs::cache_connector_memory::CacheConnectorMemory;
use multicache::cache::structs::cache_connector_namespaced::CacheConnectorNamespaced;
use multicache::cache::traits::cache_backend::CacheBackend;
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}

proptest! {
    #[test]
    fn prop_memory_returns_what_was_saved(key in "[a-zA-Z0-9:_]{1,24}", value in json_value()) {
        let fetched = runtime().block_on(async {
            let cache = CacheConnectorMemory::new(CacheDriver::array);
            cache.save(&key, &value, None).await.unwrap();
            cache.fetch(&key).await.unwrap()
        });
        prop_assert_eq!(fetched, Some(value));
    }

    #[test]
    fn prop_namespaces_never_collide(key in "[a-z]{1,8}", first in "[a-z]{1,6}", second in "[a-z]{1,6}") {
        prop_assume!(first != second);
        let (a, b) = runtime().block_on(async {
            let inner: Arc<dyn CacheBackend> = Arc::new(CacheConnectorMemory::new(CacheDriver::array));
            let one = CacheConnectorNamespaced::new(Arc::clone(&inner), &first);
            let two = CacheConnectorNamespaced::new(Arc::clone(&inner), &second);
            one.save(&key, &Value::from(1), None).await.unwrap();
            (one.fetch(&key).await.unwrap(), two.fetch(&key).await.unwrap())
        });
        prop_assert_eq!(a, Some(Value::from(1)));
        prop_assert_eq!(b, None);
    }
}
