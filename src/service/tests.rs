#[cfg(test)]
mod service_tests {
    mod cache_service_tests {
        use crate::cache::errors::CacheError;
        use crate::config::structs::cache_profile_config::CacheProfileConfig;
        use crate::config::structs::caches_config::CachesConfig;
        use crate::config::structs::configuration::Configuration;
        use crate::service::structs::cache_service::CacheService;
        use serde_json::json;

        fn service(cache: CachesConfig) -> CacheService {
            CacheService::from_config(&Configuration {
                log_level: String::from("info"),
                cache,
            })
        }

        #[tokio::test]
        async fn test_operations_use_default_profile() {
            let service = service(CachesConfig::default());
            assert!(service.save("key", &json!({"a": [1, 2]}), None).await.unwrap());
            assert!(service.contains("key").await.unwrap());
            assert_eq!(service.fetch("key").await.unwrap(), Some(json!({"a": [1, 2]})));
            let default = service.select("default").await.unwrap();
            assert_eq!(default.fetch("key").await.unwrap(), Some(json!({"a": [1, 2]})));
            assert!(service.delete("key").await.unwrap());
            assert_eq!(service.fetch("key").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_flush_all_empties_default_profile() {
            let service = service(CachesConfig::default());
            service.save("a", &json!(1), None).await.unwrap();
            service.save("b", &json!(2), Some(60)).await.unwrap();
            assert!(service.flush_all().await.unwrap());
            assert!(!service.contains("a").await.unwrap());
            assert!(!service.contains("b").await.unwrap());
        }

        #[tokio::test]
        async fn test_profiles_marks_default() {
            let mut cache = CachesConfig::default()
                .with_profile(CacheProfileConfig::new("memory", "array"))
                .with_profile(CacheProfileConfig::new("blackhole", "void"));
            cache.default = Some(String::from("blackhole"));
            let service = service(cache);
            assert_eq!(
                service.profiles().unwrap(),
                vec![(String::from("memory"), false), (String::from("blackhole"), true)]
            );
            assert!(service.save("k", &json!("v"), None).await.unwrap());
            assert_eq!(service.fetch("k").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_select_unknown_profile() {
            let service = service(CachesConfig::default());
            assert!(matches!(service.select("missing").await, Err(CacheError::UnknownProfile(_))));
        }
    }
}
