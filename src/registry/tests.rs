#[cfg(test)]
mod registry_tests {
    mod cache_registry_tests {
        use crate::cache::errors::CacheError;
        use crate::config::structs::cache_profile_config::CacheProfileConfig;
        use crate::config::structs::caches_config::CachesConfig;
        use crate::factory::structs::cache_factory::CacheFactory;
        use crate::registry::structs::cache_registry::CacheRegistry;
        use serde_json::json;
        use std::sync::Arc;

        fn registry(config: CachesConfig) -> CacheRegistry {
            CacheRegistry::new(Arc::new(CacheFactory::new()), config)
        }

        #[tokio::test]
        async fn test_empty_config_has_single_default_profile() {
            let registry = registry(CachesConfig::default());
            assert!(!registry.is_initialized());
            assert_eq!(registry.profile_names().unwrap(), vec!["default"]);
            assert!(registry.is_initialized());
            assert_eq!(registry.default_name().unwrap(), "default");
            let profile = registry.profile("default").unwrap();
            assert_eq!(profile.driver, "array");
            assert!(profile.parameters.is_empty());
            assert_eq!(registry.get("default").await.unwrap().driver(), "array");
        }

        #[tokio::test]
        async fn test_first_profile_is_default() {
            let config = CachesConfig::default()
                .with_profile(CacheProfileConfig::new("first", "void"))
                .with_profile(CacheProfileConfig::new("second", "array"));
            let registry = registry(config);
            assert_eq!(registry.default_name().unwrap(), "first");
            assert_eq!(registry.get_default().await.unwrap().driver(), "void");
        }

        #[tokio::test]
        async fn test_explicit_default_must_exist() {
            let mut config = CachesConfig::default().with_profile(CacheProfileConfig::new("one", "array"));
            config.default = Some(String::from("two"));
            match registry(config).default_name() {
                Err(CacheError::UnknownProfile(name)) => assert_eq!(name, "two"),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_duplicate_names_are_rejected() {
            let config = CachesConfig::default()
                .with_profile(CacheProfileConfig::new("same", "array"))
                .with_profile(CacheProfileConfig::new("same", "void"));
            match registry(config).profile_names() {
                Err(CacheError::InvalidConfiguration { fields, .. }) => assert_eq!(fields, vec!["name"]),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_unknown_profile() {
            let registry = registry(CachesConfig::default());
            assert!(matches!(registry.get("nope").await, Err(CacheError::UnknownProfile(_))));
            assert!(matches!(registry.profile("nope"), Err(CacheError::UnknownProfile(_))));
        }

        #[tokio::test]
        async fn test_get_returns_same_instance() {
            let registry = registry(CachesConfig::default());
            let first = registry.get("default").await.unwrap();
            let second = registry.get("default").await.unwrap();
            assert!(Arc::ptr_eq(&first, &second));
            first.save("shared", &json!(1), None).await.unwrap();
            assert_eq!(second.fetch("shared").await.unwrap(), Some(json!(1)));
        }

        #[tokio::test]
        async fn test_concurrent_get_builds_once() {
            let registry = Arc::new(registry(CachesConfig::default()));
            let mut handles = Vec::new();
            for _ in 0..16 {
                let registry = Arc::clone(&registry);
                handles.push(tokio::spawn(async move { registry.get("default").await.unwrap() }));
            }
            let mut backends = Vec::new();
            for handle in handles {
                backends.push(handle.await.unwrap());
            }
            assert!(backends.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
        }

        #[tokio::test]
        async fn test_initialize_runs_once() {
            let registry = registry(CachesConfig::default());
            let config = CachesConfig::default().with_profile(CacheProfileConfig::new("custom", "void"));
            registry.initialize(config).unwrap();
            registry.initialize(CachesConfig::default()).unwrap();
            assert_eq!(registry.profile_names().unwrap(), vec!["custom"]);
        }

        #[tokio::test]
        async fn test_default_options_are_merged() {
            let config = CachesConfig {
                default: None,
                default_options: Some(CacheProfileConfig {
                    name: String::new(),
                    driver: Some(String::from("void")),
                    namespace: Some(String::from("ns")),
                    parameters: None,
                }),
                profiles: vec![
                    CacheProfileConfig { name: String::from("plain"), ..Default::default() },
                    CacheProfileConfig::new("memory", "array"),
                ],
            };
            let registry = registry(config);
            let plain = registry.profile("plain").unwrap();
            assert_eq!(plain.driver, "void");
            assert_eq!(plain.namespace.as_deref(), Some("ns"));
            let memory = registry.get("memory").await.unwrap();
            assert_eq!(memory.driver(), "array");
            assert_eq!(memory.namespace(), Some("ns"));
        }

        #[tokio::test]
        async fn test_empty_namespace_is_not_applied() {
            let mut profile = CacheProfileConfig::new("bare", "array");
            profile.namespace = Some(String::new());
            let registry = registry(CachesConfig::default().with_profile(profile));
            assert_eq!(registry.get("bare").await.unwrap().namespace(), None);
        }

        #[tokio::test]
        async fn test_failed_build_is_retried() {
            let dir = tempfile::tempdir().unwrap();
            let cache_dir = dir.path().join("later");
            let mut profile = CacheProfileConfig::new("files", "filesystem");
            profile.parameters = json!({"cache_dir": cache_dir.to_str().unwrap()}).as_object().cloned();
            let registry = registry(CachesConfig::default().with_profile(profile));

            assert!(matches!(
                registry.get("files").await,
                Err(CacheError::InvalidConfiguration { .. })
            ));
            assert!(!registry.is_built("files").unwrap());

            std::fs::create_dir(&cache_dir).unwrap();
            assert_eq!(registry.get("files").await.unwrap().driver(), "filesystem");
            assert!(registry.is_built("files").unwrap());
        }

        #[tokio::test]
        async fn test_unsupported_driver_surfaces_on_get() {
            let registry = registry(CachesConfig::default().with_profile(CacheProfileConfig::new("bad", "bogus")));
            assert_eq!(registry.profile_names().unwrap(), vec!["bad"]);
            assert!(matches!(registry.get("bad").await, Err(CacheError::UnsupportedDriver(_))));
        }
    }
}
