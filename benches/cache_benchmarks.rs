// Performance benchmarks for multicache
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use multicache::cache::enums::cache_driver::CacheDriver;
use multicache::cache::structs::cache_connector_file::CacheConnectorFile;
use multicache::cache::structs::cache_connector_memory::CacheConnectorMemory;
use multicache::cache::structs::cache_connector_namespaced::CacheConnectorNamespaced;
use multicache::cache::structs::connector_options::FileOptions;
use multicache::cache::traits::cache_backend::CacheBackend;
use multicache::config::structs::caches_config::CachesConfig;
use multicache::factory::structs::cache_factory::CacheFactory;
use multicache::registry::structs::cache_registry::CacheRegistry;
use serde_json::{json, Map};
use std::hint::black_box;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn bench_memory(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cache = CacheConnectorMemory::new(CacheDriver::array);
    let value = json!({"id": 1, "tags": ["a", "b"], "active": true});

    c.bench_function("memory_save", |b| {
        b.to_async(&rt).iter(|| async {
            cache.save(black_box("bench:key"), black_box(&value), None).await.unwrap()
        })
    });

    rt.block_on(cache.save("bench:hit", &value, None)).unwrap();
    c.bench_function("memory_fetch_hit", |b| {
        b.to_async(&rt).iter(|| async { cache.fetch(black_box("bench:hit")).await.unwrap() })
    });
}

fn bench_namespaced(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let inner: Arc<dyn CacheBackend> = Arc::new(CacheConnectorMemory::new(CacheDriver::array));
    let cache = CacheConnectorNamespaced::new(inner, "bench");
    rt.block_on(cache.save("key", &json!(1), None)).unwrap();

    c.bench_function("namespaced_fetch", |b| {
        b.to_async(&rt).iter(|| async { cache.fetch(black_box("key")).await.unwrap() })
    });
}

fn bench_file(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = FileOptions {
        directory: dir.path().to_path_buf(),
        extension: String::from(".doctrinecache.data"),
        umask: 0o002,
        create_directory: false,
    };
    let cache = rt.block_on(CacheConnectorFile::open(CacheDriver::filesystem, &options)).unwrap();

    let mut group = c.benchmark_group("file_save");
    for size in [16usize, 1024, 16384] {
        let value = json!("x".repeat(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.to_async(&rt).iter(|| async { cache.save("bench", value, None).await.unwrap() })
        });
    }
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let registry = CacheRegistry::new(Arc::new(CacheFactory::new()), CachesConfig::default());
    rt.block_on(registry.get("default")).unwrap();

    c.bench_function("registry_get_built", |b| {
        b.to_async(&rt).iter(|| async { registry.get(black_box("default")).await.unwrap() })
    });

    let factory = CacheFactory::new();
    let parameters = Map::new();
    c.bench_function("factory_build_array", |b| {
        b.to_async(&rt).iter(|| async { factory.build("array", &parameters).await.unwrap() })
    });
}

criterion_group!(benches, bench_memory, bench_namespaced, bench_file, bench_registry);
criterion_main!(benches);
