// Performance benchmarks for the cache engines
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use std::hint::black_box;
use cms_cache::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use cms_cache::cache::structs::cache_key::CacheKey;
use cms_cache::cache::traits::cache_backend::CacheBackend;

fn create_cache() -> (tempfile::TempDir, CacheConnectorFilesystem) {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheConnectorFilesystem::new(dir.path().join("cache")).unwrap();
    (dir, cache)
}

fn bench_filesystem_set(c: &mut Criterion) {
    let (_dir, cache) = create_cache();
    let mut group = c.benchmark_group("filesystem_set");
    for size in [16usize, 1024, 16 * 1024] {
        let payload = json!("x".repeat(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            let mut n = 0u64;
            b.iter(|| {
                n += 1;
                cache.set(&format!("key-{}", n % 64), black_box(payload), "bench", 300).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_filesystem_read(c: &mut Criterion) {
    let (_dir, cache) = create_cache();
    cache.set("hot", &json!({"title": "Front page"}), "bench", 300).unwrap();
    c.bench_function("filesystem_read_mirrored", |b| {
        b.iter(|| cache.read(black_box("hot"), "bench").unwrap())
    });

    let (_cold_dir, cold) = create_cache();
    cold.set("cold", &json!({"title": "Archive"}), "bench", 300).unwrap();
    c.bench_function("filesystem_read_miss", |b| {
        b.iter(|| cold.read(black_box("absent"), "bench").unwrap())
    });
}

fn bench_key_encoding(c: &mut Criterion) {
    let key = CacheKey::new("article:2024/11/some-long-slug", "pages");
    c.bench_function("cache_key_file_name", |b| b.iter(|| black_box(&key).file_name()));
    c.bench_function("cache_key_remote_key", |b| b.iter(|| black_box(&key).remote_key(10)));
}

criterion_group!(benches, bench_filesystem_set, bench_filesystem_read, bench_key_encoding);
criterion_main!(benches);
