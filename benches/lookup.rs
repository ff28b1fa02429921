use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tablemeta::table_config::registry;
use tablemeta::TableConfig;

fn bench_lookup(c: &mut Criterion) {
    let cfg = TableConfig::builtin();
    let mut group = c.benchmark_group("config_lookup");

    // Hit near the front, hit near the back, and a guaranteed miss.
    for ty in ["numeric", "varchar", "nonexistent_type"] {
        group.bench_with_input(BenchmarkId::new("encoding_options", ty), &ty, |b, &ty| {
            b.iter(|| criterion::black_box(cfg.encoding_options(ty)));
        });
    }

    group.bench_function("data_types", |b| {
        b.iter(|| criterion::black_box(cfg.data_types().len()));
    });

    group.bench_function("registry_get_default", |b| {
        registry::ensure_registered();
        b.iter(|| criterion::black_box(registry::get_default()));
    });

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
