use assoc_map::AssocMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

fn bench_insert_get_remove_assoc_map(c: &mut Criterion) {
    c.bench_function("assoc_map_insert_get_remove", |b| {
        b.iter(|| {
            let mut m = AssocMap::<u64, u64>::with_capacity(8192);
            for i in 0..50_000 {
                m.insert(i, i);
            }
            for i in 0..50_000 {
                let _ = m.get(&i);
            }
            for i in 0..50_000 {
                let _ = m.remove(&i);
            }
            black_box(m.len())
        })
    });
}

fn bench_insert_get_remove_hashmap(c: &mut Criterion) {
    c.bench_function("hashmap_insert_get_remove", |b| {
        b.iter(|| {
            let mut m = HashMap::<u64, u64>::with_capacity(8192);
            for i in 0..50_000 {
                m.insert(i, i);
            }
            for i in 0..50_000 {
                let _ = m.get(&i);
            }
            for i in 0..50_000 {
                let _ = m.remove(&i);
            }
            black_box(m.len())
        })
    });
}

fn bench_contains_value_assoc_map(c: &mut Criterion) {
    c.bench_function("assoc_map_contains_value", |b| {
        let m: AssocMap<u64, u64> = (0..10_000).map(|i| (i, i * 2)).collect();

        b.iter(|| {
            // odd values are never present, so every probe is a full scan
            black_box(m.contains_value(black_box(&7)))
        })
    });
}

fn bench_contains_value_hashmap(c: &mut Criterion) {
    c.bench_function("hashmap_contains_value", |b| {
        let m: HashMap<u64, u64> = (0..10_000).map(|i| (i, i * 2)).collect();

        b.iter(|| black_box(m.values().any(|v| *v == black_box(7))))
    });
}

criterion_group!(
    benches,
    bench_insert_get_remove_assoc_map,
    bench_insert_get_remove_hashmap,
    bench_contains_value_assoc_map,
    bench_contains_value_hashmap
);
criterion_main!(benches);
