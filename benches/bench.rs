use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bbtree::{AvlSet, RbSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn shuffled_keys(n: usize) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n as u32).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(0x5eed));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [100, 1_000, 10_000] {
        let keys = shuffled_keys(n);

        group.bench_with_input(BenchmarkId::new("avl", n), &keys, |b, keys| {
            b.iter(|| {
                let mut set = AvlSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("rb", n), &keys, |b, keys| {
            b.iter(|| {
                let mut set = RbSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set.len())
            })
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for n in [100, 1_000, 10_000] {
        let keys = shuffled_keys(n);
        let avl: AvlSet<u32> = keys.iter().copied().collect();
        let rb: RbSet<u32> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("avl", n), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                let hit = avl.contains(&keys[i]);
                i = (i + 1) % keys.len();
                black_box(hit)
            })
        });

        group.bench_with_input(BenchmarkId::new("rb", n), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                let hit = rb.contains(&keys[i]);
                i = (i + 1) % keys.len();
                black_box(hit)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
