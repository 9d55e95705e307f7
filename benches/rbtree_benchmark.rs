/*!
 * Ready-Queue Benchmarks
 *
 * Insert and extract-min throughput at scheduler-realistic queue sizes
 */

use cfs_sim::RbTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree_insert");

    for size in [64usize, 1024, 16_384] {
        let mut rng = StdRng::seed_from_u64(1);
        let keys: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..1e6)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for (pid, key) in keys.iter().enumerate() {
                    tree.insert(black_box(*key), pid as u32);
                }
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

fn bench_extract_min_reinsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree_extract_min_reinsert");

    for size in [64usize, 1024, 16_384] {
        let mut rng = StdRng::seed_from_u64(2);
        let keys: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..1e6)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            let mut tree = RbTree::new();
            for (pid, key) in keys.iter().enumerate() {
                tree.insert(*key, pid as u32);
            }

            // The scheduler's steady-state pattern: pop the minimum, charge
            // it a slice, put it back.
            b.iter(|| {
                let min = tree.minimum().expect("non-empty");
                let key = tree.key(min);
                let pid = tree.pid(min);
                tree.remove(min);
                tree.insert(black_box(key + 1.0), pid);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_extract_min_reinsert);
criterion_main!(benches);
