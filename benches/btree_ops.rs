//! Micro benchmarks for the in-memory B-tree.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use btreedict::BTree;

const INSERT_COUNT: u64 = 32_768;
const LOOKUP_SAMPLES: usize = 4_096;

fn shuffled_keys(seed: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..INSERT_COUNT).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn build(min_degree: usize, keys: &[u64]) -> BTree<u64, u64> {
    let mut tree = BTree::new(min_degree).unwrap();
    for &k in keys {
        tree.insert(k, k).unwrap();
    }
    tree
}

fn insert_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/insert");
    group.sample_size(20);
    group.throughput(Throughput::Elements(INSERT_COUNT));

    let sequential: Vec<u64> = (0..INSERT_COUNT).collect();
    let random = shuffled_keys(0xBEEF_F00D);

    for min_degree in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("sequential", min_degree), &min_degree, |b, &t| {
            b.iter_batched(
                || sequential.clone(),
                |keys| black_box(build(t, &keys).count()),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("random", min_degree), &min_degree, |b, &t| {
            b.iter_batched(
                || random.clone(),
                |keys| black_box(build(t, &keys).count()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn lookup_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/lookup");
    group.throughput(Throughput::Elements(LOOKUP_SAMPLES as u64));

    let probes: Vec<u64> = shuffled_keys(0x5EED).into_iter().take(LOOKUP_SAMPLES).collect();

    for min_degree in [2usize, 8, 32] {
        let tree = build(min_degree, &shuffled_keys(min_degree as u64));
        group.bench_with_input(BenchmarkId::new("hit", min_degree), &tree, |b, tree| {
            b.iter(|| {
                for k in &probes {
                    black_box(tree.lookup(k));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", min_degree), &tree, |b, tree| {
            b.iter(|| {
                for k in &probes {
                    black_box(tree.lookup(&(k + INSERT_COUNT)));
                }
            });
        });
    }
    group.finish();
}

fn traversal_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/traverse");
    group.throughput(Throughput::Elements(INSERT_COUNT));

    let tree = build(8, &shuffled_keys(1));
    group.bench_function("for_each", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            tree.for_each(|record, _, _| sum = sum.wrapping_add(*record.value));
            black_box(sum)
        });
    });
    group.bench_function("iter", |b| {
        b.iter(|| black_box(tree.values().fold(0u64, |acc, v| acc.wrapping_add(*v))));
    });
    group.finish();
}

criterion_group!(benches, insert_benches, lookup_benches, traversal_benches);
criterion_main!(benches);
