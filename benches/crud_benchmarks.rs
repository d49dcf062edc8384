use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ordtree::BTree;
use std::collections::BTreeSet;
use std::hint::black_box;

const N: usize = 10_000;
const SEEK_N: usize = 100_000;
const DEGREE: usize = 32;

// ─── Helper functions to generate key sequences ─────────────────────────────

/// A deterministic shuffle of `0..n`.
fn permutation(n: usize, seed: u64) -> Vec<i64> {
    // Use a simple LCG for a deterministic Fisher-Yates shuffle
    let mut keys: Vec<i64> = (0..n as i64).collect();
    let mut x = seed;
    for i in (1..n).rev() {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = ((x >> 33) as usize) % (i + 1);
        keys.swap(i, j);
    }
    keys
}

fn tree_of(keys: &[i64]) -> BTree<i64> {
    let mut tree = BTree::with_degree(DEGREE).unwrap();
    tree.extend(keys.iter().copied());
    tree
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let keys = permutation(N, 12345);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::with_degree(DEGREE).unwrap();
            for &k in &keys {
                tree.replace_or_insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let keys = permutation(N, 12345);
    let probes = permutation(N, 54321);
    let tree = tree_of(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(tree.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(set.get(k));
            }
        });
    });

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let keys = permutation(N, 12345);
    let removals = permutation(N, 54321);
    let tree = tree_of(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for k in &removals {
                    tree.delete(k);
                }
                assert!(tree.is_empty());
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || set.clone(),
            |mut set| {
                for k in &removals {
                    set.remove(k);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_seek(c: &mut Criterion) {
    let tree = tree_of(&permutation(SEEK_N, 12345));
    let mut group = c.benchmark_group("seek");

    group.bench_function(BenchmarkId::new("BTree", SEEK_N), |b| {
        let mut i = 0i64;
        b.iter(|| {
            tree.ascend_greater_or_equal(&(i % SEEK_N as i64), |item| {
                black_box(item);
                false
            });
            i += 1;
        });
    });

    group.finish();
}

fn bench_ascend_greater_or_equal(c: &mut Criterion) {
    let tree = tree_of(&permutation(N, 12345));
    let mut group = c.benchmark_group("ascend_greater_or_equal");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut expected = 100i64;
            tree.ascend_greater_or_equal(&100, |&item| {
                assert_eq!(item, expected);
                expected += 1;
                true
            });
            assert_eq!(expected, N as i64);
        });
    });

    group.finish();
}

fn bench_descend_less_or_equal(c: &mut Criterion) {
    let tree = tree_of(&permutation(N, 12345));
    let start = N as i64 - 100;
    let mut group = c.benchmark_group("descend_less_or_equal");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut expected = start;
            tree.descend_less_or_equal(&start, |&item| {
                assert_eq!(item, expected);
                expected -= 1;
                true
            });
            assert_eq!(expected, -1);
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(crud_benches, bench_insert, bench_get, bench_delete);

criterion_group!(scan_benches, bench_seek, bench_ascend_greater_or_equal, bench_descend_less_or_equal);

criterion_main!(crud_benches, scan_benches);
