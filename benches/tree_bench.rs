//! Performance benchmarks

use arborist::{
    build_from_preorder_inorder, deserialize, minimum_burn_time, serialize, threaded_inorder, Tree,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Complete tree over `0..n`, built from its sorted inorder sequence
fn balanced(n: i64) -> Tree<i64> {
    fn preorder_of(lo: i64, hi: i64, out: &mut Vec<i64>) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        out.push(mid);
        preorder_of(lo, mid, out);
        preorder_of(mid + 1, hi, out);
    }

    let inorder: Vec<i64> = (0..n).collect();
    let mut preorder = Vec::with_capacity(n as usize);
    preorder_of(0, n, &mut preorder);
    build_from_preorder_inorder(&preorder, &inorder).expect("valid traversal pair")
}

fn benchmark_reconstruction(c: &mut Criterion) {
    // Right-skewed chain: the case where a linear inorder scan would go quadratic
    let chain: Vec<i64> = (0..5_000).collect();

    c.bench_function("build_skewed_n=5000", |b| {
        b.iter(|| build_from_preorder_inorder(black_box(&chain), black_box(&chain)))
    });
}

fn benchmark_codec(c: &mut Criterion) {
    let tree = balanced(10_000);
    let text = serialize(&tree);

    c.bench_function("serialize_n=10000", |b| b.iter(|| serialize(black_box(&tree))));
    c.bench_function("deserialize_n=10000", |b| {
        b.iter(|| deserialize::<i64>(black_box(&text)))
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let tree = balanced(10_000);

    c.bench_function("burn_time_n=10000", |b| {
        b.iter(|| minimum_burn_time(black_box(&tree), black_box(&0)))
    });

    let mut walked = tree.clone();
    c.bench_function("threaded_inorder_n=10000", |b| {
        b.iter(|| threaded_inorder(black_box(&mut walked)))
    });
}

criterion_group!(benches, benchmark_reconstruction, benchmark_codec, benchmark_queries);
criterion_main!(benches);
