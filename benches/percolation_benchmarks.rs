/// Performance benchmarks for the percolation core
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use percolation::stats::run_trial;
use percolation::union_find::UnionFind;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: one full trial (open random sites until percolation)
fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");

    for n in [32i64, 128, 512].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.sample_size(20);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| run_trial(black_box(n), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark: chained unions followed by a full sweep of connectivity queries
fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for size in [1_000usize, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut uf = UnionFind::new(size);
                for i in 1..size {
                    uf.union(i - 1, i);
                }
                (0..size).filter(|&i| uf.connected(0, i)).count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_trial, bench_union_find);
criterion_main!(benches);
