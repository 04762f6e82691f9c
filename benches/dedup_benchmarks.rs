use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use intdupe::dedup::compact::compact_vec;
use intdupe::dedup::quicksort::quicksort;
use intdupe::dedup::{Strategy, SAMPLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random values drawn from `0..n/2`, so about half the input repeats.
fn gen_with_dups(n: usize, rng: &mut StdRng) -> Vec<i64> {
    let upper = (n / 2).max(1) as i64;
    (0..n).map(|_| rng.gen_range(0..upper)).collect()
}

// 1. Every strategy on the reference sample
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter_batched(
                || SAMPLE.to_vec(),
                |values| black_box(strategy.apply(black_box(values))),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

// 2. Scaling with input size
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for &n in &[100usize, 1_000, 5_000] {
        // Fixed seed per size for stable inputs
        let mut rng = StdRng::seed_from_u64(n as u64);
        let data = gen_with_dups(n, &mut rng);

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |values| black_box(strategy.apply(values)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

// 3. Sorting and compaction in isolation
fn bench_quicksort_and_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort_compact");
    let mut rng = StdRng::seed_from_u64(0xDEDE);
    let data = gen_with_dups(10_000, &mut rng);

    group.bench_function("quicksort_10000", |b| {
        b.iter_batched(
            || data.clone(),
            |mut values| {
                quicksort(&mut values);
                black_box(values)
            },
            BatchSize::SmallInput,
        )
    });

    let mut sorted = data.clone();
    sorted.sort_unstable();
    group.bench_function("compact_sorted_10000", |b| {
        b.iter_batched(
            || sorted.clone(),
            |values| black_box(compact_vec(values)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sample,
    bench_strategies,
    bench_quicksort_and_compact
);
criterion_main!(benches);
