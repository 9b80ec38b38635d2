use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_runtime_for_len, default_rng, nearly_sorted, random_non_negative};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use merge_insertion::{
    MergeInsertContext, all_representations, representation_name, sort_with_ctx,
};

const BENCH_SIZES: [usize; 4] = [100, 1_000, 3_000, 10_000];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

fn generate_dataset(dist: Distribution, size: usize) -> Vec<i32> {
    let mut rng = default_rng();
    match dist {
        Distribution::RandomUniform => random_non_negative(&mut rng, size),
        Distribution::NearlySorted1pctSwaps => nearly_sorted(&mut rng, size),
    }
}

fn bench_merge_insertion(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("merge_insertion/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_for_len(&mut group, size);
            let base = generate_dataset(dist, size);

            for &repr in all_representations() {
                group.bench_function(BenchmarkId::new(representation_name(repr), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut ctx = MergeInsertContext::new();
                        for _ in 0..iters {
                            let data = base.clone();
                            let start = Instant::now();
                            let sorted = sort_with_ctx(repr, data, &mut ctx);
                            total += start.elapsed();
                            black_box(&sorted);
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_merge_insertion);
criterion_main!(benches);
