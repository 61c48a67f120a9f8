use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use trisort::prelude::*;

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fixed Width Strings");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| (0..12).map(|_| rng.random_range('a'..='z')).collect())
        .collect();

    group.bench_function("trisort (indices)", |b| {
        b.iter(|| trisort(black_box(&random_strings)))
    });

    group.bench_function("trisort (in-place)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| trisort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long Common Prefix");
    group.sample_size(10);

    // Dataset with heavy prefixes
    let mut rng = rand::rng();
    let count = 10_000;
    let prefix = "common_prefix_which_is_quite_long_indeed_";

    let input: Vec<String> = (0..count)
        .map(|_| {
            let suffix: String = (0..5).map(|_| rng.random_range('a'..='z')).collect();
            format!("{}{}", prefix, suffix)
        })
        .collect();

    group.bench_function("trisort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| trisort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_strings, bench_long_prefix);
criterion_main!(benches);
