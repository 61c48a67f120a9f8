use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;
use trisort::suffix::circular_suffix_array;

fn bench_1m_rotations(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Rotations");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Increase time for large sort setup overhead

    // Random DNA-like text; rotations diverge after a handful of bytes.
    let mut rng = rand::rng();
    let count = 1_000_000;
    let text: Vec<u8> = (0..count)
        .map(|_| b"acgt"[rng.random_range(0..4)])
        .collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("trisort (rotations)", |b| {
        b.iter(|| circular_suffix_array(black_box(&text)))
    });

    // Comparison sort over the same rotations, compared without materializing them.
    group.bench_function("slice::sort_by (rotations)", |b| {
        b.iter(|| {
            let mut indices: Vec<usize> = (0..count).collect();
            indices.sort_by(|&x, &y| {
                let rx = text[x..].iter().chain(&text[..x]);
                let ry = text[y..].iter().chain(&text[..y]);
                rx.cmp(ry)
            });
            black_box(indices)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_1m_rotations);
criterion_main!(benches);
