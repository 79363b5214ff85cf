//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use suture::{join_with, JoinWithExt};

fn contigs(count: usize, len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            (0..len)
                .map(|j| b"ACGT"[(i + j) % 4])
                .collect()
        })
        .collect()
}

fn benchmark_join(c: &mut Criterion) {
    let outer = contigs(1_000, 200);
    let spacer = vec![b'N'; 100];

    c.bench_function("view_join_1000x200_gap100", |b| {
        b.iter(|| {
            let view = join_with(black_box(&outer), black_box(&spacer));
            let mut sum = 0u64;
            for &base in view.iter() {
                sum = sum.wrapping_add(base as u64);
            }
            black_box(sum)
        });
    });

    c.bench_function("stream_join_1000x200_gap100", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for base in outer.clone().into_iter().join_with(spacer.clone()) {
                sum = sum.wrapping_add(base as u64);
            }
            black_box(sum)
        });
    });

    c.bench_function("eager_join_1000x200_gap100", |b| {
        b.iter(|| {
            let mut joined: Vec<u8> = Vec::new();
            for (i, inner) in outer.iter().enumerate() {
                if i > 0 {
                    joined.extend_from_slice(&spacer);
                }
                joined.extend_from_slice(inner);
            }
            black_box(joined)
        });
    });
}

criterion_group!(benches, benchmark_join);
criterion_main!(benches);
