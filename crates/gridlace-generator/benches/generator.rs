//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (random solved grid plus cell
//! removal) over a few fixed seeds, in both strict and non-strict mode.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlace_core::GridSize;
use gridlace_generator::Generator;

const SEEDS: [u64; 3] = [42, 0x5eed, 0xdead_beef];

fn bench_generate(c: &mut Criterion) {
    let size = GridSize::new(9).unwrap();
    let mut group = c.benchmark_group("generate_9x9");
    for seed in SEEDS {
        group.bench_with_input(BenchmarkId::new("loose", seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut generator = Generator::from_seed(seed);
                hint::black_box(generator.generate(size, false))
            });
        });
        group.bench_with_input(BenchmarkId::new("strict", seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut generator = Generator::from_seed(seed);
                hint::black_box(generator.generate(size, true))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
