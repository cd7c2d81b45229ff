//! Performance measurement for the brute-force nearest-neighbour fill

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixeldrift::algorithm::executor::{NearestPipelineConfig, synthesize_nearest};
use pixeldrift::io::palette::Palette;
use std::hint::black_box;

/// Measures fill cost as the seed count grows on a fixed canvas
fn bench_nearest_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_fill_128x72");

    for seed_count in &[8, 32, 128] {
        let Ok(palette) = Palette::default_rgb() else {
            group.finish();
            return;
        };

        let mut config = NearestPipelineConfig::new(128, 72, palette);
        config.seed_count = *seed_count;
        config.scale = 1;

        group.bench_with_input(
            BenchmarkId::from_parameter(seed_count),
            &config,
            |b, config| {
                b.iter(|| black_box(synthesize_nearest(black_box(config))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_nearest_fill);
criterion_main!(benches);
