//! Performance measurement for the complete chart generation pipeline

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use kaleidostitch::{GenerationRequest, generate_indices};
use std::hint::black_box;

/// Measures time to generate a smoothed stochastic design end to end
fn bench_generate_chart(c: &mut Criterion) {
    c.bench_function("generate_chart", |b| {
        b.iter(|| {
            let request = GenerationRequest {
                design: "blossom_field".to_string(),
                seed: 12345,
                color_count: 7,
                smoothing_passes: 2,
                line_bias: 4.0,
            };
            let Ok(grid) = generate_indices(&request) else {
                return;
            };
            black_box(grid.max_index());
        });
    });
}

criterion_group!(benches, bench_generate_chart);
criterion_main!(benches);
