//! Performance measurement for chart rendering

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use kaleidostitch::{GenerationRequest, RenderOptions, generate_indices, render_image};
use std::hint::black_box;

/// Measures time to paint a generated grid at default chart geometry
fn bench_render_chart(c: &mut Criterion) {
    let request = GenerationRequest {
        design: "rings_spokes".to_string(),
        seed: 12345,
        ..Default::default()
    };
    let Ok(grid) = generate_indices(&request) else {
        return;
    };

    c.bench_function("render_chart", |b| {
        b.iter(|| {
            let Ok(img) = render_image(&grid, "jewel_bazaar", RenderOptions::default()) else {
                return;
            };
            black_box(img.width());
        });
    });
}

criterion_group!(benches, bench_render_chart);
criterion_main!(benches);
