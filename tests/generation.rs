//! Validates symmetry, determinism, and parameter contracts of the generation pipeline

use kaleidostitch::{
    ChartError, GenerationRequest, IndexGrid, generate_indices, list_designs, list_palettes,
    smoothing_sequence,
};

fn request(design: &str, seed: u64) -> GenerationRequest {
    GenerationRequest {
        design: design.to_string(),
        seed,
        ..Default::default()
    }
}

fn assert_dihedral_symmetric(grid: &IndexGrid, context: &str) {
    let last = grid.size() - 1;
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let value = grid.get(x, y);
            assert_eq!(
                value,
                grid.get(last - x, y),
                "{context}: horizontal reflection differs at ({x},{y})"
            );
            assert_eq!(
                value,
                grid.get(x, last - y),
                "{context}: vertical reflection differs at ({x},{y})"
            );
            assert_eq!(
                value,
                grid.get(y, x),
                "{context}: diagonal reflection differs at ({x},{y})"
            );
        }
    }
}

#[test]
fn test_every_design_is_dihedral_symmetric() {
    // The three checked reflections generate the full group of order eight
    for design in list_designs() {
        for seed in [0u64, 123, 9001] {
            let mut req = request(design, seed);
            req.smoothing_passes = 1;
            req.line_bias = 3.0;
            let grid = generate_indices(&req).expect("generation failed");
            assert_dihedral_symmetric(&grid, &format!("{design} seed {seed}"));
        }
    }
}

#[test]
fn test_rings_spokes_scenario() {
    let req = GenerationRequest {
        design: "rings_spokes".to_string(),
        seed: 123,
        color_count: 7,
        smoothing_passes: 0,
        line_bias: 6.0,
    };
    let grid = generate_indices(&req).expect("generation failed");
    assert_eq!(grid.size(), 35);
    assert_eq!(grid.get(0, 17), grid.get(34, 17));
    assert_eq!(grid.get(0, 17), grid.get(17, 0));
    assert_eq!(grid.get(0, 17), grid.get(17, 34));
    for y in 0..35 {
        for x in 0..35 {
            assert_eq!(grid.get(x, y), grid.get(y, x));
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for design in ["rings_spokes", "blossom_field"] {
        let mut req = request(design, 77);
        req.smoothing_passes = 2;
        req.line_bias = 5.0;
        let first = generate_indices(&req).expect("generation failed");
        let second = generate_indices(&req).expect("generation failed");
        assert_eq!(first, second);
    }
}

#[test]
fn test_indices_respect_color_count() {
    for design in list_designs() {
        for color_count in 3..=7 {
            let mut req = request(design, 11);
            req.color_count = color_count;
            let grid = generate_indices(&req).expect("generation failed");
            assert!(
                (grid.max_index() as usize) < color_count,
                "{design} with {color_count} colors produced index {}",
                grid.max_index()
            );
        }
    }
}

#[test]
fn test_three_color_chart_uses_three_entry_palette() {
    let mut req = request("starburst", 4);
    req.color_count = 3;
    let grid = generate_indices(&req).expect("generation failed");
    assert!(grid.max_index() <= 2);

    let palette = kaleidostitch::palette::find("jewel_bazaar").expect("registered palette");
    let slice = palette.slice(3).expect("palette slice");
    assert_eq!(slice.len(), 3);
}

#[test]
fn test_unknown_design_is_rejected() {
    let req = request("not_a_design", 0);
    match generate_indices(&req) {
        Err(ChartError::UnknownDesign { name }) => assert_eq!(name, "not_a_design"),
        other => unreachable!("Expected UnknownDesign, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_parameters_are_rejected() {
    let mut req = request("rings_spokes", 0);
    req.color_count = 2;
    assert!(matches!(
        generate_indices(&req),
        Err(ChartError::InvalidParameter { .. })
    ));

    req.color_count = 8;
    assert!(matches!(
        generate_indices(&req),
        Err(ChartError::InvalidParameter { .. })
    ));

    let mut req = request("rings_spokes", 0);
    req.line_bias = -1.0;
    assert!(matches!(
        generate_indices(&req),
        Err(ChartError::InvalidParameter { .. })
    ));

    let mut req = request("rings_spokes", 0);
    req.smoothing_passes = 99;
    assert!(matches!(
        generate_indices(&req),
        Err(ChartError::InvalidParameter { .. })
    ));
}

#[test]
fn test_smoothing_never_reduces_contiguity() {
    let mut previous = 0.0f64;
    for passes in 0..=4 {
        let mut req = request("blossom_field", 5);
        req.smoothing_passes = passes;
        let grid = generate_indices(&req).expect("generation failed");
        let agreement = grid.neighbor_agreement();
        assert!(
            agreement >= previous - 0.01,
            "agreement dropped from {previous} to {agreement} at {passes} passes"
        );
        previous = agreement;
    }

    // Strong smoothing must beat the unsmoothed chart outright
    let unsmoothed = generate_indices(&request("blossom_field", 5)).expect("generation failed");
    let mut req = request("blossom_field", 5);
    req.smoothing_passes = 4;
    let smoothed = generate_indices(&req).expect("generation failed");
    assert!(smoothed.neighbor_agreement() >= unsmoothed.neighbor_agreement());
}

#[test]
fn test_smoothing_sequence_stages() {
    let mut req = request("ripple_pond", 21);
    req.smoothing_passes = 3;
    let stages = smoothing_sequence(&req).expect("generation failed");
    assert_eq!(stages.len(), 4);

    let mut unsmoothed = req.clone();
    unsmoothed.smoothing_passes = 0;
    assert_eq!(
        stages.first(),
        Some(&generate_indices(&unsmoothed).expect("generation failed"))
    );
    assert_eq!(
        stages.last(),
        Some(&generate_indices(&req).expect("generation failed"))
    );
}

#[test]
fn test_diamond_boundary_is_background() {
    for design in list_designs() {
        let grid = generate_indices(&request(design, 8)).expect("generation failed");
        // Square corners fold to (17,17), outside the diamond mask
        assert_eq!(grid.get(0, 0), Some(0), "{design} corner not background");
        assert_eq!(grid.get(34, 0), Some(0));
        assert_eq!(grid.get(0, 34), Some(0));
        assert_eq!(grid.get(34, 34), Some(0));
    }
}

#[test]
fn test_registries_are_ordered_and_complete() {
    let designs = list_designs();
    assert_eq!(designs.len(), 12);
    assert_eq!(designs.first().copied(), Some("rings_spokes"));

    let palettes = list_palettes();
    assert_eq!(palettes.len(), 5);
    assert_eq!(palettes.first().copied(), Some("jewel_bazaar"));
}
