//! Numeric pins for the shader arithmetic. These mirror the GLSL expressions
//! in `src/shaders.rs`; a change to either side that alters the rendered
//! output shows up here without needing a GPU.

use vfx_wasm::shaders::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn zoom_factor_is_085_at_center() {
    assert!(approx(zoom_factor(0.0), 0.85));
}

#[test]
fn zoom_factor_is_105_at_unit_corner() {
    // At a corner of a squared viewport l = 1, and l * 1.2 saturates the
    // smoothstep, so the full 0.2 swing applies.
    assert!(approx(zoom_factor(1.0), 1.05));
}

#[test]
fn zoom_fixes_the_center() {
    for t in [0.85, 1.0, 1.05] {
        let (u, v) = zoom((0.5, 0.5), t);
        assert!(approx(u, 0.5) && approx(v, 0.5));
    }
}

#[test]
fn centered_coord_hits_unit_corner_on_square_viewport() {
    let p = centered_coord((1.0, 1.0), (800.0, 800.0));
    assert!(approx(chebyshev(p), 1.0));
}

#[test]
fn centered_coord_is_aspect_corrected() {
    // On a 2:1 viewport the horizontal extent doubles.
    let p = centered_coord((1.0, 0.5), (1600.0, 800.0));
    assert!(approx(p.0, 2.0));
    assert!(approx(p.1, 0.0));
}

#[test]
fn chebyshev_takes_the_larger_axis() {
    assert!(approx(chebyshev((0.3, -0.8)), 0.8));
    assert!(approx(chebyshev((-0.9, 0.1)), 0.9));
}

#[test]
fn element_alpha_is_3_for_opaque_center_texel() {
    // Current (possibly unintended) behavior: the three masked channel
    // alphas are summed and divided by 1, not averaged. Pinned as shipped.
    assert!(approx(element_alpha((0.5, 0.5), 1.0), 3.0));
}

#[test]
fn edge_mask_is_zero_on_the_uv_boundary() {
    assert!(approx(edge_mask((0.0, 0.5)), 0.0));
    assert!(approx(edge_mask((1.0, 0.5)), 0.0));
    assert!(approx(edge_mask((0.5, 0.0)), 0.0));
    assert!(approx(edge_mask((0.5, 1.0)), 0.0));
}

#[test]
fn edge_mask_is_one_over_the_interior() {
    for uv in [(0.5, 0.5), (0.1, 0.9), (0.45, 0.2)] {
        assert!(approx(edge_mask(uv), 1.0), "uv = {uv:?}");
    }
}

#[test]
fn edge_mask_eases_inside_the_boundary_band() {
    // Half-way into the 0.001-wide band the Hermite curve gives 3t^2 - 2t^3
    // at t = 0.5, i.e. 0.5.
    let a = edge_mask((0.0005, 0.5));
    assert!(approx(a, 0.5), "a = {a}");
}

#[test]
fn decoration_vanishes_at_the_edge() {
    assert!(approx(edge_attenuation(1.0), 0.0));
    assert!(approx(edge_attenuation(1.5), 0.0));
    assert!(approx(edge_attenuation(0.0), 1.0));
}

#[test]
fn grid_term_highlights_grid_lines_only() {
    // Exactly on a 1/20 grid line the fract is 0 and the highlight is full.
    assert!(approx(grid_term((0.05, 0.3)), 0.1));
    // Mid-cell, both fracts are far above the 0.01 band.
    assert!(approx(grid_term((0.025, 0.375)), 0.0));
}

#[test]
fn scanline_term_is_bounded() {
    for i in 0..200 {
        let y = i as f32 / 200.0;
        let s = scanline_term(y, 1080.0, 1.7);
        assert!(s.abs() <= 0.05 + 1e-6, "y = {y}, s = {s}");
    }
}

#[test]
fn hash_noise_stays_in_unit_range() {
    for i in 0..100 {
        let t = i as f32 * 0.37;
        let n = hash_noise((t.sin(), t.cos(), t));
        assert!((0.0..1.0).contains(&n), "t = {t}, n = {n}");
    }
}

#[test]
fn vignette_brightens_center_and_darkens_edge() {
    assert!(approx(vignette(0.0), 1.2));
    assert!(approx(vignette(1.0), 0.7));
}

#[test]
fn chroma_offset_is_fixed_in_uv_space() {
    // The aberration width intentionally scales with output resolution.
    assert!(approx(CHROMA_OFFSET, 0.0015));
}
