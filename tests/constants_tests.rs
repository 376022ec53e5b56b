// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(DETAIL_SHOW_DELAY_MS > 0);
    assert!(DEEP_LINK_DELAY_MS > 0);
    assert!(LETTER_STAGGER_MS > 0);
    assert!(WORD_CYCLE_INTERVAL_MS > 0);
    assert!(HERO_SLIDE_INTERVAL_MS > 0);
    assert!(TRAIL_FADE_DELAY_MS > 0 && TRAIL_REMOVE_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn word_swap_fits_inside_cycle() {
    // the fade must finish before the next swap starts
    assert!(WORD_SWAP_FADE_MS < WORD_CYCLE_INTERVAL_MS);
    assert!(DETAIL_SHOW_DELAY_MS < DEEP_LINK_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_probabilities_are_fractions() {
    for t in [DEFAULT_REVEAL_THRESHOLD, HEADING_THRESHOLD, SIGNATURE_THRESHOLD] {
        assert!((0.0..=1.0).contains(&t));
    }
    assert!((0.0..=1.0).contains(&TRAIL_SKIP_PROBABILITY));
    assert!((0.0..=1.0).contains(&VIDEO_DEFAULT_VOLUME));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_mesh() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_DISTANCE - KNOT_RADIUS - KNOT_TUBE > CAMERA_NEAR);
    assert!(CAMERA_DISTANCE < CAMERA_FAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn mesh_colors_are_distinct_rgb() {
    assert_ne!(MESH_BASE_COLOR, ACCENT_COLOR_1);
    for c in [MESH_BASE_COLOR, ACCENT_COLOR_1, ACCENT_COLOR_2] {
        assert!(c <= 0xFF_FF_FF);
    }
}

#[test]
fn shape_ranges_are_non_empty() {
    for (min, span) in [DECO_CIRCLE_SIZE, DECO_SQUARE_SIZE, DECO_LINE_LENGTH] {
        assert!(min > 0.0 && span > 0.0);
    }
}
