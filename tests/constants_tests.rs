// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_unique_and_non_empty() {
    let ids = [
        CANVAS_ID,
        WELCOME_OVERLAY_ID,
        WELCOME_START_ID,
        WELCOME_CPF_ID,
        PANEL_ID,
        CLOSING_OVERLAY_ID,
        CLOSING_OK_ID,
        CLOSING_TITLE_ID,
        CLOSING_BODY_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn ids_match_index_html() {
    let html = include_str!("../index.html");
    for id in [
        CANVAS_ID,
        WELCOME_OVERLAY_ID,
        WELCOME_START_ID,
        WELCOME_CPF_ID,
        PANEL_ID,
        CLOSING_OVERLAY_ID,
        CLOSING_OK_ID,
        CLOSING_TITLE_ID,
        CLOSING_BODY_ID,
    ] {
        assert!(html.contains(&format!("id=\"{}\"", id)), "index.html lacks #{}", id);
    }
    assert!(html.contains(&format!(".{} {{", HIDDEN_CLASS)));
}

#[test]
fn model_url_points_at_a_glb() {
    assert!(MODEL_URL.starts_with('/'));
    assert!(MODEL_URL.ends_with(".glb"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_is_within_reasonable_bounds() {
    assert!(HEMI_INTENSITY > 0.0);
    assert!(KEY_LIGHT_INTENSITY > 0.0);
    assert!(glam::Vec3::from_array(KEY_LIGHT_POSITION).length() > 0.0);
    for c in HEMI_SKY_COLOR.iter().chain(HEMI_GROUND_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}
