// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as scene;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dpr_range_is_sane() {
    assert!(DPR_MIN >= 1.0);
    assert!(DPR_MAX >= DPR_MIN);
    assert!(DPR_MAX <= 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_stack_in_order() {
    assert!(Z_CANVAS < Z_HERO_TEXT);
    assert!(Z_HERO_TEXT < Z_GRADIENT);
    assert!(Z_GRADIENT < Z_CHROME);
}

#[test]
fn nav_links_point_at_anchors() {
    for (label, href) in NAV_LINKS {
        assert!(!label.is_empty());
        assert!(href.starts_with('#'), "{href}");
    }
    assert_eq!(FOOTER_LEFT.len(), 2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_have_logical_relationships() {
    // the camera must see the whole spawn cube between its clip planes
    let half = scene::SPAWN_SPREAD / 2.0;
    assert!(scene::CAMERA_Z - half >= scene::CAMERA_NEAR);
    assert!(scene::CAMERA_Z + half <= scene::CAMERA_FAR);

    assert!(scene::MAX_FRAME_DT > 0.0);
    assert!(scene::COLOR_EPSILON > 0.0 && scene::COLOR_SMOOTH_TIME > 0.0);
    assert!(scene::ATTRACTION > 0.0 && scene::ATTRACTION < 1.0);
    assert!(scene::ACCENT_INTERVAL_SECS > 0.0);
}
