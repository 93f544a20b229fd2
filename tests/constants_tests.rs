// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_and_css_safe() {
    let ids = [
        HERO_CANVAS_ID,
        VIEWER_CANVAS_ID,
        CONFIG_SCRIPT_ID,
        RGB_INPUT_ID,
        TIFF_INPUT_ID,
        RGB_SUMMARY_ID,
        TIFF_SUMMARY_ID,
        RGB_REMOVE_ID,
        TIFF_REMOVE_ID,
        CLASS_SELECT_ID,
        SUBMIT_ID,
        UPLOAD_TAB_ID,
        RESULTS_TAB_ID,
        UPLOAD_PANEL_ID,
        RESULTS_PANEL_ID,
        LOADING_ID,
        LOADING_TEXT_ID,
        RESULTS_GRID_ID,
        RESULTS_EMPTY_ID,
        COLLAGE_BUTTON_ID,
        DOWNLOAD_ALL_ID,
        TRY_AGAIN_ID,
        DETAIL_PANEL_ID,
        DETAIL_IMAGE_ID,
        DETAIL_TITLE_ID,
        DETAIL_CLOSE_ID,
        GRID_TOGGLE_ID,
        AXES_TOGGLE_ID,
        POINT_COUNT_ID,
        PROCESSING_OVERLAY_ID,
        EMPTY_OVERLAY_ID,
        TOAST_CONTAINER_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    for id in ids {
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{id}");
    }
}

#[test]
fn viewer_palette_matches_page_theme() {
    assert_eq!(VIEWER_BACKGROUND, "#f8fafc");
    assert_eq!(GRID_COLOR, "#cccccc");
    assert!(HERO_FADE_FILL.starts_with("rgba(248, 250, 252,"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn line_widths_are_positive() {
    assert!(GRID_LINE_WIDTH > 0.0);
    assert!(AXIS_LINE_WIDTH > GRID_LINE_WIDTH);
    assert!(HERO_STROKE_WIDTH > 0.0);
    assert!(TIRE_SPOKES > 0);
}

#[test]
fn delegation_attributes_are_data_attributes() {
    assert!(TOAST_ID_ATTR.starts_with("data-"));
    assert!(RESULT_KIND_ATTR.starts_with("data-"));
}
