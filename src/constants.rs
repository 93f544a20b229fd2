//! DOM ids and canvas styling shared by the web front-end.
//!
//! Kept free of web-sys types so host tests can include this file directly.

// Canvases
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const VIEWER_CANVAS_ID: &str = "viewer-canvas";

// Optional JSON config block
pub const CONFIG_SCRIPT_ID: &str = "app-config";

// Upload form
pub const RGB_INPUT_ID: &str = "rgb-file";
pub const TIFF_INPUT_ID: &str = "tiff-file";
pub const RGB_SUMMARY_ID: &str = "rgb-summary";
pub const TIFF_SUMMARY_ID: &str = "tiff-summary";
pub const RGB_REMOVE_ID: &str = "rgb-remove";
pub const TIFF_REMOVE_ID: &str = "tiff-remove";
pub const CLASS_SELECT_ID: &str = "class-select";
pub const SUBMIT_ID: &str = "submit-button";

// Tabs and results
pub const UPLOAD_TAB_ID: &str = "tab-upload";
pub const RESULTS_TAB_ID: &str = "tab-results";
pub const UPLOAD_PANEL_ID: &str = "upload-panel";
pub const RESULTS_PANEL_ID: &str = "results-panel";
pub const LOADING_ID: &str = "results-loading";
pub const LOADING_TEXT_ID: &str = "results-loading-text";
pub const RESULTS_GRID_ID: &str = "results-grid";
pub const RESULTS_EMPTY_ID: &str = "results-empty";
pub const COLLAGE_BUTTON_ID: &str = "download-collage";
pub const DOWNLOAD_ALL_ID: &str = "download-all";
pub const TRY_AGAIN_ID: &str = "try-again";

// Enlarged result
pub const DETAIL_PANEL_ID: &str = "result-detail";
pub const DETAIL_IMAGE_ID: &str = "result-detail-img";
pub const DETAIL_TITLE_ID: &str = "result-detail-title";
pub const DETAIL_CLOSE_ID: &str = "result-detail-close";

// Viewer HUD
pub const GRID_TOGGLE_ID: &str = "toggle-grid";
pub const AXES_TOGGLE_ID: &str = "toggle-axes";
pub const POINT_COUNT_ID: &str = "point-count";
pub const PROCESSING_OVERLAY_ID: &str = "viewer-processing";
pub const EMPTY_OVERLAY_ID: &str = "viewer-empty";

pub const TOAST_CONTAINER_ID: &str = "toasts";

// CSS classes toggled from Rust
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const TOAST_ID_ATTR: &str = "data-toast-id";
pub const RESULT_KIND_ATTR: &str = "data-result-kind";

// Viewer styling
pub const VIEWER_BACKGROUND: &str = "#f8fafc";
pub const GRID_COLOR: &str = "#cccccc";
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const AXIS_LINE_WIDTH: f64 = 3.0;

// Hero styling
pub const HERO_FADE_FILL: &str = "rgba(248, 250, 252, 0.02)"; // trailing fade on light background
pub const HERO_STROKE_WIDTH: f64 = 1.5;
pub const TIRE_SPOKES: usize = 8;

// Slack added to toast expiry timers so the deadline has passed when they fire
pub const TOAST_EXPIRY_SLACK_MS: u32 = 50;
