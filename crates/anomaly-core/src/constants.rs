// Shared tuning constants for the point-cloud viewer and the hero animation.

// Point-cloud synthesis
pub const DEFAULT_POINT_COUNT: usize = 5000;
pub const DEFAULT_PROCESSING_DELAY_MS: u32 = 1000; // simulated TIFF processing

// Viewer camera
pub const VIEWER_CAMERA_DISTANCE: f32 = 300.0;
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_OUT_FACTOR: f32 = 0.9; // wheel scrolled down
pub const ZOOM_IN_FACTOR: f32 = 1.1; // wheel scrolled up
pub const DRAG_RADIANS_PER_PIXEL: f32 = 0.01;

// Viewer overlays
pub const GRID_CELL_SIZE: f32 = 50.0;
pub const GRID_HALF_EXTENT: i32 = 10; // cells on each side of the origin
pub const AXIS_LENGTH: f32 = 100.0;
pub const POINT_RADIUS_PER_SCALE: f32 = 2.0;
pub const POINT_RADIUS_MIN: f32 = 1.0;

// Hero scene population
pub const HERO_OBJECT_COUNT: usize = 40;
pub const HERO_MIN_SPACING: f32 = 100.0;
pub const HERO_PLACEMENT_ATTEMPTS: usize = 50;

// Hero projection
pub const HERO_CAMERA_DISTANCE: f32 = 1200.0;
pub const HERO_SCREEN_DAMPING: f32 = 0.3;
pub const HERO_CULL_SCALE: f32 = 0.2; // at or below this, too distant to draw

// Hero motion (per frame)
pub const HERO_TIME_STEP: f32 = 0.008;
pub const HERO_ORBIT_RATE: f32 = 0.1; // global x/z rotation angle per unit of time
pub const HERO_PULSE_STEP: f32 = 0.02;

// Hero respawn envelope: |x|, |y|, |z| beyond these sends an object back to an edge
pub const HERO_BOUNDS: [f32; 3] = [1200.0, 800.0, 500.0];

// Hero opacity and glow
pub const HERO_OPACITY_MIN: f32 = 0.1;
pub const HERO_OPACITY_MAX: f32 = 0.4;
pub const HERO_OPACITY_PER_SCALE: f32 = 0.5;
pub const HERO_PULSE_BASE: f32 = 0.7;
pub const HERO_PULSE_AMPLITUDE: f32 = 0.3;
pub const HERO_GLOW_BLUR: f32 = 15.0;

// Notifications and loading feedback
pub const TOAST_LIFETIME_MS: u32 = 5000;
pub const LOADING_MESSAGE_INTERVAL_MS: u64 = 1500;
