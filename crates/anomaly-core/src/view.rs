//! Orbit/zoom view state for the point-cloud viewer and its projection math.
//!
//! Points are rotated around Y (yaw) first, then around X (pitch), then
//! perspective-divided with a fixed camera distance and scaled by zoom.

use crate::cloud::Point;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Current canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Screen position plus the perspective scale it was projected with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Projected,
    pub to: Projected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn direction(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn css_color(self) -> &'static str {
        match self {
            Axis::X => "#ef4444", // red
            Axis::Y => "#22c55e", // green
            Axis::Z => "#3b82f6", // blue
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Rotation around X in radians, driven by vertical drag.
    pub pitch: f32,
    /// Rotation around Y in radians, driven by horizontal drag.
    pub yaw: f32,
    pub zoom: f32,
    pub show_grid: bool,
    pub show_axes: bool,
    pub drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            zoom: 1.0,
            show_grid: true,
            show_axes: true,
            drag: DragState::default(),
        }
    }
}

impl ViewState {
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag = DragState {
            active: true,
            last: pos,
        };
    }

    /// Orbit by the pointer delta while a drag is armed. Returns whether the
    /// rotation changed.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        if !self.drag.active {
            return false;
        }
        let delta = pos - self.drag.last;
        self.pitch += delta.y * DRAG_RADIANS_PER_PIXEL;
        self.yaw += delta.x * DRAG_RADIANS_PER_PIXEL;
        self.drag.last = pos;
        delta != Vec2::ZERO
    }

    pub fn pointer_up(&mut self) {
        self.drag.active = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Positive `delta_y` (scroll down) zooms out, anything else zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }

    pub fn toggle_axes(&mut self) -> bool {
        self.show_axes = !self.show_axes;
        self.show_axes
    }

    /// Rotate into view space: yaw around Y, then pitch around X.
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let x1 = p.x * cos_y - p.z * sin_y;
        let z1 = p.x * sin_y + p.z * cos_y;

        let (sin_x, cos_x) = self.pitch.sin_cos();
        let y1 = p.y * cos_x - z1 * sin_x;
        let z2 = p.y * sin_x + z1 * cos_x;

        Vec3::new(x1, y1, z2)
    }

    pub fn project(&self, p: Vec3, viewport: Viewport) -> Projected {
        let r = self.rotate(p);
        let scale = VIEWER_CAMERA_DISTANCE / (VIEWER_CAMERA_DISTANCE + r.z) * self.zoom;
        let c = viewport.center();
        Projected {
            x: c.x + r.x * scale,
            // screen y grows downwards
            y: c.y - r.y * scale,
            scale,
        }
    }

    /// Project every point and order them by descending scale. The returned
    /// indices refer back into `points`.
    pub fn depth_sorted(&self, points: &[Point], viewport: Viewport) -> Vec<(usize, Projected)> {
        let mut out: Vec<(usize, Projected)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, self.project(p.position, viewport)))
            .collect();
        out.sort_by(|a, b| b.1.scale.total_cmp(&a.1.scale));
        out
    }

    /// Two leading edges of every cell of the XZ-plane lattice.
    pub fn grid_segments(&self, viewport: Viewport) -> Vec<Segment> {
        let n = GRID_HALF_EXTENT;
        let side = (2 * n + 1) as usize;
        let mut segments = Vec::with_capacity(side * side * 2);
        for i in -n..=n {
            for j in -n..=n {
                let x1 = i as f32 * GRID_CELL_SIZE;
                let z1 = j as f32 * GRID_CELL_SIZE;
                let x2 = (i + 1) as f32 * GRID_CELL_SIZE;
                let z2 = (j + 1) as f32 * GRID_CELL_SIZE;
                let corner = self.project(Vec3::new(x1, 0.0, z1), viewport);
                segments.push(Segment {
                    from: corner,
                    to: self.project(Vec3::new(x2, 0.0, z1), viewport),
                });
                segments.push(Segment {
                    from: corner,
                    to: self.project(Vec3::new(x1, 0.0, z2), viewport),
                });
            }
        }
        segments
    }

    pub fn axis_segments(&self, viewport: Viewport) -> [(Axis, Segment); 3] {
        let origin = self.project(Vec3::ZERO, viewport);
        Axis::ALL.map(|axis| {
            (
                axis,
                Segment {
                    from: origin,
                    to: self.project(axis.direction() * AXIS_LENGTH, viewport),
                },
            )
        })
    }
}

#[inline]
pub fn point_radius(scale: f32) -> f32 {
    (scale * POINT_RADIUS_PER_SCALE).max(POINT_RADIUS_MIN)
}
