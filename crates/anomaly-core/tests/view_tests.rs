// Integration tests for the viewer's orbit/zoom state and projection.

use anomaly_core::constants::{ZOOM_MAX, ZOOM_MIN};
use anomaly_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn zoom_saturates_in_both_directions() {
    let mut view = ViewState::default();
    for _ in 0..200 {
        view.wheel(120.0);
    }
    assert!((view.zoom - ZOOM_MIN).abs() < 1e-6);
    for _ in 0..200 {
        view.wheel(-120.0);
    }
    assert!((view.zoom - ZOOM_MAX).abs() < 1e-6);
}

#[test]
fn zoom_stays_bounded_under_random_wheel_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut view = ViewState::default();
    for _ in 0..10_000 {
        view.wheel(rng.gen_range(-500.0..500.0));
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&view.zoom));
    }
}

#[test]
fn drag_only_rotates_while_armed() {
    let mut view = ViewState::default();
    assert!(!view.pointer_move(Vec2::new(10.0, 10.0)));
    view.pointer_down(Vec2::new(0.0, 0.0));
    assert!(view.pointer_move(Vec2::new(100.0, 50.0)));
    assert!((view.yaw - 1.0).abs() < 1e-6);
    assert!((view.pitch - 0.5).abs() < 1e-6);
    view.pointer_up();
    view.pointer_move(Vec2::new(300.0, 300.0));
    assert!((view.yaw - 1.0).abs() < 1e-6);
}

#[test]
fn yaw_is_applied_before_pitch() {
    let mut view = ViewState::default();
    view.yaw = std::f32::consts::FRAC_PI_2;
    view.pitch = std::f32::consts::FRAC_PI_2;
    // yaw swings +x onto +z, then pitch lifts +z onto -y
    let r = view.rotate(Vec3::new(100.0, 0.0, 0.0));
    assert!(r.abs_diff_eq(Vec3::new(0.0, -100.0, 0.0), 1e-3), "{r:?}");

    let p = view.project(Vec3::new(100.0, 0.0, 0.0), Viewport::new(640.0, 480.0));
    assert!((p.x - 320.0).abs() < 1e-3);
    assert!((p.y - 340.0).abs() < 1e-3);
    assert!((p.scale - 1.0).abs() < 1e-5);
}

#[test]
fn oblique_view_matches_hand_computed_projection() {
    let mut view = ViewState::default();
    view.yaw = 0.3;
    view.pitch = 0.4;
    view.zoom = 1.5;
    let r = view.rotate(Vec3::new(10.0, 20.0, 30.0));
    assert!(r.abs_diff_eq(Vec3::new(0.68776, 6.10964, 36.90798), 1e-3), "{r:?}");

    let p = view.project(Vec3::new(10.0, 20.0, 30.0), Viewport::new(640.0, 480.0));
    assert!((p.x - 320.91862).abs() < 1e-3);
    assert!((p.y - 231.83949).abs() < 1e-3);
    assert!((p.scale - 1.33568).abs() < 1e-4);
}

#[test]
fn nearer_points_have_larger_scale_and_sort_first() {
    let view = ViewState::default();
    let vp = Viewport::new(640.0, 480.0);
    let color = Color::hsl(0.0, 0.0, 0.0);
    let points = [
        Point { position: Vec3::new(0.0, 0.0, 100.0), color },
        Point { position: Vec3::new(0.0, 0.0, -100.0), color },
    ];
    let sorted = view.depth_sorted(&points, vp);
    assert_eq!(sorted[0].0, 1);
    assert!(sorted[0].1.scale > sorted[1].1.scale);
}

#[test]
fn grid_has_two_edges_per_cell_and_three_axes() {
    let view = ViewState::default();
    let vp = Viewport::new(640.0, 480.0);
    assert_eq!(view.grid_segments(vp).len(), 21 * 21 * 2);
    let axes = view.axis_segments(vp);
    assert_eq!(axes.map(|(a, _)| a), Axis::ALL);
    // +x axis points right at rest
    assert!(axes[0].1.to.x > axes[0].1.from.x);
}

#[test]
fn toggles_report_new_state() {
    let mut view = ViewState::default();
    assert!(!view.toggle_grid());
    assert!(view.toggle_grid());
    assert!(!view.toggle_axes());
}
