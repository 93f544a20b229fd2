//! Synthetic point clouds standing in for decoded TIFF depth data.
//!
//! The uploaded file's bytes are never read. The file name picks one of three
//! fixed shapes and every call draws a fresh random sample of that shape.

use crate::color::Color;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Which synthetic object a file name maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Chair,
    Candy,
    Industrial,
}

impl CloudShape {
    /// Case-insensitive substring match on the file name; anything that is
    /// neither a chair nor a candy is treated as an industrial part.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("chair") {
            CloudShape::Chair
        } else if lower.contains("candy") || lower.contains("lollipop") {
            CloudShape::Candy
        } else {
            CloudShape::Industrial
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub color: Color,
}

/// An immutable point set. Replaced wholesale, never edited.
#[derive(Clone, Debug)]
pub struct PointCloud {
    shape: CloudShape,
    points: Vec<Point>,
}

impl PointCloud {
    pub fn shape(&self) -> CloudShape {
        self.shape
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// Region shares in per-mille of the target count.
const CHAIR_SEAT: usize = 300;
const CHAIR_BACK: usize = 400;
const CHAIR_LEG: usize = 75;
const CANDY_HEAD: usize = 700;
const CANDY_STICK: usize = 300;
const INDUSTRIAL_SHELL: usize = 600;
const INDUSTRIAL_HOLE: usize = 50;
const INDUSTRIAL_DETAIL: usize = 300;

pub const CHAIR_LEG_CENTERS: [[f32; 2]; 4] = [[-60.0, -60.0], [-60.0, 60.0], [60.0, -60.0], [60.0, 60.0]];
pub const CANDY_HEAD_CENTER: Vec3 = Vec3::new(0.0, 100.0, 0.0);
pub const INDUSTRIAL_HOLE_COUNT: usize = 6;

/// Points in a region: rounded up, so `count = 5000` splits exactly.
#[inline]
pub fn share(count: usize, per_mille: usize) -> usize {
    (count * per_mille).div_ceil(1000)
}

/// `(u - 0.5) * span` for a uniform `u` in [0, 1).
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[inline]
fn between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

pub fn synthesize<R: Rng + ?Sized>(shape: CloudShape, count: usize, rng: &mut R) -> PointCloud {
    let mut points = Vec::with_capacity(count + 8);
    match shape {
        CloudShape::Chair => chair(&mut points, count, rng),
        CloudShape::Candy => candy(&mut points, count, rng),
        CloudShape::Industrial => industrial(&mut points, count, rng),
    }
    log::debug!("[cloud] synthesized {:?} with {} points", shape, points.len());
    PointCloud { shape, points }
}

fn chair<R: Rng + ?Sized>(points: &mut Vec<Point>, count: usize, rng: &mut R) {
    // seat slab
    for _ in 0..share(count, CHAIR_SEAT) {
        points.push(Point {
            position: Vec3::new(centered(rng, 150.0), between(rng, 0.0, 20.0), centered(rng, 150.0)),
            color: Color::hsl(between(rng, 30.0, 50.0), 70.0, 50.0),
        });
    }
    // back slab, pushed towards -z
    for _ in 0..share(count, CHAIR_BACK) {
        points.push(Point {
            position: Vec3::new(centered(rng, 120.0), between(rng, 20.0, 170.0), between(rng, -50.0, -30.0)),
            color: Color::hsl(between(rng, 30.0, 50.0), 70.0, 50.0),
        });
    }
    for [leg_x, leg_z] in CHAIR_LEG_CENTERS {
        for _ in 0..share(count, CHAIR_LEG) {
            points.push(Point {
                position: Vec3::new(
                    leg_x + centered(rng, 10.0),
                    between(rng, 0.0, 80.0),
                    leg_z + centered(rng, 10.0),
                ),
                color: Color::hsl(between(rng, 20.0, 40.0), 60.0, 40.0),
            });
        }
    }
}

fn candy<R: Rng + ?Sized>(points: &mut Vec<Point>, count: usize, rng: &mut R) {
    for _ in 0..share(count, CANDY_HEAD) {
        let theta = rng.gen::<f32>() * TAU;
        let phi = rng.gen::<f32>() * PI;
        let radius = between(rng, 80.0, 100.0);
        let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
        points.push(Point {
            position: CANDY_HEAD_CENTER + dir * radius,
            color: Color::hsl(rng.gen::<f32>() * 360.0, 80.0, 60.0),
        });
    }
    for _ in 0..share(count, CANDY_STICK) {
        points.push(Point {
            position: Vec3::new(centered(rng, 10.0), between(rng, -100.0, 100.0), centered(rng, 10.0)),
            color: Color::hsl(45.0, 20.0, 80.0),
        });
    }
}

fn industrial<R: Rng + ?Sized>(points: &mut Vec<Point>, count: usize, rng: &mut R) {
    for _ in 0..share(count, INDUSTRIAL_SHELL) {
        let theta = rng.gen::<f32>() * TAU;
        let radius = between(rng, 70.0, 80.0);
        points.push(Point {
            position: Vec3::new(radius * theta.cos(), centered(rng, 150.0), radius * theta.sin()),
            color: Color::hsl(220.0, 20.0, between(rng, 60.0, 80.0)),
        });
    }
    for hole in 0..INDUSTRIAL_HOLE_COUNT {
        let theta = hole as f32 * PI / 3.0;
        for _ in 0..share(count, INDUSTRIAL_HOLE) {
            let r = between(rng, 20.0, 30.0);
            let t = theta + centered(rng, 0.5);
            points.push(Point {
                position: Vec3::new(
                    70.0 * theta.cos() + r * t.cos(),
                    centered(rng, 30.0),
                    70.0 * theta.sin() + r * t.sin(),
                ),
                color: Color::hsl(220.0, 30.0, 30.0),
            });
        }
    }
    // outer skin for surface detail
    for _ in 0..share(count, INDUSTRIAL_DETAIL) {
        let theta = rng.gen::<f32>() * TAU;
        let radius = between(rng, 80.0, 85.0);
        points.push(Point {
            position: Vec3::new(radius * theta.cos(), centered(rng, 150.0), radius * theta.sin()),
            color: Color::hsl(220.0, 25.0, between(rng, 70.0, 80.0)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_split_default_count_exactly() {
        assert_eq!(share(5000, CHAIR_SEAT), 1500);
        assert_eq!(share(5000, CHAIR_LEG), 375);
        assert_eq!(share(5000, INDUSTRIAL_HOLE), 250);
        assert_eq!(share(10, CHAIR_LEG), 1); // rounds up
    }

    #[test]
    fn file_name_dispatch_is_case_insensitive() {
        assert_eq!(CloudShape::from_file_name("Office_CHAIR_03.tiff"), CloudShape::Chair);
        assert_eq!(CloudShape::from_file_name("CandyCane.tif"), CloudShape::Candy);
        assert_eq!(CloudShape::from_file_name("my_LolliPop.tiff"), CloudShape::Candy);
        assert_eq!(CloudShape::from_file_name("cable_gland_000.tiff"), CloudShape::Industrial);
        assert_eq!(CloudShape::from_file_name(""), CloudShape::Industrial);
    }

    #[test]
    fn chair_wins_over_candy() {
        assert_eq!(CloudShape::from_file_name("candy_chair.tiff"), CloudShape::Chair);
    }
}
