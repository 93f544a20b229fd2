//! Decorative hero animation: a fixed set of floating shapes that drift,
//! spin and pulse, projected with a simple perspective divide.
//!
//! The scene owns no drawing code. Each [`HeroScene::step`] advances the
//! simulation by one frame and emits the sprites that are close enough to
//! be drawn; the web frontend turns those into canvas calls.

use crate::color::{Palette, PALETTES};
use crate::constants::*;
use crate::view::Viewport;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Chair,
    Candy,
    Industrial,
    Bagel,
    Tire,
    Sphere,
    Cube,
    Pyramid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Chair,
        ShapeKind::Candy,
        ShapeKind::Industrial,
        ShapeKind::Bagel,
        ShapeKind::Tire,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Pyramid,
    ];
}

/// Axis-aligned box objects are sampled from, `[min, max)` per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
}

impl Envelope {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(pick(rng, self.x), pick(rng, self.y), pick(rng, self.z))
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let within = |v: f32, (lo, hi): (f32, f32)| v >= lo && v <= hi;
        within(p.x, self.x) && within(p.y, self.y) && within(p.z, self.z)
    }
}

/// Which strip outside the central exclusion zone an object enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Right,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
    ];

    /// Placement used when the scene is first populated.
    pub fn initial_envelope(self) -> Envelope {
        let z = (-500.0, 500.0);
        match self {
            SpawnEdge::Left => Envelope {
                x: (-1000.0, -700.0),
                y: (-600.0, 600.0),
                z,
            },
            SpawnEdge::Right => Envelope {
                x: (700.0, 1000.0),
                y: (-600.0, 600.0),
                z,
            },
            SpawnEdge::Top => Envelope {
                x: (-700.0, 700.0),
                y: (-600.0, -400.0),
                z,
            },
            SpawnEdge::Bottom => Envelope {
                x: (-700.0, 700.0),
                y: (400.0, 600.0),
                z,
            },
        }
    }

    /// Tighter placement used when a drifting object is sent back.
    pub fn respawn_envelope(self) -> Envelope {
        let z = (-150.0, 150.0);
        match self {
            SpawnEdge::Left => Envelope {
                x: (-1000.0, -800.0),
                y: (-300.0, 300.0),
                z,
            },
            SpawnEdge::Right => Envelope {
                x: (800.0, 1000.0),
                y: (-300.0, 300.0),
                z,
            },
            SpawnEdge::Top => Envelope {
                x: (-400.0, 400.0),
                y: (-600.0, -500.0),
                z,
            },
            SpawnEdge::Bottom => Envelope {
                x: (-400.0, 400.0),
                y: (500.0, 600.0),
                z,
            },
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorObject {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub shape: ShapeKind,
    pub size: f32,
    pub palette: Palette,
    /// Base glow strength in [0, 1].
    pub glow: f32,
    pub pulse_phase: f32,
    pub edge: SpawnEdge,
}

impl DecorObject {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let edge = SpawnEdge::random(rng);
        Self {
            position: edge.initial_envelope().sample(rng),
            velocity: Vec3::new(centered(rng, 0.3), centered(rng, 0.3), centered(rng, 0.3)),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: centered(rng, 0.02),
            shape: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
            size: 12.0 + rng.gen::<f32>() * 8.0,
            palette: PALETTES[rng.gen_range(0..PALETTES.len())],
            glow: 0.3 + rng.gen::<f32>() * 0.7,
            pulse_phase: rng.gen::<f32>() * TAU,
            edge,
        }
    }

    pub fn out_of_bounds(&self) -> bool {
        let [bx, by, bz] = HERO_BOUNDS;
        self.position.x.abs() > bx || self.position.y.abs() > by || self.position.z.abs() > bz
    }
}

/// One object as it should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub shape: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub opacity: f32,
    /// Glow strength after the pulse is applied.
    pub glow: f32,
    pub palette: Palette,
}

impl Sprite {
    pub fn glow_blur(&self) -> f32 {
        HERO_GLOW_BLUR * self.glow
    }

    pub fn glow_alpha(&self) -> f32 {
        self.glow * self.opacity
    }
}

/// `clamp(scale * 0.5, 0.1, 0.4)`.
#[inline]
pub fn base_opacity(scale: f32) -> f32 {
    (scale * HERO_OPACITY_PER_SCALE).clamp(HERO_OPACITY_MIN, HERO_OPACITY_MAX)
}

/// `0.7 + 0.3 * sin(phase)`.
#[inline]
pub fn pulse_factor(phase: f32) -> f32 {
    HERO_PULSE_BASE + HERO_PULSE_AMPLITUDE * phase.sin()
}

pub struct HeroScene {
    objects: Vec<DecorObject>,
    time: f32,
    rng: StdRng,
}

impl HeroScene {
    /// Populate the scene with rejection sampling against a minimum spacing.
    /// Placement is best effort: after the attempt budget the last candidate
    /// is kept even if it crowds a neighbour.
    pub fn new(mut rng: StdRng) -> Self {
        let mut objects: Vec<DecorObject> = Vec::with_capacity(HERO_OBJECT_COUNT);
        let mut crowded = 0usize;
        for _ in 0..HERO_OBJECT_COUNT {
            let mut candidate = DecorObject::random(&mut rng);
            let mut attempts = 1;
            while attempts < HERO_PLACEMENT_ATTEMPTS && too_close(&objects, candidate.position) {
                candidate = DecorObject::random(&mut rng);
                attempts += 1;
            }
            if too_close(&objects, candidate.position) {
                crowded += 1;
            }
            objects.push(candidate);
        }
        if crowded > 0 {
            log::debug!("[hero] {} objects placed closer than the minimum spacing", crowded);
        }
        Self::from_objects(objects, rng)
    }

    pub fn from_objects(objects: Vec<DecorObject>, rng: StdRng) -> Self {
        Self {
            objects,
            time: 0.0,
            rng,
        }
    }

    pub fn objects(&self) -> &[DecorObject] {
        &self.objects
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame and collect the sprites that survive culling.
    /// Objects that left the envelope are respawned after their sprite is
    /// emitted, so they still show for the frame they escaped on.
    pub fn step(&mut self, viewport: Viewport, out: &mut Vec<Sprite>) {
        self.time += HERO_TIME_STEP;
        let (sin_t, cos_t) = (self.time * HERO_ORBIT_RATE).sin_cos();
        let center = viewport.center();

        for obj in self.objects.iter_mut() {
            obj.position += obj.velocity;
            obj.rotation += obj.rotation_speed;
            obj.pulse_phase += HERO_PULSE_STEP;

            let rot_x = obj.position.x * cos_t - obj.position.z * sin_t;
            let rot_z = obj.position.x * sin_t + obj.position.z * cos_t;
            let scale = HERO_CAMERA_DISTANCE / (HERO_CAMERA_DISTANCE + rot_z);

            if scale > HERO_CULL_SCALE {
                let pulse = pulse_factor(obj.pulse_phase);
                out.push(Sprite {
                    shape: obj.shape,
                    x: center.x + rot_x * scale * HERO_SCREEN_DAMPING,
                    y: center.y + obj.position.y * scale * HERO_SCREEN_DAMPING,
                    size: obj.size * scale,
                    rotation: obj.rotation,
                    opacity: base_opacity(scale) * pulse,
                    glow: obj.glow * pulse,
                    palette: obj.palette,
                });
            }

            if obj.out_of_bounds() {
                let edge = SpawnEdge::random(&mut self.rng);
                obj.position = edge.respawn_envelope().sample(&mut self.rng);
                obj.edge = edge;
            }
        }
    }
}

#[inline]
fn pick<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

fn too_close(objects: &[DecorObject], p: Vec3) -> bool {
    objects
        .iter()
        .any(|o| o.position.distance(p) < HERO_MIN_SPACING)
}
