// Integration tests for the synthetic point-cloud generator.

use anomaly_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cloud_for(name: &str, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    synthesize(CloudShape::from_file_name(name), 5000, &mut rng)
}

#[test]
fn chair_has_seat_back_and_four_legs() {
    let cloud = cloud_for("office_chair_01.tiff", 1);
    assert_eq!(cloud.shape(), CloudShape::Chair);
    assert_eq!(cloud.len(), 1500 + 2000 + 4 * 375);

    let pts = cloud.points();
    let seat = &pts[..1500];
    let back = &pts[1500..3500];
    let legs = &pts[3500..];

    assert!(seat
        .iter()
        .all(|p| p.position.x.abs() <= 75.0 && p.position.z.abs() <= 75.0 && (0.0..=20.0).contains(&p.position.y)));
    assert!(back
        .iter()
        .all(|p| (20.0..=170.0).contains(&p.position.y) && (-50.0..=-30.0).contains(&p.position.z)));

    for (leg, [cx, cz]) in legs.chunks(375).zip(CHAIR_LEG_CENTERS) {
        let center = Vec2::new(cx, cz);
        assert!(leg.iter().all(|p| {
            let xz = Vec2::new(p.position.x, p.position.z);
            (xz - center).abs().max_element() <= 5.0 + 1e-3 && (0.0..=80.0).contains(&p.position.y)
        }));
    }
    // legs sit on all four corners
    let mut signs: Vec<(bool, bool)> = legs
        .chunks(375)
        .map(|leg| (leg[0].position.x > 0.0, leg[0].position.z > 0.0))
        .collect();
    signs.sort();
    signs.dedup();
    assert_eq!(signs.len(), 4);
}

#[test]
fn candy_is_mostly_shell_plus_stick() {
    let cloud = cloud_for("Lollipop_007.TIFF", 2);
    assert_eq!(cloud.shape(), CloudShape::Candy);
    let n = cloud.len() as f32;

    let on_shell = cloud
        .points()
        .iter()
        .filter(|p| {
            let d = p.position.distance(CANDY_HEAD_CENTER);
            (80.0 - 1e-3..=100.0 + 1e-3).contains(&d)
        })
        .count() as f32;
    assert!(on_shell / n >= 0.65, "shell share {}", on_shell / n);

    let off_shell_in_column = cloud.points().iter().all(|p| {
        let d = p.position.distance(CANDY_HEAD_CENTER);
        let in_shell = (80.0 - 1e-3..=100.0 + 1e-3).contains(&d);
        in_shell || (p.position.x.abs() <= 5.0 && p.position.z.abs() <= 5.0)
    });
    assert!(off_shell_in_column);
}

#[test]
fn industrial_is_the_fallback_and_stays_in_its_cylinder() {
    let cloud = cloud_for("cable_gland_000.tiff", 3);
    assert_eq!(cloud.shape(), CloudShape::Industrial);
    assert_eq!(cloud.len(), 3000 + 6 * 250 + 1500);
    for p in cloud.points() {
        let radial = Vec2::new(p.position.x, p.position.z).length();
        assert!(radial <= 100.0 + 1e-3);
        assert!(p.position.y.abs() <= 75.0);
    }
}

#[test]
fn industrial_holes_are_six_clusters_around_the_ring() {
    let cloud = cloud_for("cable_gland_001.tiff", 4);
    let holes = &cloud.points()[3000..3000 + INDUSTRIAL_HOLE_COUNT * 250];
    for (k, cluster) in holes.chunks(250).enumerate() {
        let theta = k as f32 * std::f32::consts::PI / 3.0;
        let dir = Vec2::new(theta.cos(), theta.sin());
        let center = dir * 70.0;
        for p in cluster {
            let offset = Vec2::new(p.position.x, p.position.z) - center;
            let r = offset.length();
            assert!((20.0 - 1e-3..=30.0 + 1e-3).contains(&r), "hole {k}: r = {r}");
            // the arc spans half a radian around the hole's own angle
            assert!(offset.dot(dir) / r >= 0.25f32.cos() - 1e-4, "hole {k}");
            assert!(p.position.y.abs() <= 15.0);
        }
    }
}

#[test]
fn same_seed_same_cloud() {
    let a = cloud_for("x.tiff", 9);
    let b = cloud_for("x.tiff", 9);
    assert_eq!(a.points(), b.points());
    assert_ne!(a.points()[0].position, Vec3::ZERO);
}
