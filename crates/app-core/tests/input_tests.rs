// Tests for pointer staging and picking helpers.

use app_core::camera::Camera;
use app_core::input::{pick_card, pointer_ray, ray_sphere, PointerState};
use glam::Vec3;

fn test_camera(eye: Vec3) -> Camera {
    Camera {
        eye,
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 50.0f32.to_radians(),
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn pointer_state_clamps_to_unit_square() {
    let mut pointer = PointerState::default();
    pointer.set(2.0, -3.0);
    assert_eq!(pointer.x, 1.0);
    assert_eq!(pointer.y, -1.0);

    pointer.set(0.25, 0.75);
    assert_eq!(pointer.x, 0.25);
    assert_eq!(pointer.y, 0.75);
}

#[test]
fn pointer_state_discards_non_finite_moves() {
    let mut pointer = PointerState::default();
    pointer.set(0.5, 0.5);
    pointer.set(f32::NAN, 0.0);
    pointer.set(0.0, f32::INFINITY);
    assert_eq!(pointer.x, 0.5);
    assert_eq!(pointer.y, 0.5);
}

#[test]
fn ray_sphere_hit_and_miss() {
    let origin = Vec3::ZERO;
    let toward_z = Vec3::Z;

    let t = ray_sphere(origin, toward_z, Vec3::new(0.0, 0.0, 5.0), 1.0)
        .expect("straight-on hit");
    assert!((t - 4.0).abs() < 1e-4, "entry at z = 4, got t = {t}");

    assert!(ray_sphere(origin, toward_z, Vec3::new(5.0, 0.0, 5.0), 1.0).is_none());
    // Sphere behind the origin is not a hit.
    assert!(ray_sphere(origin, toward_z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn pointer_ray_through_center_aims_at_the_target() {
    let camera = test_camera(Vec3::new(0.0, 0.0, 9.0));
    let (origin, dir) = pointer_ray(&camera, 0.0, 0.0);
    assert_eq!(origin, camera.eye);
    assert!(dir.z < -0.999, "center ray should head toward -Z, got {dir}");
    assert!(dir.x.abs() < 1e-4 && dir.y.abs() < 1e-4);
}

#[test]
fn pointer_ray_follows_the_cursor_off_center() {
    let camera = test_camera(Vec3::new(0.0, 0.0, 9.0));
    let (_, right) = pointer_ray(&camera, 0.5, 0.0);
    let (_, up) = pointer_ray(&camera, 0.0, 0.5);
    assert!(right.x > 0.0, "positive ndc x should aim right");
    assert!(up.y > 0.0, "positive ndc y should aim up");
}

#[test]
fn pick_card_prefers_the_nearest_hit() {
    let origin = Vec3::new(0.0, 0.0, 9.0);
    let dir = Vec3::NEG_Z;
    let centers = [
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, 2.0),
    ];
    // Both index 1 and 2 are on the ray; 1 is closer to the origin.
    assert_eq!(pick_card(origin, dir, &centers, 0.8), Some(1));
}

#[test]
fn pick_card_misses_cleanly() {
    let origin = Vec3::new(0.0, 0.0, 9.0);
    let dir = Vec3::NEG_Z;
    let centers = [Vec3::new(4.0, 0.0, 0.0), Vec3::new(-4.0, 0.0, 0.0)];
    assert_eq!(pick_card(origin, dir, &centers, 0.8), None);
    assert_eq!(pick_card(origin, dir, &[], 0.8), None);
}
