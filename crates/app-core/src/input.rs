//! Staged input events and pointer picking helpers.

use glam::{Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::photos::PhotoRecord;

/// Normalized pointer position, `[-1, 1]` on both axes with `(0, 0)` at
/// the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Record a pointer move. Coordinates are clamped to `[-1, 1]`;
    /// non-finite input is discarded so NaN never reaches damped state.
    pub fn set(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.x = x.clamp(-1.0, 1.0);
            self.y = y.clamp(-1.0, 1.0);
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Host events staged between ticks.
///
/// Handlers only record target values here; smoothed state is touched
/// exclusively by the tick, so input delivery and the frame update never
/// race.
#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    CardEntered(usize),
    CardLeft,
    /// Absolute scroll offset; wraps modulo 1 at layout time.
    ScrollOffset(f32),
    /// Wholesale replacement of the photo sequence.
    PhotosLoaded(Vec<PhotoRecord>),
}

// ---------------- Picking helpers ----------------

/// Compute a world-space ray through normalized device coordinates
/// (`ndc_x`, `ndc_y` in `[-1, 1]`, y up).
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn pointer_ray(camera: &Camera, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p_far - ro).normalize();
    (ro, rd)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest card hit by the pointer ray, if any. `centers`
/// holds the world-space card centers in sequence order.
pub fn pick_card(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: &[Vec3],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in centers.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
