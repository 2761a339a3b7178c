//! Radial card layout.
//!
//! Pure functions mapping an ordered photo sequence and a scroll offset
//! to per-card placements on a circle. Nothing here is cached: slots are
//! cheap to recompute and doing so every frame keeps them index-aligned
//! with whatever photo sequence is current.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::constants::{LABEL_HEIGHT, LABEL_RADIUS_FACTOR, RING_RADIUS};

/// Angular extent of the ring.
#[derive(Clone, Copy, Debug)]
pub struct RingParams {
    /// Starting angle in radians.
    pub from: f32,
    /// Angular span covered by the cards.
    pub len: f32,
    pub radius: f32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            from: 0.0,
            len: TAU,
            radius: RING_RADIUS,
        }
    }
}

/// Placement of one card on the ring, before the rigid ring rotation is
/// applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub angle: f32,
    pub position: Vec3,
    /// Euler XYZ rotation in radians; the card faces along the ring
    /// tangent.
    pub rotation: Vec3,
}

/// Compute the slot for every card index. An empty sequence yields an
/// empty layout.
pub fn card_slots(count: usize, params: &RingParams) -> Vec<LayoutEntry> {
    (0..count)
        .map(|i| {
            let angle = params.from + (i as f32 / count as f32) * params.len;
            LayoutEntry {
                angle,
                position: Vec3::new(
                    angle.sin() * params.radius,
                    0.0,
                    angle.cos() * params.radius,
                ),
                rotation: Vec3::new(0.0, FRAC_PI_2 + angle, 0.0),
            }
        })
        .collect()
}

/// Rigid Y rotation applied to the whole ring for a given scroll offset.
///
/// The offset wraps modulo 1, so the ring is periodic: `offset` and
/// `offset + 1` produce the same rotation. Non-finite offsets read as 0.
#[inline]
pub fn ring_rotation(scroll_offset: f32) -> f32 {
    let wrapped = if scroll_offset.is_finite() {
        scroll_offset.rem_euclid(1.0)
    } else {
        0.0
    };
    -wrapped * TAU
}

/// Billboard anchor for the category label, at the ring's midpoint angle
/// and slightly outside the card radius. Independent of the card count.
pub fn label_anchor(params: &RingParams) -> Vec3 {
    let mid = params.from + params.len * 0.5;
    Vec3::new(
        mid.sin() * params.radius * LABEL_RADIUS_FACTOR,
        LABEL_HEIGHT,
        mid.cos() * params.radius * LABEL_RADIUS_FACTOR,
    )
}
