//! Hover focus tracking and per-card motion.

use glam::Vec3;

use crate::constants::{
    CARD_ASPECT, CARD_POSITION_TAU_SEC, CARD_SCALE_TAU_SEC, HOVER_LIFT, HOVER_SCALE, IDLE_SCALE,
    NEIGHBOR_SCALE,
};
use crate::motion::damp_vec3;

/// Which card the pointer is over, if any.
///
/// A single `Option<usize>` is the whole state: reassigning it on
/// enter is one store, so no two cards can ever be hovered at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    hovered: Option<usize>,
}

impl FocusState {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// True while any card is hovered; non-hovered cards grow slightly
    /// too while the ring is active.
    pub fn is_active(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn pointer_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Drop a hover that points past the end of the current photo
    /// sequence (after a wholesale swap).
    pub fn retain_within(&mut self, len: usize) {
        if let Some(i) = self.hovered {
            if i >= len {
                log::debug!("[focus] hover {i} out of range for {len} photos, clearing");
                self.hovered = None;
            }
        }
    }
}

/// Scale factor a card aims for given its hover role this frame.
#[inline]
pub fn target_scale_factor(hovered: bool, active: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else if active {
        NEIGHBOR_SCALE
    } else {
        IDLE_SCALE
    }
}

/// Smoothed local offset and scale of one card face.
///
/// Owned by the scheduler, advanced once per tick, rebuilt whenever the
/// photo sequence is replaced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMotion {
    /// Local offset from the layout slot (hover lift).
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for CardMotion {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::new(CARD_ASPECT, 1.0, 1.0),
        }
    }
}

impl CardMotion {
    /// Advance toward this frame's targets. Position and scale are
    /// smoothed with separate time constants.
    pub fn update(&mut self, hovered: bool, active: bool, dt_sec: f32) {
        let lift = if hovered { HOVER_LIFT } else { 0.0 };
        let factor = target_scale_factor(hovered, active);
        self.position = damp_vec3(
            self.position,
            Vec3::new(0.0, lift, 0.0),
            CARD_POSITION_TAU_SEC,
            dt_sec,
        );
        self.scale = damp_vec3(
            self.scale,
            Vec3::new(CARD_ASPECT * factor, factor, 1.0),
            CARD_SCALE_TAU_SEC,
            dt_sec,
        );
    }
}
