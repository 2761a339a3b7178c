//! Pointer-tracking camera rig.
//!
//! These types avoid referencing platform-specific APIs; frontends use
//! them to build view/projection matrices for whatever surface they
//! render to.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{
    CAMERA_BASE_HEIGHT, CAMERA_DISTANCE, CAMERA_FOV_DEGREES, CAMERA_TAU_SEC, POINTER_PARALLAX,
};
use crate::motion::damp_vec3;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Eye position and look-at target for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Smoothed eye position that trails the pointer.
///
/// Only the eye is damped; the look-at target is recomputed at the
/// origin every frame, so the view always faces the ring center and the
/// pointer produces an offset-parallax effect rather than look-ahead
/// lag.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    eye: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
        }
    }
}

impl CameraRig {
    /// Eye position the rig pulls toward for a given normalized pointer.
    #[inline]
    pub fn target_eye(pointer: Vec2) -> Vec3 {
        Vec3::new(
            -pointer.x * POINTER_PARALLAX,
            pointer.y * POINTER_PARALLAX + CAMERA_BASE_HEIGHT,
            CAMERA_DISTANCE,
        )
    }

    pub fn update(&mut self, pointer: Vec2, dt_sec: f32) {
        self.eye = damp_vec3(self.eye, Self::target_eye(pointer), CAMERA_TAU_SEC, dt_sec);
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            target: Vec3::ZERO,
        }
    }

    /// Full camera description for a render surface with the given
    /// aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
