use glam::Vec3;

// Shared layout/interaction tuning constants used by the core and frontends.

// Ring geometry
pub const RING_RADIUS: f32 = 5.25;
pub const RING_OFFSET: [f32; 3] = [0.0, -1.0, 0.0]; // world-space offset applied to the whole ring
pub const CARD_ASPECT: f32 = 1.618; // width/height of a card face
pub const CARD_CORNER_RADIUS: f32 = 0.075; // rounded-corner radius in card-local units

// Category label billboard
pub const LABEL_RADIUS_FACTOR: f32 = 1.4; // label sits outside the card ring
pub const LABEL_HEIGHT: f32 = 0.5;

// Hover scaling
pub const IDLE_SCALE: f32 = 1.0;
pub const NEIGHBOR_SCALE: f32 = 1.25; // non-hovered cards while some card is hovered
pub const HOVER_SCALE: f32 = 1.4;
pub const HOVER_LIFT: f32 = 0.25; // vertical offset of the hovered card

// Smoothing time constants (seconds)
pub const CARD_POSITION_TAU_SEC: f32 = 0.10;
pub const CARD_SCALE_TAU_SEC: f32 = 0.15;
pub const CAMERA_TAU_SEC: f32 = 0.30;
pub const PANEL_ZOOM_TAU_SEC: f32 = 0.50;
pub const PANEL_OPACITY_TAU_SEC: f32 = 0.30;

// Camera rig
pub const CAMERA_DISTANCE: f32 = 9.0;
pub const CAMERA_BASE_HEIGHT: f32 = 4.5;
pub const POINTER_PARALLAX: f32 = 2.0; // normalized pointer units to world units
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

// Detail panel
pub const PANEL_ZOOM_START: f32 = 0.8; // zoom snaps here on every hover change
pub const PANEL_FADE_EPSILON: f32 = 1e-3; // below this opacity the panel clears and stops updating
pub const PANEL_IMAGE_HEIGHT: f32 = 1.5; // panel quad height above the ring plane
pub const PANEL_IMAGE_SCALE: f32 = 3.5;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.8; // ray-sphere radius for card picking
pub const SCROLL_PAGES: f32 = 4.0; // wheel travel (in viewport heights) for one full revolution

#[inline]
pub fn ring_offset_vec3() -> Vec3 {
    Vec3::new(RING_OFFSET[0], RING_OFFSET[1], RING_OFFSET[2])
}
