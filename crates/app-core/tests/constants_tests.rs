// Tests for constants and their mathematical relationships.

use app_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_constants_are_positive() {
    assert!(CARD_POSITION_TAU_SEC > 0.0);
    assert!(CARD_SCALE_TAU_SEC > 0.0);
    assert!(CAMERA_TAU_SEC > 0.0);
    assert!(PANEL_ZOOM_TAU_SEC > 0.0);
    assert!(PANEL_OPACITY_TAU_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_targets_are_ordered() {
    // Hovered > active-but-not-hovered > idle.
    assert!(HOVER_SCALE > NEIGHBOR_SCALE);
    assert!(NEIGHBOR_SCALE > IDLE_SCALE);
    assert!(IDLE_SCALE == 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The lift should land before the growth settles.
    assert!(CARD_POSITION_TAU_SEC < CARD_SCALE_TAU_SEC);
    // The fade leads the zoom growth.
    assert!(PANEL_OPACITY_TAU_SEC < PANEL_ZOOM_TAU_SEC);
    // The zoom snap starts below its resting value.
    assert!(PANEL_ZOOM_START > 0.0 && PANEL_ZOOM_START < 1.0);
    // The label ring sits outside the card ring.
    assert!(LABEL_RADIUS_FACTOR > 1.0);
    // Picking spheres must not swallow the whole ring.
    assert!(PICK_SPHERE_RADIUS > 0.0 && PICK_SPHERE_RADIUS < RING_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_reasonable() {
    assert!(RING_RADIUS > 0.0);
    assert!(CARD_ASPECT > 1.0, "cards are landscape");
    assert!(HOVER_LIFT > 0.0);
    assert!(CAMERA_DISTANCE > RING_RADIUS, "camera starts outside the ring");
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(SCROLL_PAGES >= 1.0);
    assert!(PANEL_FADE_EPSILON > 0.0 && PANEL_FADE_EPSILON < 0.01);
}

#[test]
fn ring_offset_helper_matches_the_array() {
    let v = ring_offset_vec3();
    assert_eq!([v.x, v.y, v.z], RING_OFFSET);
}
