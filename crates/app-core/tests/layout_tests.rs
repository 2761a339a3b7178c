// Tests for the radial card layout and ring rotation.

use app_core::layout::{card_slots, label_anchor, ring_rotation, RingParams};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn slots_are_evenly_spaced() {
    let params = RingParams::default();
    for count in [1usize, 2, 3, 5, 8, 13] {
        let slots = card_slots(count, &params);
        assert_eq!(slots.len(), count);
        let step = params.len / count as f32;
        for pair in slots.windows(2) {
            let gap = pair[1].angle - pair[0].angle;
            assert!(
                (gap - step).abs() < 1e-5,
                "uneven gap {gap} for count {count}, expected {step}"
            );
        }
    }
}

#[test]
fn empty_sequence_yields_empty_layout() {
    let slots = card_slots(0, &RingParams::default());
    assert!(slots.is_empty());
}

#[test]
fn five_photo_ring_places_item_two_as_expected() {
    // 5 photos, from = 0, len = 2π, radius = 5.25: item 2 sits at 4π/5.
    let params = RingParams {
        from: 0.0,
        len: TAU,
        radius: 5.25,
    };
    let slots = card_slots(5, &params);
    let slot = &slots[2];

    let angle = 4.0 * PI / 5.0;
    assert!((slot.angle - angle).abs() < 1e-6);
    assert!((slot.position.x - angle.sin() * 5.25).abs() < 1e-5);
    assert_eq!(slot.position.y, 0.0);
    assert!((slot.position.z - angle.cos() * 5.25).abs() < 1e-5);

    // Matches the documented approximation (3.084, 0, -4.246).
    assert!((slot.position.x - 3.084).abs() < 5e-3);
    assert!((slot.position.z + 4.246).abs() < 5e-3);
}

#[test]
fn slots_face_along_the_ring_tangent() {
    let slots = card_slots(6, &RingParams::default());
    for slot in &slots {
        assert_eq!(slot.rotation.x, 0.0);
        assert_eq!(slot.rotation.z, 0.0);
        assert!((slot.rotation.y - (FRAC_PI_2 + slot.angle)).abs() < 1e-6);
    }
}

#[test]
fn ring_rotation_is_periodic() {
    for offset in [0.0f32, 0.1, 0.3, 0.77, 0.999] {
        let a = ring_rotation(offset);
        let b = ring_rotation(offset + 1.0);
        let c = ring_rotation(offset - 1.0);
        assert!((a - b).abs() < 1e-4, "offset {offset}: {a} vs {b}");
        assert!((a - c).abs() < 1e-4, "offset {offset}: {a} vs {c}");
    }
}

#[test]
fn ring_rotation_spins_opposite_to_scroll() {
    assert_eq!(ring_rotation(0.0), 0.0);
    assert!((ring_rotation(0.25) + FRAC_PI_2).abs() < 1e-6);
    assert!((ring_rotation(0.5) + PI).abs() < 1e-6);
}

#[test]
fn ring_rotation_rejects_non_finite_offsets() {
    assert_eq!(ring_rotation(f32::NAN), 0.0);
    assert_eq!(ring_rotation(f32::INFINITY), 0.0);
}

#[test]
fn label_anchor_sits_at_the_midpoint_angle() {
    let params = RingParams {
        from: 0.3,
        len: 1.8,
        radius: 5.25,
    };
    let anchor = label_anchor(&params);
    let mid = 0.3f32 + 0.9;
    assert!((anchor.x - mid.sin() * 5.25 * 1.4).abs() < 1e-5);
    assert!((anchor.z - mid.cos() * 5.25 * 1.4).abs() < 1e-5);
    assert_eq!(anchor.y, 0.5);
}

#[test]
fn label_anchor_is_outside_the_card_radius() {
    let params = RingParams::default();
    let anchor = label_anchor(&params);
    let planar = (anchor.x * anchor.x + anchor.z * anchor.z).sqrt();
    assert!(planar > params.radius, "label at {planar}, cards at {}", params.radius);
}
