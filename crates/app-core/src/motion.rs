//! Exponential smoothing toward a moving target.
//!
//! Every continuously animated quantity in the viewer (camera eye, card
//! lift and scale, panel zoom and opacity) is advanced with `damp`: the
//! value closes a fixed fraction of the remaining gap per unit time, so
//! motion is frame-rate independent and settles without overshoot.

use glam::Vec3;

/// Move `current` toward `target` over `dt_sec` seconds with time
/// constant `tau_sec`.
///
/// The blend factor `1 - exp(-dt/tau)` is in `[0, 1)` for positive
/// inputs: `dt == 0` returns `current` unchanged, large `dt` converges
/// to `target`, and the result never passes the target. A non-positive
/// `tau_sec` snaps straight to the target. Non-finite `dt_sec` reads as
/// zero and a non-finite `target` leaves `current` untouched, so NaN
/// cannot enter smoothed state.
#[inline]
pub fn damp(current: f32, target: f32, tau_sec: f32, dt_sec: f32) -> f32 {
    if !target.is_finite() {
        return current;
    }
    if tau_sec <= 0.0 {
        return target;
    }
    let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
    let alpha = 1.0 - (-dt / tau_sec).exp();
    current + (target - current) * alpha
}

/// Component-wise [`damp`] for vectors.
#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, tau_sec: f32, dt_sec: f32) -> Vec3 {
    Vec3::new(
        damp(current.x, target.x, tau_sec, dt_sec),
        damp(current.y, target.y, tau_sec, dt_sec),
        damp(current.z, target.z, tau_sec, dt_sec),
    )
}
