//! Velocity responses: collision, gravity and air drag
//!
//! These are pure functions over velocities and masses. `engine` decides
//! when they run and writes the results back into the registry.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::constants::{DRAG_COEFFICIENT, DRAG_SCALE, TICKS_PER_TIME_UNIT};

/// Heading of a velocity in radians.
///
/// Quadrants are resolved by hand rather than with `atan2`:
/// - `vx > 0`: `atan(vy/vx)`, plus `2π` unless `vy > 0`
/// - `vx < 0`: `atan(vy/vx) + π`
/// - `vx == 0`: `π/2` if `vy > 0`, otherwise `3π/2` (covers the zero vector)
///
/// The positive x axis therefore maps to exactly `2π`, not `0`.
pub fn angle(vx: f64, vy: f64) -> f64 {
    if vx > 0.0 {
        if vy > 0.0 {
            (vy / vx).atan()
        } else {
            (vy / vx).atan() + TAU
        }
    } else if vx < 0.0 {
        (vy / vx).atan() + PI
    } else if vy > 0.0 {
        FRAC_PI_2
    } else {
        3.0 * FRAC_PI_2
    }
}

/// Two-body elastic collision.
///
/// Each velocity is split along the axis `φ = θb − θa` (the difference of
/// the two headings, not the line between centers); the components along
/// `φ` exchange as a 1D elastic collision and the perpendicular components
/// are kept. Total momentum and kinetic energy are conserved.
///
/// Returns the new absolute velocities `(a, b)`.
pub fn elastic_response(va: DVec2, ma: f64, vb: DVec2, mb: f64) -> (DVec2, DVec2) {
    let speed_a = va.length();
    let speed_b = vb.length();
    let theta_a = angle(va.x, va.y);
    let theta_b = angle(vb.x, vb.y);
    let phi = theta_b - theta_a;

    let along_a =
        speed_a * (theta_a - phi).cos() * (ma - mb) + 2.0 * mb * speed_b * (theta_b - phi).cos();
    let along_b =
        speed_b * (theta_b - phi).cos() * (mb - ma) + 2.0 * ma * speed_a * (theta_a - phi).cos();
    let across_a = speed_a * (theta_a - phi).sin();
    let across_b = speed_b * (theta_b - phi).sin();

    let new_a = DVec2::new(
        along_a * (phi.cos() / (ma + mb)) + across_a * (phi + FRAC_PI_2).cos(),
        along_a * (phi.sin() / (ma + mb)) + across_a * (phi + FRAC_PI_2).sin(),
    );
    let new_b = DVec2::new(
        along_b * (phi.cos() / (ma + mb)) + across_b * (phi + FRAC_PI_2).cos(),
        along_b * (phi.sin() / (ma + mb)) + across_b * (phi + FRAC_PI_2).sin(),
    );
    (new_a, new_b)
}

/// Vertical velocity after one tick of gravity
/// vy' = vy + g·dt
pub fn apply_gravity(vy: f64, gravity: f64) -> f64 {
    vy + gravity / TICKS_PER_TIME_UNIT
}

/// Drag force on one axis
/// F = ρ·cd·A·v²/2, with A = π(r/1000)²
///
/// The square drops the sign of `v`, so the force never opposes motion
/// along a negative axis.
pub fn drag_force(air_density: f64, radius: f64, v: f64) -> f64 {
    let area = (radius / DRAG_SCALE).powi(2) * PI;
    (air_density * DRAG_COEFFICIENT * area * v.powi(2)) / 2.0
}

/// Velocity after one tick of air drag, using the drag mass `r²/1000`
pub fn apply_air_drag(velocity: DVec2, radius: f64, air_density: f64) -> DVec2 {
    let mass = radius.powi(2) / DRAG_SCALE;
    let ax = drag_force(air_density, radius, velocity.x) / mass;
    let ay = drag_force(air_density, radius, velocity.y) / mass;
    DVec2::new(
        velocity.x + ax / TICKS_PER_TIME_UNIT,
        velocity.y + ay / TICKS_PER_TIME_UNIT,
    )
}
