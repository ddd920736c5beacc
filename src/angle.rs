//! Angle utilities for ring layout and rotation steering
//!
//! All angles are radians unless a function name says otherwise. Directions
//! are compared through `canonical_angle`, which folds every vector into
//! [0, 2π) so quadrant does not affect direction decisions.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Canonical angle of a direction against the +X axis, in [0, 2π).
///
/// Vectors on the x-axis are special-cased (0 for x >= 0, π otherwise) to
/// sidestep atan2's ±0 ambiguity there.
#[inline]
pub fn canonical_angle(v: Vec2) -> f32 {
    if v.y == 0.0 {
        return if v.x >= 0.0 { 0.0 } else { PI };
    }
    let a = v.y.atan2(v.x);
    if a > 0.0 { a } else { TAU + a }
}

/// Degrees to radians
#[inline]
pub fn degrees_to_radians(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Radians to degrees
#[inline]
pub fn radians_to_degrees(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// Unsigned angle between two vectors via the dot-product formula.
///
/// Zero-length inputs (and acos domain escapes from rounding) resolve to 0
/// instead of NaN, so a degenerate vector can never poison a direction
/// decision downstream.
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let cos = a.dot(b) / (a.length() * b.length());
    let rad = cos.acos();
    if rad.is_nan() { 0.0 } else { rad }
}
