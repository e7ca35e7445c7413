//! Reine Geometrie-Helfer für die XY-Ebene.
//!
//! Layer-neutral: kann von `core` und vom umgebenden Editor importiert
//! werden. Die gesamte Kurven-Mathematik ist planar — die z-Achse wird in
//! diesem Subsystem nicht benutzt und von allen Settern auf 0 gezwungen.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Projiziert einen Punkt in die XY-Ebene (z = 0).
pub fn flatten(p: Vec3) -> Vec3 {
    Vec3::new(p.x, p.y, 0.0)
}

/// Kürzester Winkel zwischen zwei Peilungen (Radiant).
///
/// `min(Δ, 2π − Δ)` auf der absoluten Differenz modulo 2π — das Ergebnis
/// liegt immer in [0, π].
pub fn short_angle_between(a1: f32, a2: f32) -> f32 {
    let b = (a1 - a2).abs() % TAU;
    if b > PI { TAU - b } else { b }
}

/// True wenn zwei Punkte planar (z ignoriert) näher als `precision` beieinander liegen.
pub fn point_near_point(a: Vec3, b: Vec3, precision: f32) -> bool {
    a.truncate().distance(b.truncate()) < precision
}
