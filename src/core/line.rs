//! Gerade Strecke zwischen zwei Kontrollpunkten.

use anyhow::{Result, bail};
use glam::Vec3;

use crate::shared::plane_geometry::flatten;

/// Gerade Strecke: die trivialste Blueprint-Form, exakt zwei Kontrollpunkte.
#[derive(Debug, Clone)]
pub struct StraightLine {
    p: [Vec3; 2],
}

impl StraightLine {
    /// Erstellt eine Strecke von `a` nach `b`.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        let mut line = Self { p: [Vec3::ZERO; 2] };
        line.set_point_a(a);
        line.set_point_b(b);
        line
    }

    /// Setzt einen Kontrollpunkt über seinen Index (0 = A, 1 = B).
    pub fn set_point(&mut self, index: usize, pos: Vec3) -> Result<()> {
        match index {
            0 => self.set_point_a(pos),
            1 => self.set_point_b(pos),
            _ => bail!("Strecke hat keinen Kontrollpunkt mit Index {}", index),
        }
        Ok(())
    }

    pub fn set_point_a(&mut self, a: Vec3) {
        self.p[0] = flatten(a);
    }

    pub fn set_point_b(&mut self, b: Vec3) {
        self.p[1] = flatten(b);
    }

    /// Liest einen Kontrollpunkt über seinen Index zurück.
    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.p.get(index).copied()
    }

    pub fn point_a(&self) -> Vec3 {
        self.p[0]
    }

    pub fn point_b(&self) -> Vec3 {
        self.p[1]
    }

    /// Punkt auf der Strecke bei Parameter `a` ∈ [0, 1].
    pub fn point_at(&self, a: f32) -> Vec3 {
        self.p[0].lerp(self.p[1], a)
    }

    /// Sampelt die Strecke: immer exakt `[A, B]`, keine Unterteilung.
    pub fn sample(&self) -> Vec<Vec3> {
        vec![self.p[0], self.p[1]]
    }
}
