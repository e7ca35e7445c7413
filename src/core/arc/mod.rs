//! Kreisbogen durch drei Kontrollpunkte (Start, Zwischenpunkt, Ende).
//!
//! Aufgeteilt in:
//! - `solver` — reine Funktionen: Umkreis-Geometrie und Brute-Force-Klassifikation
//!
//! Durchmesser, Mittelpunkt und Bogen-Flags sind reine Ableitungen der
//! drei Kontrollpunkte und werden bei jeder Abfrage neu berechnet — es
//! gibt bewusst keinen Zwischenspeicher, der beim Verschieben eines
//! Punktes veralten könnte.

pub mod solver;


use anyhow::{Result, bail};
use glam::Vec3;

use crate::shared::ArcTolerances;
use crate::shared::plane_geometry::flatten;
pub use solver::{ArcClassification, CircleGeometry};

/// Kreisbogen: A = Start, B = Zwischenpunkt-Hinweis, C = Ende.
///
/// Findet der Löser keinen konsistenten Bogen (kollineare Punkte, zu
/// großer Durchmesser), sampelt der Bogen als Gerade `[A, C]` — ein
/// normaler Zustand während des Ziehens, kein Fehler.
#[derive(Debug, Clone)]
pub struct CircularArc {
    p: [Vec3; 3],
}

impl CircularArc {
    /// Erstellt einen Bogen von `a` über `b` nach `c`.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let mut arc = Self { p: [Vec3::ZERO; 3] };
        arc.set_point_a(a);
        arc.set_point_b(b);
        arc.set_point_c(c);
        arc
    }

    /// Setzt einen Kontrollpunkt über seinen Index (0 = A, 1 = B, 2 = C).
    pub fn set_point(&mut self, index: usize, pos: Vec3) -> Result<()> {
        match index {
            0 => self.set_point_a(pos),
            1 => self.set_point_b(pos),
            2 => self.set_point_c(pos),
            _ => bail!("Kreisbogen hat keinen Kontrollpunkt mit Index {}", index),
        }
        Ok(())
    }

    pub fn set_point_a(&mut self, a: Vec3) {
        self.p[0] = flatten(a);
    }

    pub fn set_point_b(&mut self, b: Vec3) {
        self.p[1] = flatten(b);
    }

    pub fn set_point_c(&mut self, c: Vec3) {
        self.p[2] = flatten(c);
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

    pub fn point_c(&self) -> Vec3 {
        self.p[2]
    }

    /// Klassifiziert den Bogen mit den Standard-Toleranzen.
    pub fn classify(&self) -> ArcClassification {
        solver::classify_arc(&self.p, &ArcTolerances::default())
    }

    /// Sampelt den Bogen mit den Standard-Toleranzen.
    pub fn sample(&self) -> Vec<Vec3> {
        self.sample_with(&ArcTolerances::default())
    }

    /// Sampelt den Bogen: `sample_points` gleichmäßig parametrisierte
    /// Punkte wenn ein Bogen existiert, sonst die Gerade `[A, C]`.
    pub fn sample_with(&self, tol: &ArcTolerances) -> Vec<Vec3> {
        match solver::classify_arc(&self.p, tol) {
            ArcClassification::Arc { reflex, clockwise } => {
                let geometry = solver::circle_geometry(&self.p);
                let num = tol.sample_points;
                (0..num)
                    .map(|i| {
                        solver::arc_point(
                            &self.p,
                            geometry,
                            i as f32 / (num - 1) as f32,
                            reflex,
                            clockwise,
                        )
                    })
                    .collect()
            }
            ArcClassification::NoArc => vec![self.p[0], self.p[2]],
        }
    }
}
