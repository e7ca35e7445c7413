//! Blueprint: die logische Form eines Terrain-Teils vor der Instanziierung.

use anyhow::Result;
use glam::Vec3;

use super::{CircularArc, CubicBezier, StraightLine};
use crate::shared::{
    BEZIER_DEFAULT_SEGMENTS, SEGMENT_LENGTH_GROUND, SEGMENT_LENGTH_MAX, SEGMENT_LENGTH_MIN,
    SEGMENT_LENGTH_STEP,
};

/// Varianten-Tag eines Blueprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintKind {
    StraightLine,
    BezierCubic,
    CircularArc,
}

/// Die gehaltene Kurven-Primitive. Existiert nur innerhalb ihres
/// Blueprints und wird ausschließlich über dessen Interface verändert.
#[derive(Debug, Clone)]
enum BlueprintShape {
    StraightLine(StraightLine),
    BezierCubic(CubicBezier),
    CircularArc(CircularArc),
}

/// Blueprint eines Terrain-Teils: genau eine Kurven-Primitive plus die
/// Ziel-Segment-Länge für die Abtast-Dichte.
///
/// Die Variante steht nach der Konstruktion fest — eine andere Form
/// verlangt einen neuen Blueprint.
#[derive(Debug, Clone)]
pub struct Blueprint {
    shape: BlueprintShape,
    segment_length: f32,
}

impl Blueprint {
    /// Gerade Strecke von `a` nach `b`.
    pub fn straight_line(a: Vec3, b: Vec3) -> Self {
        Self {
            shape: BlueprintShape::StraightLine(StraightLine::new(a, b)),
            segment_length: SEGMENT_LENGTH_GROUND,
        }
    }

    /// Kubische Bézier-Kurve über die Kontrollpunkte `a`–`d`.
    pub fn bezier_cubic(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self {
            shape: BlueprintShape::BezierCubic(CubicBezier::new(
                a,
                b,
                c,
                d,
                BEZIER_DEFAULT_SEGMENTS,
            )),
            segment_length: SEGMENT_LENGTH_GROUND,
        }
    }

    /// Kreisbogen von `a` über `b` nach `c`.
    pub fn circular_arc(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            shape: BlueprintShape::CircularArc(CircularArc::new(a, b, c)),
            segment_length: SEGMENT_LENGTH_GROUND,
        }
    }

    /// Varianten-Tag der gehaltenen Form.
    pub fn kind(&self) -> BlueprintKind {
        match &self.shape {
            BlueprintShape::StraightLine(_) => BlueprintKind::StraightLine,
            BlueprintShape::BezierCubic(_) => BlueprintKind::BezierCubic,
            BlueprintShape::CircularArc(_) => BlueprintKind::CircularArc,
        }
    }

    /// Feste Kontrollpunkt-Arität der gehaltenen Variante.
    pub fn control_point_count(&self) -> usize {
        match &self.shape {
            BlueprintShape::StraightLine(_) => 2,
            BlueprintShape::BezierCubic(_) => 4,
            BlueprintShape::CircularArc(_) => 3,
        }
    }

    /// Setzt einen Kontrollpunkt der gehaltenen Form.
    ///
    /// Fehler wenn der Index außerhalb der festen Arität der Variante
    /// liegt — in dem Fall wird nichts verändert.
    pub fn set_control_point(&mut self, index: usize, pos: Vec3) -> Result<()> {
        match &mut self.shape {
            BlueprintShape::StraightLine(line) => line.set_point(index, pos),
            BlueprintShape::BezierCubic(bezier) => bezier.set_point(index, pos),
            BlueprintShape::CircularArc(arc) => arc.set_point(index, pos),
        }
    }

    /// Liest einen Kontrollpunkt zurück (None bei ungültigem Index).
    pub fn control_point(&self, index: usize) -> Option<Vec3> {
        match &self.shape {
            BlueprintShape::StraightLine(line) => line.point(index),
            BlueprintShape::BezierCubic(bezier) => bezier.point(index),
            BlueprintShape::CircularArc(arc) => arc.point(index),
        }
    }

    /// Ziel-Segment-Länge. Wirkt nur auf Varianten mit variabler
    /// Auflösung (Bézier); Strecke und Bogen ignorieren sie.
    pub fn set_segment_length(&mut self, segment_length: f32) {
        self.segment_length = segment_length;
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Erhöht die Segment-Länge um einen Editor-Schritt (geklemmt).
    pub fn segment_length_increase(&mut self) {
        self.segment_length = (self.segment_length + SEGMENT_LENGTH_STEP).min(SEGMENT_LENGTH_MAX);
    }

    /// Verringert die Segment-Länge um einen Editor-Schritt (geklemmt).
    pub fn segment_length_decrease(&mut self) {
        self.segment_length = (self.segment_length - SEGMENT_LENGTH_STEP).max(SEGMENT_LENGTH_MIN);
    }

    /// Berechnet die vollständige Punktfolge der aktuellen Form.
    ///
    /// Für Bézier-Kurven wird vorher die Segment-Anzahl aus der
    /// Ziel-Segment-Länge neu abgeleitet — die Dichte folgt also immer
    /// der aktuellen Geometrie. Das Ergebnis wird nie zwischengespeichert.
    pub fn sample_points(&mut self) -> Vec<Vec3> {
        match &mut self.shape {
            BlueprintShape::StraightLine(line) => line.sample(),
            BlueprintShape::BezierCubic(bezier) => {
                bezier.set_segment_length(self.segment_length);
                bezier.sample()
            }
            BlueprintShape::CircularArc(arc) => arc.sample(),
        }
    }
}
