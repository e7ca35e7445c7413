//! Kubische Bézier-Kurve mit längengesteuerter Segment-Anzahl.

use anyhow::{Result, bail};
use glam::Vec3;

use crate::shared::BEZIER_LENGTH_SAMPLES;
use crate::shared::plane_geometry::flatten;

/// Kubische Bézier-Kurve: vier Kontrollpunkte plus abgeleitete Segment-Anzahl.
///
/// Die Segment-Anzahl ist kein unabhängiger Benutzer-Wert — sie wird über
/// `set_segment_length` aus der geschätzten Bogenlänge der aktuellen
/// Geometrie abgeleitet. Verschobene Endpunkte ändern damit die
/// Sample-Dichte bei der nächsten Regenerierung.
#[derive(Debug, Clone)]
pub struct CubicBezier {
    p: [Vec3; 4],
    segments: u32,
}

impl CubicBezier {
    /// Erstellt eine Kurve über die Kontrollpunkte `a`–`d` mit `segments` Segmenten.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3, segments: u32) -> Self {
        let mut bezier = Self {
            p: [Vec3::ZERO; 4],
            segments: 1,
        };
        bezier.set_point_a(a);
        bezier.set_point_b(b);
        bezier.set_point_c(c);
        bezier.set_point_d(d);
        bezier.set_segment_count(segments);
        bezier
    }

    // ── Setzen ──────────────────────────────────────────────────────

    /// Setzt einen Kontrollpunkt über seinen Index (0 = A … 3 = D).
    pub fn set_point(&mut self, index: usize, pos: Vec3) -> Result<()> {
        match index {
            0 => self.set_point_a(pos),
            1 => self.set_point_b(pos),
            2 => self.set_point_c(pos),
            3 => self.set_point_d(pos),
            _ => bail!("Bezier-Kurve hat keinen Kontrollpunkt mit Index {}", index),
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

    pub fn set_point_d(&mut self, d: Vec3) {
        self.p[3] = flatten(d);
    }

    /// Setzt die Segment-Anzahl direkt. 0 wird auf 1 geklemmt.
    pub fn set_segment_count(&mut self, segments: u32) {
        if segments >= 1 {
            self.segments = segments;
        } else {
            self.segments = 1;
            log::warn!("Ungueltige Segment-Anzahl 0 fuer Bezier-Kurve, verwende 1");
        }
    }

    /// Leitet die Segment-Anzahl aus der gewünschten Segment-Länge ab.
    ///
    /// Entartete Kurven (Bogenlänge ≈ 0, z.B. alle Punkte identisch
    /// während des Ziehens) ergeben stillschweigend 1 Segment.
    pub fn set_segment_length(&mut self, segment_length: f32) {
        self.segments = self.segment_count_for_length(segment_length);
    }

    // ── Lesen ───────────────────────────────────────────────────────

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

    pub fn point_d(&self) -> Vec3 {
        self.p[3]
    }

    pub fn segment_count(&self) -> u32 {
        self.segments
    }

    // ── Berechnen ───────────────────────────────────────────────────

    /// `max(1, ⌊Bogenlänge / Segment-Länge⌋)` für die aktuelle Geometrie.
    pub fn segment_count_for_length(&self, segment_length: f32) -> u32 {
        let segments = (self.arc_length(BEZIER_LENGTH_SAMPLES) / segment_length) as u32;
        segments.max(1)
    }

    /// B(t) = (1-t)³·A + 3(1-t)²t·B + 3(1-t)t²·C + t³·D
    pub fn point_at(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        self.p[0] * inv2 * inv
            + self.p[1] * 3.0 * inv2 * t
            + self.p[2] * 3.0 * inv * t2
            + self.p[3] * t2 * t
    }

    /// Sampelt die Kurve in `segments + 1` Punkten, gleichmäßig im
    /// Parameter (nicht in der Bogenlänge). Erster Punkt = A, letzter = D.
    pub fn sample(&self) -> Vec<Vec3> {
        (0..=self.segments)
            .map(|i| self.point_at(i as f32 / self.segments as f32))
            .collect()
    }

    /// Geschätzte Bogenlänge über Sehnen-Summen in `samples` gleichmäßigen
    /// Parameter-Schritten — ein Schätzer, kein exakter Wert.
    pub fn arc_length(&self, samples: usize) -> f32 {
        let mut length = 0.0;
        let mut prev = self.point_at(0.0);
        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let p = self.point_at(t);
            length += prev.distance(p);
            prev = p;
        }
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 10.0, 0.0),
            Vec3::new(7.0, 10.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            20,
        )
    }

    #[test]
    fn test_endpoints_match_control_points() {
        let bezier = arch();
        assert!((bezier.point_at(0.0) - bezier.point_a()).length() < 0.001);
        assert!((bezier.point_at(1.0) - bezier.point_d()).length() < 0.001);
    }

    #[test]
    fn test_midpoint_symmetry() {
        // B(0.5) = 0.125·A + 0.375·B + 0.375·C + 0.125·D
        let bezier = CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
            4,
        );
        let mid = bezier.point_at(0.5);
        assert!((mid - Vec3::new(5.0, 5.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_sample_count_is_segments_plus_one() {
        let mut bezier = arch();
        for segments in [1u32, 2, 7, 20] {
            bezier.set_segment_count(segments);
            let points = bezier.sample();
            assert_eq!(points.len(), segments as usize + 1);
            assert!((points[0] - bezier.point_a()).length() < 0.001);
            assert!((points[points.len() - 1] - bezier.point_d()).length() < 0.001);
        }
    }

    #[test]
    fn test_segment_count_zero_clamps_to_one() {
        let mut bezier = arch();
        bezier.set_segment_count(0);
        assert_eq!(bezier.segment_count(), 1);
        assert_eq!(bezier.sample().len(), 2);
    }

    #[test]
    fn test_segment_count_for_length_monotone() {
        let bezier = arch();
        let mut prev = u32::MAX;
        for segment_length in [0.5f32, 1.0, 2.0, 4.0, 8.0, 100.0] {
            let count = bezier.segment_count_for_length(segment_length);
            assert!(count >= 1);
            assert!(
                count <= prev,
                "Anzahl {} bei Laenge {} groesser als vorige {}",
                count,
                segment_length,
                prev
            );
            prev = count;
        }
    }

    #[test]
    fn test_arc_length_of_straight_control_polygon() {
        // Alle Kontrollpunkte auf der x-Achse → Kurve ist die Strecke selbst
        let bezier = CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(7.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            4,
        );
        assert_relative_eq!(bezier.arc_length(100), 10.0, epsilon = 0.01);
    }

    #[test]
    fn test_degenerate_curve_collapses_to_single_segment() {
        let p = Vec3::new(4.0, 4.0, 0.0);
        let mut bezier = CubicBezier::new(p, p, p, p, 20);
        bezier.set_segment_length(3.0);
        assert_eq!(bezier.segment_count(), 1);

        let points = bezier.sample();
        assert_eq!(points.len(), 2);
        assert!((points[0] - p).length() < 0.001);
        assert!((points[1] - p).length() < 0.001);
    }

    #[test]
    fn test_set_point_forces_z_and_rejects_invalid_index() {
        let mut bezier = arch();
        bezier.set_point(2, Vec3::new(1.0, 2.0, 9.0)).unwrap();
        assert_eq!(bezier.point(2), Some(Vec3::new(1.0, 2.0, 0.0)));
        assert!(bezier.set_point(4, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_moving_endpoint_changes_derived_density() {
        let mut bezier = arch();
        bezier.set_segment_length(2.0);
        let before = bezier.segment_count();

        // Endpunkt weit nach außen → längere Kurve → mehr Segmente
        bezier.set_point_d(Vec3::new(60.0, 0.0, 0.0));
        bezier.set_segment_length(2.0);
        assert!(bezier.segment_count() > before);
    }
}
