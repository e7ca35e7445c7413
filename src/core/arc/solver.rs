//! Brute-Force-Löser für Kreisbögen durch drei Punkte.
//!
//! Ein Kreis durch drei Punkte lässt vier Bögen von A nach C zu
//! (überstumpf × Drehrichtung). Statt die richtige Kombination analytisch
//! zu bestimmen, wird jede der vier Varianten grob abgetastet und geprüft,
//! ob sie den Zwischenpunkt B schneidet und beim Endpunkt C endet.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::shared::ArcTolerances;
use crate::shared::plane_geometry::{point_near_point, short_angle_between};

/// Abgeleitete Umkreis-Geometrie der drei Kontrollpunkte.
#[derive(Debug, Clone, Copy)]
pub struct CircleGeometry {
    /// Vorzeichenbehafteter Durchmesser. Kollineare oder zusammenfallende
    /// Punkte treiben den Wert gegen ±∞ bzw. NaN.
    pub diameter: f32,
    /// Umkreis-Mittelpunkt.
    pub center: Vec3,
}

/// Ergebnis der Bogen-Klassifikation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcClassification {
    /// Genau eine Flag-Kombination läuft durch B und endet bei C.
    Arc {
        /// True = überstumpfer Bogen (Winkel > 180°)
        reflex: bool,
        /// True = im Uhrzeigersinn
        clockwise: bool,
    },
    /// Kein Bogen: Durchmesser zu groß oder keine Kombination passt.
    /// Der Aufrufer fällt auf die Gerade `[A, C]` zurück.
    NoArc,
}

/// Durchmesser über den Sinussatz: Seite A–B geteilt durch den Sinus der
/// Peilungs-Differenz von C aus gesehen.
pub fn circle_diameter(p: &[Vec3; 3]) -> f32 {
    let l = (p[0] - p[1]).length();

    let a0 = (p[0].y - p[2].y).atan2(p[0].x - p[2].x);
    let a1 = (p[1].y - p[2].y).atan2(p[1].x - p[2].x);

    l / (a0 - a1).sin()
}

/// Umkreis-Mittelpunkt über die Determinanten-Formel, relativ zu A
/// berechnet und zurückverschoben.
pub fn circle_center(p: &[Vec3; 3]) -> Vec3 {
    let bd = p[1] - p[0];
    let cd = p[2] - p[0];
    let dd = 2.0 * (bd.x * cd.y - bd.y * cd.x);
    let ux = (cd.y * (bd.x * bd.x + bd.y * bd.y) - bd.y * (cd.x * cd.x + cd.y * cd.y)) / dd;
    let uy = (bd.x * (cd.x * cd.x + cd.y * cd.y) - cd.x * (bd.x * bd.x + bd.y * bd.y)) / dd;
    p[0] + Vec3::new(ux, uy, 0.0)
}

/// Berechnet Durchmesser und Mittelpunkt in einem Schritt.
pub fn circle_geometry(p: &[Vec3; 3]) -> CircleGeometry {
    CircleGeometry {
        diameter: circle_diameter(p),
        center: circle_center(p),
    }
}

/// Punkt auf dem Bogen bei Parameter `a` ∈ [0, 1] für eine Flag-Kombination.
///
/// Der Bogen startet bei der Peilung Mittelpunkt→A und überstreicht den
/// kürzesten Winkel nach C — `reflex` ersetzt ihn durch den Gegen-Winkel,
/// `clockwise` kehrt die Drehrichtung um.
pub fn arc_point(
    p: &[Vec3; 3],
    geometry: CircleGeometry,
    a: f32,
    reflex: bool,
    clockwise: bool,
) -> Vec3 {
    let m = geometry.center;

    let angle_to_a = (p[0].y - m.y).atan2(p[0].x - m.x);
    let angle_to_c = (p[2].y - m.y).atan2(p[2].x - m.x);

    let angle_start = angle_to_a;
    let mut angle_through = short_angle_between(angle_to_a, angle_to_c);
    if reflex {
        angle_through = TAU - angle_through;
    }
    if clockwise {
        angle_through = -angle_through;
    }

    let r = geometry.diameter.abs() / 2.0;
    let d = angle_start + angle_through * a;

    Vec3::new(m.x + r * d.cos(), m.y + r * d.sin(), 0.0)
}

/// Findet per Brute-Force die Flag-Kombination, deren Bogen durch B läuft
/// und bei C endet.
///
/// Feste Probier-Reihenfolge: (reflex, clockwise) = (false, false),
/// (true, false), (false, true), (true, true). Die erste Kombination,
/// deren Grob-Abtastung B innerhalb `midpoint_tolerance` schneidet und
/// deren letzter Punkt innerhalb `endpoint_tolerance` bei C landet,
/// gewinnt.
pub fn classify_arc(p: &[Vec3; 3], tol: &ArcTolerances) -> ArcClassification {
    let geometry = circle_geometry(p);

    // Kollineare Punkte landen von selbst im NoArc-Fall: ±∞/NaN bestehen
    // den Durchmesser-Vergleich nicht.
    if geometry.diameter.abs() < tol.max_diameter {
        for &(reflex, clockwise) in &[(false, false), (true, false), (false, true), (true, true)] {
            let mut intersects_midpoint = false;
            let mut last = p[0];

            for i in 0..tol.solver_samples {
                let a = i as f32 / (tol.solver_samples - 1) as f32;
                last = arc_point(p, geometry, a, reflex, clockwise);

                if !intersects_midpoint && point_near_point(last, p[1], tol.midpoint_tolerance) {
                    intersects_midpoint = true;
                }
            }

            let ends_at_endpoint = point_near_point(last, p[2], tol.endpoint_tolerance);

            if intersects_midpoint && ends_at_endpoint {
                return ArcClassification::Arc { reflex, clockwise };
            }
        }
    }

    ArcClassification::NoArc
}
