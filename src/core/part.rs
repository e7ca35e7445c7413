//! Terrain-Teil: verwandelt Blueprint-Punktfolgen in Platzierungs-Anweisungen.
//!
//! Für x Zaunpfähle braucht es `x * 2 - 1` Objekte: an jedem Sample-Punkt
//! ein Knoten, zwischen je zwei aufeinanderfolgenden Punkten ein Span.

use glam::Vec3;

use super::Blueprint;

/// Eine Platzierungs-Anweisung für genau ein physisches Objekt.
///
/// Der Host instanziiert daraus seine eigenen Objekte (Sprite, Collider,
/// Rigid-Body) — die Engine kennt nur Position, Rotation und Länge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Knoten (Kugel) an einem Sample-Punkt.
    Node {
        position: Vec3,
    },
    /// Span (Block) zwischen zwei aufeinanderfolgenden Sample-Punkten.
    Span {
        /// Mittelwert der beiden Endpunkte
        midpoint: Vec3,
        /// Rotation in der Ebene (Radiant, atan2 der Spannrichtung)
        angle: f32,
        /// Euklidischer Abstand der Endpunkte
        length: f32,
    },
}

/// Baut die Platzierungs-Folge für eine Punktfolge.
///
/// Reine Funktion: Knoten an `points[0]`, dann abwechselnd Span und
/// Knoten für jeden weiteren Punkt — für N Punkte exakt `2N − 1`
/// Anweisungen.
///
/// # Panics
///
/// Weniger als 2 Punkte sind eine Vertragsverletzung: jede
/// Blueprint-Variante garantiert mindestens 2 Sample-Punkte.
pub fn build_placements(points: &[Vec3]) -> Vec<Placement> {
    assert!(
        points.len() >= 2,
        "Eine Kurve muss mindestens 2 Punkte liefern, bekam {}",
        points.len()
    );

    let mut placements = Vec::with_capacity(points.len() * 2 - 1);
    placements.push(Placement::Node {
        position: points[0],
    });
    for i in 1..points.len() {
        placements.push(span_between(points[i - 1], points[i]));
        placements.push(Placement::Node {
            position: points[i],
        });
    }
    placements
}

/// Span-Anweisung zwischen zwei Punkten.
fn span_between(a: Vec3, b: Vec3) -> Placement {
    let delta = b - a;
    Placement::Span {
        midpoint: (a + b) * 0.5,
        angle: delta.y.atan2(delta.x),
        length: delta.length(),
    }
}

/// Ein Terrain-Teil: Blueprint plus die zuletzt generierte Platzierungs-Folge.
///
/// `regenerate()` verwirft den alten Plan vollständig und baut ihn neu
/// auf — kein inkrementelles Diffing. Der Editor ruft es nach jeder
/// Kontrollpunkt-Änderung auf; zwei Aufrufe ohne Mutation dazwischen
/// liefern denselben Plan.
#[derive(Debug, Clone)]
pub struct TerrainPart {
    pub blueprint: Blueprint,
    placements: Vec<Placement>,
}

impl TerrainPart {
    /// Erstellt einen Terrain-Teil; der Plan ist bis zum ersten
    /// `regenerate()` leer.
    pub fn new(blueprint: Blueprint) -> Self {
        Self {
            blueprint,
            placements: Vec::new(),
        }
    }

    /// Berechnet die Blueprint-Punkte neu und baut den Plan komplett neu auf.
    pub fn regenerate(&mut self) -> &[Placement] {
        let points = self.blueprint.sample_points();
        self.placements = build_placements(&points);
        &self.placements
    }

    /// Die zuletzt generierte Platzierungs-Folge.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}
