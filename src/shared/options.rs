//! Zentrale Konfiguration der Terrain-Shape-Engine.
//!
//! `ShapeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//!
//! Die Arc-Solver-Toleranzen sind empirische Werte ohne dokumentierte
//! Herleitung — bei einem anderen Koordinaten-Maßstab müssen sie neu
//! eingestellt werden, deshalb sind sie als Optionen statt als harte
//! Invarianten ausgelegt.

use serde::{Deserialize, Serialize};

// ── Arc-Solver ──────────────────────────────────────────────────────

/// Maximal erlaubter Bogen-Durchmesser (Welteinheiten). Flachere Bögen
/// sind visuell von einer Geraden nicht unterscheidbar und werden als
/// Gerade behandelt.
pub const ARC_MAX_DIAMETER: f32 = 200.0;
/// Toleranz, innerhalb derer die Grob-Abtastung den Zwischenpunkt B treffen muss.
pub const ARC_MIDPOINT_TOLERANCE: f32 = 0.5;
/// Toleranz, innerhalb derer der letzte Abtast-Punkt den Endpunkt C treffen muss.
pub const ARC_ENDPOINT_TOLERANCE: f32 = 0.01;
/// Abtast-Punkte pro Flag-Kombination beim Brute-Force-Lösen.
pub const ARC_SOLVER_SAMPLES: usize = 100;
/// Punkt-Anzahl eines fertig gesampelten Bogens.
pub const ARC_SAMPLE_POINTS: usize = 20;

// ── Bézier ──────────────────────────────────────────────────────────

/// Abtast-Schritte für die Sehnen-Summen-Schätzung der Bogenlänge.
pub const BEZIER_LENGTH_SAMPLES: usize = 100;
/// Segment-Anzahl frisch konstruierter Bézier-Kurven (wird vor jedem
/// Sampeln aus der Ziel-Segment-Länge neu abgeleitet).
pub const BEZIER_DEFAULT_SEGMENTS: u32 = 20;

// ── Segment-Länge ───────────────────────────────────────────────────

/// Standard-Segment-Länge für Boden-Terrain.
pub const SEGMENT_LENGTH_GROUND: f32 = 3.0;
/// Standard-Segment-Länge für Roller-Terrain.
pub const SEGMENT_LENGTH_ROLLER: f32 = 1.5;
/// Untergrenze der Segment-Länge beim schrittweisen Verstellen.
pub const SEGMENT_LENGTH_MIN: f32 = 1.0;
/// Obergrenze der Segment-Länge beim schrittweisen Verstellen.
pub const SEGMENT_LENGTH_MAX: f32 = 10.0;
/// Schrittweite der Segment-Längen-Verstellung.
pub const SEGMENT_LENGTH_STEP: f32 = 0.5;

// ── Arc-Solver-Toleranzen (serialisierbar) ──────────────────────────

/// Toleranzen und Grenzen des Kreisbogen-Lösers.
///
/// Wird als Teil der `ShapeOptions` persistent gespeichert; die Engine
/// rechnet standardmäßig mit `ArcTolerances::default()`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArcTolerances {
    /// Ab diesem Durchmesser wird der Bogen als Gerade behandelt
    pub max_diameter: f32,
    /// Treffer-Radius um den Zwischenpunkt B
    pub midpoint_tolerance: f32,
    /// Treffer-Radius um den Endpunkt C
    pub endpoint_tolerance: f32,
    /// Abtast-Punkte pro Flag-Kombination beim Lösen
    pub solver_samples: usize,
    /// Punkt-Anzahl des fertigen Bogens
    pub sample_points: usize,
}

impl Default for ArcTolerances {
    fn default() -> Self {
        Self {
            max_diameter: ARC_MAX_DIAMETER,
            midpoint_tolerance: ARC_MIDPOINT_TOLERANCE,
            endpoint_tolerance: ARC_ENDPOINT_TOLERANCE,
            solver_samples: ARC_SOLVER_SAMPLES,
            sample_points: ARC_SAMPLE_POINTS,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird vom Host-Editor als TOML-Datei gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeOptions {
    /// Toleranzen des Kreisbogen-Lösers
    #[serde(default)]
    pub arc: ArcTolerances,
    /// Abtast-Schritte für die Bézier-Längenschätzung
    pub bezier_length_samples: usize,
    /// Standard-Segment-Länge für Boden-Terrain
    pub segment_length_ground: f32,
    /// Standard-Segment-Länge für Roller-Terrain
    pub segment_length_roller: f32,
    /// Untergrenze der Segment-Länge
    pub segment_length_min: f32,
    /// Obergrenze der Segment-Länge
    pub segment_length_max: f32,
    /// Schrittweite der Segment-Längen-Verstellung
    pub segment_length_step: f32,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            arc: ArcTolerances::default(),
            bezier_length_samples: BEZIER_LENGTH_SAMPLES,
            segment_length_ground: SEGMENT_LENGTH_GROUND,
            segment_length_roller: SEGMENT_LENGTH_ROLLER,
            segment_length_min: SEGMENT_LENGTH_MIN,
            segment_length_max: SEGMENT_LENGTH_MAX,
            segment_length_step: SEGMENT_LENGTH_STEP,
        }
    }
}

impl ShapeOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Engine-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Engine-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
