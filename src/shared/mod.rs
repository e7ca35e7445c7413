//! Geteilte, layer-neutrale Bausteine: Optionen und reine Ebenen-Geometrie.
//!
//! Enthält keine Domänentypen — nur Helfer, die von `core` und vom
//! umgebenden Editor gleichermaßen importiert werden können, ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

pub mod options;
pub mod plane_geometry;

pub use options::{ArcTolerances, ShapeOptions};
pub use options::{
    BEZIER_DEFAULT_SEGMENTS, BEZIER_LENGTH_SAMPLES, SEGMENT_LENGTH_GROUND, SEGMENT_LENGTH_MAX,
    SEGMENT_LENGTH_MIN, SEGMENT_LENGTH_ROLLER, SEGMENT_LENGTH_STEP,
};
