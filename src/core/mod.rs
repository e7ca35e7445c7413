//! Kern-Domänentypen: Kurven-Primitiven, Blueprint und Platzierungs-Generierung.

pub mod arc;
pub mod bezier;
pub mod blueprint;
pub mod line;
pub mod part;

pub use arc::{ArcClassification, CircleGeometry, CircularArc};
pub use bezier::CubicBezier;
pub use blueprint::{Blueprint, BlueprintKind};
pub use line::StraightLine;
pub use part::{Placement, TerrainPart, build_placements};
