//! Terrain-Shape-Engine des 2D-Level-Editors.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.
//!
//! Der Editor liefert Kontrollpunkte (Maus-Eingabe) und eine gewünschte
//! Segment-Länge; die Engine liefert dafür Platzierungs-Anweisungen
//! (`Placement`), aus denen der Host seine physischen Objekte instanziiert.

pub mod core;
pub mod shared;

pub use core::{
    ArcClassification, Blueprint, BlueprintKind, CircularArc, CubicBezier, Placement,
    StraightLine, TerrainPart, build_placements,
};
pub use shared::{ArcTolerances, ShapeOptions};
