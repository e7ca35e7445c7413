//! Integrationstests für den Regenerierungs-Zyklus:
//! - Plan-Größen-Gesetz (2N − 1) über alle Blueprint-Varianten
//! - Idempotenz bei unverändertem Blueprint
//! - Kontrollpunkt-Edit → Neuaufbau (simulierter Drag-Zyklus)
//! - Gerade-Rückfall entarteter Bögen

use glam::Vec3;
use terrain_shape_engine::{Blueprint, BlueprintKind, Placement, TerrainPart};

/// Zählt Nodes und Spans und prüft die strikte Abwechslung.
fn assert_alternating(placements: &[Placement]) -> (usize, usize) {
    let mut nodes = 0;
    let mut spans = 0;
    for (i, placement) in placements.iter().enumerate() {
        match placement {
            Placement::Node { .. } => {
                assert!(i % 2 == 0, "Node an Stelle {}", i);
                nodes += 1;
            }
            Placement::Span { .. } => {
                assert!(i % 2 == 1, "Span an Stelle {}", i);
                spans += 1;
            }
        }
    }
    (nodes, spans)
}

fn sample_parts() -> Vec<TerrainPart> {
    vec![
        TerrainPart::new(Blueprint::straight_line(
            Vec3::new(-3.0, 1.0, 0.0),
            Vec3::new(8.0, 4.0, 0.0),
        )),
        TerrainPart::new(Blueprint::bezier_cubic(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 25.0, 0.0),
            Vec3::new(30.0, 25.0, 0.0),
            Vec3::new(40.0, 0.0, 0.0),
        )),
        TerrainPart::new(Blueprint::circular_arc(
            Vec3::new(-6.0, 0.0, 0.0),
            Vec3::new(0.0, 6.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        )),
        // Entarteter Bogen: kollinear → Gerade [A, C]
        TerrainPart::new(Blueprint::circular_arc(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        )),
    ]
}

// ─── Plan-Größen-Gesetz ──────────────────────────────────────────────────────

#[test]
fn test_plan_size_law_for_all_variants() {
    for mut part in sample_parts() {
        let len = part.regenerate().len();
        let (nodes, spans) = assert_alternating(part.placements());
        assert_eq!(len, 2 * nodes - 1);
        assert_eq!(spans, nodes - 1);
        assert!(nodes >= 2);
    }
}

#[test]
fn test_line_always_yields_three_placements() {
    let mut part = TerrainPart::new(Blueprint::straight_line(
        Vec3::ZERO,
        Vec3::new(500.0, 0.0, 0.0),
    ));
    // Segment-Länge wirkt nicht auf Strecken — immer Node/Span/Node
    part.blueprint.set_segment_length(1.0);
    assert_eq!(part.regenerate().len(), 3);
}

#[test]
fn test_arc_yields_39_placements() {
    let mut part = TerrainPart::new(Blueprint::circular_arc(
        Vec3::new(-6.0, 0.0, 0.0),
        Vec3::new(0.0, 6.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
    ));
    // 20 Sample-Punkte → 39 Anweisungen
    assert_eq!(part.regenerate().len(), 39);
}

// ─── Idempotenz ──────────────────────────────────────────────────────────────

#[test]
fn test_regenerate_is_idempotent_without_edits() {
    for mut part in sample_parts() {
        let first: Vec<Placement> = part.regenerate().to_vec();
        let second: Vec<Placement> = part.regenerate().to_vec();
        assert_eq!(first, second);
    }
}

// ─── Edit-Zyklus ─────────────────────────────────────────────────────────────

#[test]
fn test_drag_cycle_keeps_plan_consistent() {
    // Simulierter Maus-Drag: Endpunkt einer Bézier-Kurve wandert in
    // Schritten nach außen, nach jedem Schritt wird regeneriert.
    let mut part = TerrainPart::new(Blueprint::bezier_cubic(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 10.0, 0.0),
        Vec3::new(15.0, 10.0, 0.0),
        Vec3::new(20.0, 0.0, 0.0),
    ));
    part.blueprint.set_segment_length(2.0);

    let mut last_nodes = 0;
    for step in 0..10 {
        let x = 20.0 + step as f32 * 8.0;
        part.blueprint
            .set_control_point(3, Vec3::new(x, 0.0, 0.0))
            .unwrap();
        part.regenerate();

        let (nodes, spans) = assert_alternating(part.placements());
        assert_eq!(spans, nodes - 1);
        assert!(nodes >= last_nodes, "Dichte darf beim Verlaengern nicht sinken");
        last_nodes = nodes;
    }
    // Die Kurve ist inzwischen deutlich länger als am Anfang
    assert!(last_nodes > 11);
}

#[test]
fn test_arc_degenerates_and_recovers_during_drag() {
    let mut part = TerrainPart::new(Blueprint::circular_arc(
        Vec3::new(-4.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
    ));
    assert_eq!(part.regenerate().len(), 39);

    // B auf die Sehne ziehen → Gerade [A, C] → 3 Anweisungen
    part.blueprint
        .set_control_point(1, Vec3::new(0.0, 0.0, 0.0))
        .unwrap();
    assert_eq!(part.regenerate().len(), 3);

    // und wieder zurück
    part.blueprint
        .set_control_point(1, Vec3::new(0.0, 4.0, 0.0))
        .unwrap();
    assert_eq!(part.regenerate().len(), 39);
}

// ─── Host-Sicht ──────────────────────────────────────────────────────────────

#[test]
fn test_spans_connect_consecutive_nodes() {
    let mut part = TerrainPart::new(Blueprint::bezier_cubic(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(8.0, 12.0, 0.0),
        Vec3::new(16.0, 12.0, 0.0),
        Vec3::new(24.0, 0.0, 0.0),
    ));
    part.regenerate();

    let placements = part.placements();
    for i in (1..placements.len()).step_by(2) {
        let Placement::Span {
            midpoint, length, ..
        } = placements[i]
        else {
            panic!("Stelle {} muss ein Span sein", i);
        };
        let Placement::Node { position: before } = placements[i - 1] else {
            panic!("Stelle {} muss ein Node sein", i - 1);
        };
        let Placement::Node { position: after } = placements[i + 1] else {
            panic!("Stelle {} muss ein Node sein", i + 1);
        };

        // Span-Geometrie ist exakt aus den Nachbar-Nodes abgeleitet
        assert!(midpoint.distance((before + after) * 0.5) < 1e-4);
        assert!((length - before.distance(after)).abs() < 1e-4);
    }
}

#[test]
fn test_blueprint_variant_is_fixed_after_construction() {
    let mut part = TerrainPart::new(Blueprint::circular_arc(
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ));
    part.regenerate();
    assert_eq!(part.blueprint.kind(), BlueprintKind::CircularArc);

    // Auch nach Edits bleibt die Variante dieselbe
    part.blueprint
        .set_control_point(0, Vec3::new(-3.0, 0.0, 0.0))
        .unwrap();
    part.regenerate();
    assert_eq!(part.blueprint.kind(), BlueprintKind::CircularArc);
}
