//! Use-Case: Hit-Test mit fester Priorität gegen den selektierten Raum.
//!
//! Reihenfolge:
//! 1. Decken-Eckpunkt (nur wenn die Decke angezeigt wird)
//! 2. Raum-Eckpunkt
//! 3. Decken-Kante (nur im Einfügemodus)
//! 4. Raum-Kante (global nächste, nicht erste Kante)
//! 5. Innenfläche
//! 6. anderer Raum / Hintergrund
//!
//! Andere Räume werden nie für Bearbeitungen getestet, nur für
//! Selektion und Cursor.

use crate::app::state::{HitTarget, InteractionMode};
use crate::core::geometry::{boundary_distance, distance, segment_distance, Point};
use crate::core::{Floor, SpaceId};
use crate::shared::options::HitRadii;

/// Cursor-Darstellung, rein präsentational
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Standard-Pfeil
    #[default]
    Default,
    /// Fadenkreuz (Zeichenmodi)
    Crosshair,
    /// Verschieben
    Move,
    /// Klickbar (Kante, anderer Raum)
    Pointer,
    /// Punkt einfügen
    InsertPoint,
}

/// Index des nächsten Eckpunkts innerhalb `radius`.
fn closest_vertex(vertices: &[Point], pos: Point, radius: f64) -> Option<usize> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (i, distance(*v, pos)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Index der global nächsten Kante innerhalb `buffer`.
fn closest_edge(vertices: &[Point], pos: Point, buffer: f64) -> Option<usize> {
    let n = vertices.len();
    if n < 2 {
        return None;
    }
    (0..n)
        .map(|i| (i, segment_distance(pos, vertices[i], vertices[(i + 1) % n])))
        .filter(|(_, d)| *d <= buffer)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Bestimmt das Ziel an `pos` nach fester Priorität.
pub fn hit_test(
    floor: &Floor,
    selected: Option<SpaceId>,
    pos: Point,
    radii: HitRadii,
    insert_mode: bool,
) -> HitTarget {
    if let Some(space) = selected.and_then(|id| floor.spaces.get(&id)) {
        let ceiling_shown = space.ceiling.is_shown();

        if ceiling_shown {
            if let Some(i) = closest_vertex(space.ceiling.vertices(), pos, radii.vertex) {
                return HitTarget::CeilingVertex(i);
            }
        }
        if let Some(i) = closest_vertex(space.vertices(), pos, radii.vertex) {
            return HitTarget::SpaceVertex(i);
        }
        if insert_mode && ceiling_shown {
            if let Some(i) = closest_edge(space.ceiling.vertices(), pos, radii.edge) {
                return HitTarget::CeilingEdge(i);
            }
        }
        if let Some(i) = closest_edge(space.vertices(), pos, radii.edge) {
            return HitTarget::SpaceEdge(i);
        }
        if space.contains_point(pos) {
            return HitTarget::Interior;
        }
    }

    match floor.space_at(pos) {
        Some(id) if Some(id) != selected => HitTarget::OtherSpace(id),
        _ => HitTarget::Background,
    }
}

/// Ob ein Klick auf den Hintergrund die Auswahl aufheben darf.
///
/// Nein, solange der Zeiger in einem Raum liegt oder noch innerhalb des
/// Kanten-Fangabstands des selektierten Raums.
pub fn should_deselect(
    floor: &Floor,
    selected: Option<SpaceId>,
    pos: Point,
    radii: HitRadii,
) -> bool {
    if floor.space_at(pos).is_some() {
        return false;
    }
    let near_selected = selected
        .and_then(|id| floor.spaces.get(&id))
        .and_then(|space| boundary_distance(pos, space.vertices()))
        .is_some_and(|d| d <= radii.edge);
    !near_selected
}

/// Cursor für Modus und Hover-Ziel.
pub fn cursor_for(mode: &InteractionMode, hit: HitTarget) -> CursorIcon {
    match mode {
        InteractionMode::DrawSpace { .. }
        | InteractionMode::DrawCeiling { .. }
        | InteractionMode::DrawScale { .. } => CursorIcon::Crosshair,
        InteractionMode::InsertVertex => match hit {
            HitTarget::SpaceEdge(_) | HitTarget::CeilingEdge(_) => CursorIcon::InsertPoint,
            _ => CursorIcon::Default,
        },
        InteractionMode::Select => match hit {
            target if target.is_movable() => CursorIcon::Move,
            HitTarget::SpaceEdge(_) | HitTarget::CeilingEdge(_) | HitTarget::OtherSpace(_) => {
                CursorIcon::Pointer
            }
            _ => CursorIcon::Default,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Space;

    fn floor_with_square() -> Floor {
        let mut floor = Floor::new("EG");
        let space = Space::new(
            "Room 1",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        )
        .expect("Quadrat");
        floor.add_space(1, space);
        floor
    }

    fn radii() -> HitRadii {
        HitRadii {
            vertex: 8.0,
            edge: 5.0,
        }
    }

    #[test]
    fn vertex_wins_over_edge_at_corner() {
        let floor = floor_with_square();
        let hit = hit_test(&floor, Some(1), Point::new(3.0, 2.0), radii(), false);
        assert_eq!(hit, HitTarget::SpaceVertex(0));
    }

    #[test]
    fn globally_closest_edge_is_chosen() {
        let mut floor = Floor::new("EG");
        // Schmaler Raum: obere und untere Kante beide im Fangabstand
        let space = Space::new(
            "Flur",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 6.0),
                Point::new(0.0, 6.0),
            ],
        )
        .expect("Flur");
        floor.add_space(1, space);

        let hit = hit_test(&floor, Some(1), Point::new(50.0, 4.0), radii(), false);
        assert_eq!(hit, HitTarget::SpaceEdge(2));
    }

    #[test]
    fn interior_and_background() {
        let floor = floor_with_square();
        assert_eq!(
            hit_test(&floor, Some(1), Point::new(50.0, 50.0), radii(), false),
            HitTarget::Interior
        );
        assert_eq!(
            hit_test(&floor, Some(1), Point::new(150.0, 50.0), radii(), false),
            HitTarget::Background
        );
    }

    #[test]
    fn unselected_space_is_only_other_space() {
        let floor = floor_with_square();
        assert_eq!(
            hit_test(&floor, None, Point::new(1.0, 1.0), radii(), false),
            HitTarget::OtherSpace(1)
        );
    }

    #[test]
    fn ceiling_vertex_beats_space_vertex_only_when_visible() {
        let mut floor = floor_with_square();
        let space = floor.spaces.get_mut(&1).expect("Raum 1");
        space.ceiling.set_polygon(vec![
            Point::new(2.0, 2.0),
            Point::new(60.0, 2.0),
            Point::new(2.0, 60.0),
        ]);

        let pos = Point::new(1.0, 1.0);
        assert_eq!(
            hit_test(&floor, Some(1), pos, radii(), false),
            HitTarget::CeilingVertex(0)
        );

        floor.spaces.get_mut(&1).expect("Raum 1").ceiling.visible = false;
        assert_eq!(
            hit_test(&floor, Some(1), pos, radii(), false),
            HitTarget::SpaceVertex(0)
        );
    }

    #[test]
    fn ceiling_edge_only_in_insert_mode() {
        let mut floor = floor_with_square();
        floor.spaces.get_mut(&1).expect("Raum 1").ceiling.set_polygon(vec![
            Point::new(20.0, 20.0),
            Point::new(80.0, 20.0),
            Point::new(80.0, 80.0),
        ]);

        let pos = Point::new(50.0, 22.0);
        assert_eq!(
            hit_test(&floor, Some(1), pos, radii(), true),
            HitTarget::CeilingEdge(0)
        );
        assert_eq!(
            hit_test(&floor, Some(1), pos, radii(), false),
            HitTarget::Interior
        );
    }

    #[test]
    fn deselect_is_gated_by_edge_buffer() {
        let floor = floor_with_square();
        assert!(!should_deselect(&floor, Some(1), Point::new(103.0, 50.0), radii()));
        assert!(should_deselect(&floor, Some(1), Point::new(120.0, 50.0), radii()));
        assert!(!should_deselect(&floor, Some(1), Point::new(50.0, 50.0), radii()));
    }

    #[test]
    fn cursor_follows_mode_and_target() {
        assert_eq!(
            cursor_for(&InteractionMode::Select, HitTarget::Interior),
            CursorIcon::Move
        );
        assert_eq!(
            cursor_for(&InteractionMode::Select, HitTarget::SpaceEdge(0)),
            CursorIcon::Pointer
        );
        assert_eq!(
            cursor_for(&InteractionMode::InsertVertex, HitTarget::SpaceEdge(0)),
            CursorIcon::InsertPoint
        );
        assert_eq!(
            cursor_for(&InteractionMode::DrawScale { first: None }, HitTarget::Background),
            CursorIcon::Crosshair
        );
    }
}
