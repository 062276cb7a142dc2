//! Use-Case: Moduswechsel und Zeichnen von Raum- und Deckenpolygonen.

use crate::app::state::{InteractionMode, ModeKind};
use crate::app::AppState;
use crate::core::geometry::{distance, MIN_POLYGON_VERTICES};
use crate::core::{Point, Space};

/// Wechselt den Modus. Zeichnen einer Decke und Einfügen brauchen einen selektierten Raum.
pub fn set_mode(state: &mut AppState, kind: ModeKind) {
    let mode = match kind {
        ModeKind::Select => InteractionMode::Select,
        ModeKind::DrawSpace => InteractionMode::DrawSpace { points: Vec::new() },
        ModeKind::DrawScale => InteractionMode::DrawScale { first: None },
        ModeKind::DrawCeiling => {
            let Some(space_id) = state.selection.space_id else {
                state.set_status("Zuerst einen Raum auswählen");
                return;
            };
            InteractionMode::DrawCeiling {
                space_id,
                points: Vec::new(),
            }
        }
        ModeKind::InsertVertex => {
            if state.selected_space().is_none() {
                state.set_status("Zuerst einen Raum auswählen");
                return;
            }
            InteractionMode::InsertVertex
        }
    };
    log::debug!("Modus: {:?}", kind);
    state.enter_mode(mode);
}

/// Ob ein Klick an `pos` den Entwurf schließt (≥ 3 Punkte, nahe am ersten).
pub fn closes_draft(points: &[Point], pos: Point, close_threshold: f64) -> bool {
    points.len() >= MIN_POLYGON_VERTICES
        && points
            .first()
            .is_some_and(|first| distance(*first, pos) <= close_threshold)
}

/// Hängt einen Entwurfspunkt an.
pub fn add_draft_point(state: &mut AppState, pos: Point) {
    match &mut state.mode {
        InteractionMode::DrawSpace { points } | InteractionMode::DrawCeiling { points, .. } => {
            points.push(pos);
        }
        _ => log::debug!("Entwurfspunkt außerhalb eines Zeichenmodus ignoriert"),
    }
}

/// Schließt den Entwurf ab. Unter 3 Punkten: nur Statusmeldung, Modus bleibt.
pub fn finish_draft(state: &mut AppState) {
    let enough = state
        .mode
        .draft_points()
        .is_some_and(|p| p.len() >= MIN_POLYGON_VERTICES);
    if !enough {
        if state.mode.draft_points().is_some() {
            state.set_status("Mindestens 3 Punkte nötig");
        }
        return;
    }

    match std::mem::take(&mut state.mode) {
        InteractionMode::DrawSpace { points } => finish_space(state, points),
        InteractionMode::DrawCeiling { space_id, points } => {
            let factor = state.active_floor().scale_factor();
            match state.active_floor_mut().spaces.get_mut(&space_id) {
                Some(space) => {
                    space.ceiling.set_polygon(points);
                    space.recompute_derived(factor);
                    log::info!("Deckenpolygon für Raum {} gesetzt", space_id);
                }
                None => log::warn!("Raum {} für Decke nicht gefunden", space_id),
            }
            state.selection.select_space(space_id);
        }
        other => state.mode = other,
    }
}

fn finish_space(state: &mut AppState, points: Vec<Point>) {
    let Some(id) = state.project.allocate_space_id() else {
        log::warn!("Keine freie Raum-ID mehr, Raum wird nicht angelegt");
        return;
    };
    let Some(mut space) = Space::new(format!("Room {}", id), points) else {
        return;
    };
    space.ceiling.visible = state.options.ceiling_visible_default;

    log::info!(
        "Raum '{}' mit {} Eckpunkten angelegt",
        space.name,
        space.vertices().len()
    );
    state.active_floor_mut().add_space(id, space);
    state.selection.select_space(id);
}
