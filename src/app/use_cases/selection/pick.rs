//! Use-Case: Selektion per Klick und Hover-Aktualisierung.

use super::hit_test::hit_test;
use crate::app::state::{InteractionMode, VertexRef};
use crate::app::AppState;
use crate::core::{Point, SpaceId};

/// Berechnet das Hover-Ziel an `pos` (einmal pro Zeigerbewegung).
pub fn update_hover(state: &mut AppState, pos: Point) {
    let insert_mode = matches!(state.mode, InteractionMode::InsertVertex);
    let target = hit_test(
        state.active_floor(),
        state.selection.space_id,
        pos,
        state.options.hit_radii(),
        insert_mode,
    );
    if target != state.selection.hover_target {
        log::debug!("Hover-Ziel: {:?}", target);
    }
    state.selection.hover_target = target;
    state.selection.hover_pos = Some(pos);
}

/// Selektiert einen Raum der aktiven Etage.
pub fn select_space(state: &mut AppState, space_id: SpaceId) {
    if !state.active_floor().spaces.contains_key(&space_id) {
        log::warn!("Raum {} nicht in aktiver Etage", space_id);
        return;
    }
    state.selection.select_space(space_id);
    // Hover bezog sich auf den alten Raum
    if let Some(pos) = state.selection.hover_pos {
        update_hover(state, pos);
    }
}

/// Selektiert einen Eckpunkt des selektierten Raums (Kantenauswahl entfällt).
pub fn select_vertex(state: &mut AppState, vertex: VertexRef) {
    let Some(space) = state.selected_space() else {
        return;
    };
    let valid = match vertex {
        VertexRef::Space(i) => i < space.vertices().len(),
        VertexRef::Ceiling(i) => i < space.ceiling.vertices().len(),
    };
    if !valid {
        return;
    }
    state.selection.vertex = Some(vertex);
    state.selection.edge = None;
}

/// Selektiert eine Kante des selektierten Raums (Eckpunktauswahl entfällt).
pub fn select_edge(state: &mut AppState, edge_index: usize) {
    let Some(space) = state.selected_space() else {
        return;
    };
    if edge_index >= space.edges().len() {
        return;
    }
    state.selection.edge = Some(edge_index);
    state.selection.vertex = None;
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Wechselt auf die Etage des Raums und selektiert ihn.
pub fn focus_space(state: &mut AppState, space_id: SpaceId) {
    let Some((floor_index, _)) = state.project.find_space(space_id) else {
        state.set_status(format!("Raum {} existiert nicht mehr", space_id));
        return;
    };
    if floor_index != state.project.active_floor {
        state.enter_mode(InteractionMode::Select);
        state.project.set_active_floor(floor_index);
    }
    state.selection.select_space(space_id);
    log::info!("Fokus auf Raum {} (Etage {})", space_id, floor_index + 1);
}
