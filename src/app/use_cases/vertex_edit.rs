//! Use-Case: Eckpunkte einfügen/löschen und Räume löschen.

use crate::app::prompt::UserPrompt;
use crate::app::state::VertexRef;
use crate::app::AppState;
use crate::core::Point;

/// Fügt auf Kante `edge_index` des selektierten Raums (oder seiner Decke) einen Eckpunkt ein.
pub fn insert_vertex(state: &mut AppState, on_ceiling: bool, edge_index: usize, pos: Point) {
    let factor = state.active_floor().scale_factor();
    let Some((space_id, space)) = state.selected_space_mut() else {
        return;
    };

    let inserted = if on_ceiling {
        space.ceiling.insert_vertex(edge_index, pos)
    } else {
        space.insert_vertex(edge_index, pos)
    };
    let Some(new_index) = inserted else {
        log::warn!("Kante {} existiert nicht, kein Eckpunkt eingefügt", edge_index);
        return;
    };
    space.recompute_derived(factor);

    log::info!(
        "Eckpunkt {} in Raum {} eingefügt ({})",
        new_index,
        space_id,
        if on_ceiling { "Decke" } else { "Raum" }
    );
    state.selection.vertex = Some(if on_ceiling {
        VertexRef::Ceiling(new_index)
    } else {
        VertexRef::Space(new_index)
    });
    state.selection.edge = None;
}

/// Löscht den selektierten Eckpunkt. Unter 3 Punkte: abgelehnt, nur Statusmeldung.
pub fn delete_selected_vertex(state: &mut AppState) {
    let Some(vertex) = state.selection.vertex else {
        return;
    };
    let factor = state.active_floor().scale_factor();
    let Some((space_id, space)) = state.selected_space_mut() else {
        return;
    };

    let deleted = match vertex {
        VertexRef::Space(i) => space.delete_vertex(i),
        VertexRef::Ceiling(i) => space.ceiling.delete_vertex(i),
    };
    if !deleted {
        log::warn!("Eckpunkt-Löschung in Raum {} abgelehnt", space_id);
        state.set_status("Ein Polygon braucht mindestens 3 Eckpunkte");
        return;
    }
    space.recompute_derived(factor);
    log::info!("Eckpunkt {:?} aus Raum {} gelöscht", vertex, space_id);

    state.selection.vertex = None;
    state.selection.edge = None;
}

/// Löscht den selektierten Raum nach Bestätigung.
pub fn delete_selected_space(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    let Some(space) = state.selected_space() else {
        return;
    };
    let message = format!("Raum '{}' löschen?", space.name);
    if !prompt.confirm(&message) {
        log::info!("Löschen des Raums abgebrochen");
        return;
    }

    let Some(space_id) = state.selection.space_id else {
        return;
    };
    if let Some(removed) = state.active_floor_mut().remove_space(space_id) {
        log::info!("Raum '{}' gelöscht", removed.name);
    }
    state.drag = None;
    state.selection.clear();
}
