//! Handler für Hover, Selektion und Drag.

use crate::app::state::VertexRef;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Point, SpaceId};

/// Aktualisiert das Hover-Ziel an der Zeigerposition.
pub fn update_hover(state: &mut AppState, pos: Point) {
    use_cases::selection::update_hover(state, pos);
}

/// Selektiert einen Raum.
pub fn select_space(state: &mut AppState, space_id: SpaceId) {
    use_cases::selection::select_space(state, space_id);
}

/// Selektiert einen Eckpunkt.
pub fn select_vertex(state: &mut AppState, vertex: VertexRef) {
    use_cases::selection::select_vertex(state, vertex);
}

/// Selektiert eine Kante.
pub fn select_edge(state: &mut AppState, edge_index: usize) {
    use_cases::selection::select_edge(state, edge_index);
}

/// Hebt die Auswahl auf und bricht einen laufenden Drag ab.
pub fn clear(state: &mut AppState) {
    state.drag = None;
    use_cases::selection::clear_selection(state);
}

/// Navigiert zu einem Raum.
pub fn focus_space(state: &mut AppState, space_id: SpaceId) {
    use_cases::selection::focus_space(state, space_id);
}

/// Beginnt einen Drag.
pub fn begin_drag(state: &mut AppState, pos: Point) {
    use_cases::drag::begin_drag(state, pos);
}

/// Setzt einen Drag fort.
pub fn drag_to(state: &mut AppState, pos: Point) {
    use_cases::drag::drag_to(state, pos);
}

/// Beendet einen Drag; das Hover-Ziel wird auf die neue Geometrie bezogen.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
    if let Some(pos) = state.selection.hover_pos {
        use_cases::selection::update_hover(state, pos);
    }
}
