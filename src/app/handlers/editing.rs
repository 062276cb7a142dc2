//! Handler für Modus, Zeichnen und Strukturänderungen an Polygonen.

use crate::app::prompt::UserPrompt;
use crate::app::state::ModeKind;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Bezieht das Hover-Ziel nach einer Geometrieänderung neu.
fn refresh_hover(state: &mut AppState) {
    if let Some(pos) = state.selection.hover_pos {
        use_cases::selection::update_hover(state, pos);
    }
}

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: ModeKind) {
    use_cases::drawing::set_mode(state, mode);
    refresh_hover(state);
}

/// Hängt einen Entwurfspunkt an.
pub fn add_draft_point(state: &mut AppState, pos: Point) {
    use_cases::drawing::add_draft_point(state, pos);
}

/// Schließt den laufenden Entwurf ab.
pub fn finish_draft(state: &mut AppState) {
    use_cases::drawing::finish_draft(state);
    refresh_hover(state);
}

/// Fügt einen Eckpunkt auf einer Kante ein.
pub fn insert_vertex(state: &mut AppState, on_ceiling: bool, edge_index: usize, pos: Point) {
    use_cases::vertex_edit::insert_vertex(state, on_ceiling, edge_index, pos);
    refresh_hover(state);
}

/// Löscht den selektierten Eckpunkt.
pub fn delete_selected_vertex(state: &mut AppState) {
    use_cases::vertex_edit::delete_selected_vertex(state);
    refresh_hover(state);
}

/// Löscht den selektierten Raum (mit Bestätigung).
pub fn delete_selected_space(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    use_cases::vertex_edit::delete_selected_space(state, prompt);
    refresh_hover(state);
}
