//! Handler für Etagen.

use crate::app::prompt::UserPrompt;
use crate::app::use_cases;
use crate::app::AppState;

/// Legt eine Etage an.
pub fn add(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    use_cases::floors::add_floor(state, prompt);
}

/// Wechselt die aktive Etage.
pub fn select(state: &mut AppState, index: usize) {
    use_cases::floors::select_floor(state, index);
}

/// Löscht eine Etage.
pub fn delete(state: &mut AppState, index: usize, prompt: &mut dyn UserPrompt) {
    use_cases::floors::delete_floor(state, index, prompt);
}

/// Setzt den Hintergrund der aktiven Etage.
pub fn set_background(state: &mut AppState, path: Option<String>) {
    use_cases::floors::set_background(state, path);
}
