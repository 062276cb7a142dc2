//! Use-Case: Etagen anlegen, wechseln, löschen; Hintergrundbild setzen.

use crate::app::prompt::{prompt_non_empty, UserPrompt};
use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::project::default_floor_name;

/// Legt eine Etage an. Abbruch oder leerer Name → Standardname "Floor N".
pub fn add_floor(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    let default = default_floor_name(state.project.floors.len() + 1);
    let name = prompt_non_empty(prompt, "Name der neuen Etage", &default).unwrap_or(default);

    state.enter_mode(InteractionMode::Select);
    state.selection.clear();
    let index = state.project.add_floor(name);
    log::info!(
        "Etage '{}' angelegt ({} gesamt)",
        state.project.floors[index].name,
        state.project.floors.len()
    );
}

/// Wechselt die aktive Etage; Modus und Auswahl werden zurückgesetzt.
pub fn select_floor(state: &mut AppState, index: usize) {
    if index == state.project.active_floor {
        return;
    }
    if !state.project.set_active_floor(index) {
        log::warn!("Etage {} existiert nicht", index);
        return;
    }
    state.enter_mode(InteractionMode::Select);
    state.selection.clear();
}

/// Löscht eine Etage samt Räumen nach Bestätigung. Die letzte Etage bleibt.
pub fn delete_floor(state: &mut AppState, index: usize, prompt: &mut dyn UserPrompt) {
    if state.project.floors.len() <= 1 {
        state.set_status("Die letzte Etage kann nicht gelöscht werden");
        return;
    }
    let Some(floor) = state.project.floors.get(index) else {
        return;
    };
    let message = format!(
        "Etage '{}' mit {} Räumen löschen?",
        floor.name,
        floor.spaces.len()
    );
    if !prompt.confirm(&message) {
        return;
    }

    if let Some(removed) = state.project.remove_floor(index) {
        log::info!("Etage '{}' gelöscht", removed.name);
    }
    state.enter_mode(InteractionMode::Select);
    state.selection.clear();
}

/// Setzt den Hintergrundbild-Verweis der aktiven Etage (Laden erfolgt extern).
pub fn set_background(state: &mut AppState, path: Option<String>) {
    match &path {
        Some(p) => log::info!("Hintergrund gesetzt: {}", p),
        None => log::info!("Hintergrund entfernt"),
    }
    state.active_floor_mut().background = path;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt::CancelPrompt;

    struct Confirming;

    impl UserPrompt for Confirming {
        fn prompt_text(&mut self, _message: &str, _default: &str) -> Option<String> {
            Some("   ".to_string())
        }
        fn confirm(&mut self, _message: &str) -> bool {
            true
        }
    }

    #[test]
    fn cancelled_name_uses_default() {
        let mut state = AppState::new();
        add_floor(&mut state, &mut CancelPrompt);
        assert_eq!(state.active_floor().name, "Floor 2");

        add_floor(&mut state, &mut Confirming);
        assert_eq!(state.active_floor().name, "Floor 3");
    }

    #[test]
    fn last_floor_survives_delete() {
        let mut state = AppState::new();
        delete_floor(&mut state, 0, &mut Confirming);
        assert_eq!(state.project.floors.len(), 1);
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = AppState::new();
        add_floor(&mut state, &mut CancelPrompt);

        delete_floor(&mut state, 1, &mut CancelPrompt);
        assert_eq!(state.project.floors.len(), 2);

        delete_floor(&mut state, 1, &mut Confirming);
        assert_eq!(state.project.floors.len(), 1);
    }
}
