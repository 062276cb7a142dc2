//! Handler für Maßstab und Anzeigeeinheit.

use crate::app::prompt::UserPrompt;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LengthUnit, Point};

/// Setzt einen Punkt der Referenzstrecke.
pub fn add_scale_point(state: &mut AppState, pos: Point, prompt: &mut dyn UserPrompt) {
    use_cases::scale::add_scale_point(state, pos, prompt);
}

/// Fragt die reale Länge erneut ab.
pub fn prompt_length(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    if state.active_floor().scale.reference.is_none() {
        state.set_status("Zuerst eine Referenzstrecke zeichnen");
        return;
    }
    use_cases::scale::prompt_declared_length(state, prompt);
}

/// Blendet die Referenzstrecke ein/aus.
pub fn toggle_overlay(state: &mut AppState) {
    use_cases::scale::toggle_overlay(state);
}

/// Setzt die globale Anzeigeeinheit. Gespeicherte Werte bleiben unverändert.
pub fn set_display_unit(state: &mut AppState, unit: LengthUnit) {
    state.options.display_unit = unit;
    log::info!("Anzeigeeinheit: {}", unit.suffix());
}
