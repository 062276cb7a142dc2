//! Use-Case: Maßstab kalibrieren (Referenzstrecke + reale Länge).

use crate::app::prompt::UserPrompt;
use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::numeric_input::parse_non_negative;
use crate::core::scale::{from_display_length, to_display_length};
use crate::core::Point;

/// Setzt einen Punkt der Referenzstrecke.
///
/// Der zweite Punkt schließt die Strecke ab; fehlt noch eine reale Länge,
/// wird sie sofort abgefragt.
pub fn add_scale_point(state: &mut AppState, pos: Point, prompt: &mut dyn UserPrompt) {
    let InteractionMode::DrawScale { first } = &mut state.mode else {
        return;
    };
    let Some(p1) = *first else {
        *first = Some(pos);
        return;
    };

    state.enter_mode(InteractionMode::Select);
    let scale = &mut state.active_floor_mut().scale;
    scale.set_reference(p1, pos);
    log::info!("Referenzstrecke gesetzt: {:.1} px", scale.pixel_length);

    if !state.active_floor().scale.has_declared_length() {
        prompt_declared_length(state, prompt);
    }
    state.active_floor_mut().recompute_all();
}

/// Fragt die reale Länge (Anzeigeeinheit) ab.
///
/// Abbruch oder ungültige Eingabe lassen den bisherigen Wert unverändert.
pub fn prompt_declared_length(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    let unit = state.options.display_unit;
    let current = &state.active_floor().scale;
    let default = if current.has_declared_length() {
        format!("{}", to_display_length(current.declared_length, unit))
    } else {
        String::new()
    };
    let message = format!("Reale Länge der Referenzstrecke ({})", unit.suffix());

    let answer = prompt.prompt_text(&message, &default);
    let Some(value) = answer.as_deref().and_then(parse_non_negative) else {
        log::warn!("Referenzlänge nicht gesetzt (abgebrochen oder ungültig)");
        state.set_status("Referenzlänge unverändert");
        return;
    };

    if state
        .active_floor_mut()
        .scale
        .set_declared_length(from_display_length(value, unit))
    {
        state.active_floor_mut().recompute_all();
        log::info!(
            "Maßstab kalibriert: {:.6} ft/px",
            state.active_floor().scale_factor()
        );
    } else {
        state.set_status("Referenzlänge muss größer als 0 sein");
    }
}

/// Blendet die Referenzstrecke ein/aus.
pub fn toggle_overlay(state: &mut AppState) {
    let scale = &mut state.active_floor_mut().scale;
    scale.overlay_visible = !scale.overlay_visible;
}
