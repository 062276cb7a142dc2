//! Use-Case: Eigenschaften der selektierten Kante bzw. des selektierten Raums.
//!
//! Numerische Felder kommen als Freitext. Ungültige Eingaben setzen das Feld
//! auf "nicht gesetzt"; die Interaktion selbst wird nie abgelehnt.

use crate::app::events::{EdgeField, SpaceField};
use crate::app::state::VertexRef;
use crate::app::AppState;
use crate::core::numeric_input::{parse_non_negative, parse_quantity};
use crate::core::scale::{from_display_area, from_display_length};
use crate::core::{CompassDirection, Edge, Space, TypeRef, TypeSlot};

/// Wendet `apply` auf den selektierten Raum an und berechnet ihn neu.
fn with_selected_space(state: &mut AppState, apply: impl FnOnce(&mut Space)) {
    let factor = state.active_floor().scale_factor();
    let Some((_, space)) = state.selected_space_mut() else {
        log::debug!("Kein Raum selektiert, Eigenschaft ignoriert");
        return;
    };
    apply(space);
    space.recompute_derived(factor);
}

/// Wendet `apply` auf die selektierte Kante an und berechnet den Raum neu.
fn with_selected_edge(state: &mut AppState, apply: impl FnOnce(&mut Edge)) {
    let Some(edge_index) = state.selection.edge else {
        log::debug!("Keine Kante selektiert, Eigenschaft ignoriert");
        return;
    };
    with_selected_space(state, |space| {
        if let Some(edge) = space.edge_mut(edge_index) {
            apply(edge);
        }
    });
}

// ── Kanten ──────────────────────────────────────────────────────────

/// Außenwand-Flag
pub fn set_edge_exterior(state: &mut AppState, value: bool) {
    with_selected_edge(state, |edge| edge.is_exterior = value);
}

/// Numerisches Kantenfeld (Längen in Anzeigeeinheit).
pub fn set_edge_field(state: &mut AppState, field: EdgeField, input: &str) {
    let unit = state.options.display_unit;
    let length = parse_non_negative(input).map(|v| from_display_length(v, unit));
    if length.is_none() && !input.trim().is_empty() {
        log::warn!("Ungültige Eingabe für {:?}: '{}'", field, input);
    }

    with_selected_edge(state, |edge| match field {
        EdgeField::Height => edge.height = length,
        EdgeField::WindowWidth => edge.window_width = length,
        EdgeField::WindowHeight => edge.window_height = length,
        EdgeField::DoorQuantity => edge.door_quantity = parse_quantity(input),
    });
}

/// Himmelsrichtung
pub fn set_edge_direction(state: &mut AppState, direction: CompassDirection) {
    with_selected_edge(state, |edge| edge.direction = direction);
}

/// Tür-Flag
pub fn set_edge_doors(state: &mut AppState, value: bool) {
    with_selected_edge(state, |edge| edge.has_doors = value);
}

/// Typ-Referenz eines Slots
pub fn set_edge_type(state: &mut AppState, slot: TypeSlot, type_ref: Option<TypeRef>) {
    with_selected_edge(state, |edge| *edge.type_slot_mut(slot) = type_ref);
}

// ── Raum ────────────────────────────────────────────────────────────

/// Umbenennen; leere Namen werden ignoriert.
pub fn rename_space(state: &mut AppState, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        state.set_status("Raumname darf nicht leer sein");
        return;
    }
    with_selected_space(state, |space| space.name = name.to_string());
}

/// Numerisches Raumfeld (Höhe als Länge, Flächen quadratisch umgerechnet).
pub fn set_space_field(state: &mut AppState, field: SpaceField, input: &str) {
    let unit = state.options.display_unit;
    let parsed = parse_non_negative(input);
    if parsed.is_none() && !input.trim().is_empty() {
        log::warn!("Ungültige Eingabe für {:?}: '{}'", field, input);
    }

    with_selected_space(state, |space| match field {
        SpaceField::AverageCeilingHeight => {
            space.average_ceiling_height = parsed.map(|v| from_display_length(v, unit));
        }
        SpaceField::SkylightArea => {
            space.skylight_area = parsed.map(|v| from_display_area(v, unit));
        }
        SpaceField::CeilingManualArea => {
            space.ceiling.manual_area = parsed.map(|v| from_display_area(v, unit));
        }
    });
}

/// Oberlicht-Flag
pub fn set_skylight(state: &mut AppState, value: bool) {
    with_selected_space(state, |space| space.has_skylight = value);
}

/// Oberlichttyp
pub fn set_skylight_type(state: &mut AppState, type_ref: Option<TypeRef>) {
    with_selected_space(state, |space| space.skylight_type = type_ref);
}

// ── Decke ───────────────────────────────────────────────────────────

/// "Wie Boden"
pub fn set_ceiling_same_as_floor(state: &mut AppState, value: bool) {
    with_selected_space(state, |space| space.ceiling.same_as_floor = value);
}

/// Manuelle Fläche statt Polygon
pub fn set_ceiling_manual_override(state: &mut AppState, value: bool) {
    with_selected_space(state, |space| space.ceiling.manual_override = value);
}

/// Deckenpolygon ein-/ausblenden. Versteckte Decken sind nicht treffbar.
pub fn toggle_ceiling_visibility(state: &mut AppState) {
    with_selected_space(state, |space| space.ceiling.visible = !space.ceiling.visible);
    if matches!(state.selection.vertex, Some(VertexRef::Ceiling(_))) {
        state.selection.vertex = None;
    }
}

/// Verwirft das Deckenpolygon
pub fn clear_ceiling_polygon(state: &mut AppState) {
    with_selected_space(state, |space| space.ceiling.clear_polygon());
    if matches!(state.selection.vertex, Some(VertexRef::Ceiling(_))) {
        state.selection.vertex = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LengthUnit, Point};

    fn state_with_selected_edge() -> AppState {
        let mut state = AppState::new();
        let space = Space::new(
            "Room 1",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(0.0, 100.0),
            ],
        )
        .expect("Dreieck");
        state.active_floor_mut().add_space(1, space);
        state.selection.select_space(1);
        state.selection.edge = Some(0);
        state
    }

    fn edge0(state: &AppState) -> &Edge {
        &state.selected_space().expect("Raum").edges()[0]
    }

    #[test]
    fn invalid_input_clears_field() {
        let mut state = state_with_selected_edge();
        set_edge_field(&mut state, EdgeField::Height, "8");
        assert_eq!(edge0(&state).height, Some(8.0));

        set_edge_field(&mut state, EdgeField::Height, "acht");
        assert_eq!(edge0(&state).height, None);

        set_edge_field(&mut state, EdgeField::Height, "-2");
        assert_eq!(edge0(&state).height, None);
    }

    #[test]
    fn lengths_are_stored_internally() {
        let mut state = state_with_selected_edge();
        state.options.display_unit = LengthUnit::Inches;
        set_edge_field(&mut state, EdgeField::WindowWidth, "36");
        let width = edge0(&state).window_width.expect("Breite gesetzt");
        assert!((width - 3.0).abs() < 1e-12);
    }

    #[test]
    fn door_quantity_and_type_slots() {
        let mut state = state_with_selected_edge();
        set_edge_doors(&mut state, true);
        set_edge_field(&mut state, EdgeField::DoorQuantity, "2");
        set_edge_type(&mut state, TypeSlot::Door, Some(TypeRef("T-90".into())));

        let edge = edge0(&state);
        assert!(edge.has_doors);
        assert_eq!(edge.door_quantity, Some(2));
        assert_eq!(edge.door_type, Some(TypeRef("T-90".into())));
    }

    #[test]
    fn exterior_flag_updates_perimeter() {
        let mut state = state_with_selected_edge();
        state
            .active_floor_mut()
            .scale
            .set_reference(Point::ZERO, Point::new(10.0, 0.0));
        state.active_floor_mut().scale.set_declared_length(1.0);
        state.active_floor_mut().recompute_all();

        set_edge_exterior(&mut state, true);
        let space = state.selected_space().expect("Raum");
        assert!((space.exterior_perimeter() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn manual_ceiling_area_is_quadratic() {
        let mut state = state_with_selected_edge();
        state.options.display_unit = LengthUnit::Inches;
        set_space_field(&mut state, SpaceField::CeilingManualArea, "288");
        let space = state.selected_space().expect("Raum");
        let area = space.ceiling.manual_area.expect("Fläche gesetzt");
        assert!((area - 2.0).abs() < 1e-12);
    }
}
