//! Handler für Kanten-, Raum- und Decken-Eigenschaften.

use crate::app::events::{EdgeField, SpaceField};
use crate::app::use_cases::properties;
use crate::app::AppState;
use crate::core::{CompassDirection, TypeRef, TypeSlot};

/// Außenwand-Flag der selektierten Kante.
pub fn set_edge_exterior(state: &mut AppState, value: bool) {
    properties::set_edge_exterior(state, value);
}

/// Numerisches Kantenfeld aus Freitext.
pub fn set_edge_field(state: &mut AppState, field: EdgeField, input: &str) {
    properties::set_edge_field(state, field, input);
}

/// Himmelsrichtung der selektierten Kante.
pub fn set_edge_direction(state: &mut AppState, direction: CompassDirection) {
    properties::set_edge_direction(state, direction);
}

/// Tür-Flag der selektierten Kante.
pub fn set_edge_doors(state: &mut AppState, value: bool) {
    properties::set_edge_doors(state, value);
}

/// Typ-Referenz der selektierten Kante.
pub fn set_edge_type(state: &mut AppState, slot: TypeSlot, type_ref: Option<TypeRef>) {
    properties::set_edge_type(state, slot, type_ref);
}

/// Raum umbenennen.
pub fn rename_space(state: &mut AppState, name: &str) {
    properties::rename_space(state, name);
}

/// Numerisches Raumfeld aus Freitext.
pub fn set_space_field(state: &mut AppState, field: SpaceField, input: &str) {
    properties::set_space_field(state, field, input);
}

/// Oberlicht-Flag.
pub fn set_skylight(state: &mut AppState, value: bool) {
    properties::set_skylight(state, value);
}

/// Oberlichttyp.
pub fn set_skylight_type(state: &mut AppState, type_ref: Option<TypeRef>) {
    properties::set_skylight_type(state, type_ref);
}

/// Decke "wie Boden".
pub fn set_ceiling_same_as_floor(state: &mut AppState, value: bool) {
    properties::set_ceiling_same_as_floor(state, value);
}

/// Decke mit manueller Fläche.
pub fn set_ceiling_manual_override(state: &mut AppState, value: bool) {
    properties::set_ceiling_manual_override(state, value);
}

/// Deckenpolygon ein-/ausblenden.
pub fn toggle_ceiling_visibility(state: &mut AppState) {
    properties::toggle_ceiling_visibility(state);
}

/// Deckenpolygon verwerfen.
pub fn clear_ceiling_polygon(state: &mut AppState) {
    properties::clear_ceiling_polygon(state);
}
