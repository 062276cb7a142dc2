//! Use-Case: Verschieben von Eckpunkten oder ganzen Räumen per Drag.
//!
//! Ein Drag startet nur, wenn das Hover-Ziel bereits ein verschiebbares Ziel
//! anzeigte; diese Prüfung liegt im Intent-Mapping.

use crate::app::state::{DragState, DragTarget, HitTarget};
use crate::app::AppState;
use crate::core::Point;

/// Beginnt einen Drag auf dem aktuellen Hover-Ziel.
pub fn begin_drag(state: &mut AppState, pos: Point) {
    let Some(space_id) = state.selection.space_id else {
        return;
    };
    let target = match state.selection.hover_target {
        HitTarget::SpaceVertex(i) => DragTarget::SpaceVertex(i),
        HitTarget::CeilingVertex(i) => DragTarget::CeilingVertex(i),
        HitTarget::Interior => DragTarget::WholeSpace,
        other => {
            log::debug!("Kein Drag auf {:?}", other);
            return;
        }
    };
    log::debug!("Drag beginnt: {:?}", target);
    state.drag = Some(DragState {
        space_id,
        target,
        last_pos: pos,
    });
}

/// Setzt den Drag fort und berechnet den Raum neu.
pub fn drag_to(state: &mut AppState, pos: Point) {
    let Some(drag) = state.drag else {
        return;
    };
    let delta = pos - drag.last_pos;
    let factor = state.active_floor().scale_factor();
    let Some(space) = state.active_floor_mut().spaces.get_mut(&drag.space_id) else {
        state.drag = None;
        return;
    };

    match drag.target {
        DragTarget::SpaceVertex(i) => {
            space.move_vertex(i, pos);
        }
        DragTarget::CeilingVertex(i) => {
            space.ceiling.move_vertex(i, pos);
        }
        DragTarget::WholeSpace => space.translate(delta),
    }
    space.recompute_derived(factor);

    if let Some(active) = state.drag.as_mut() {
        active.last_pos = pos;
    }
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(drag) = state.drag.take() {
        log::debug!("Drag beendet: {:?}", drag.target);
    }
}
