//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Liest den State nur; alle Hit-Tests für Zeiger-Eingaben passieren hier,
//! damit die Commands eindeutig sind.

use super::state::{HitTarget, InteractionMode, ModeKind, VertexRef};
use super::use_cases::drawing::closes_draft;
use super::use_cases::selection::{hit_test, should_deselect};
use super::{AppCommand, AppIntent, AppState};
use crate::core::Point;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { pos } => {
            let mut commands = Vec::with_capacity(2);
            if state.drag.is_some() {
                commands.push(AppCommand::DragTo { pos });
            }
            commands.push(AppCommand::UpdateHover { pos });
            commands
        }
        AppIntent::PointerPressed { pos } => map_pointer_pressed(state, pos),
        AppIntent::PointerReleased { .. } => {
            if state.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }

        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::CancelRequested => vec![AppCommand::SetMode {
            mode: ModeKind::Select,
        }],
        AppIntent::FinishDrawingRequested => match state.mode {
            InteractionMode::DrawSpace { .. } | InteractionMode::DrawCeiling { .. } => {
                vec![AppCommand::FinishDraft]
            }
            _ => vec![],
        },
        AppIntent::DeleteRequested => {
            if !matches!(state.mode, InteractionMode::Select) {
                vec![]
            } else if state.selection.vertex.is_some() {
                vec![AppCommand::DeleteSelectedVertex]
            } else if state.selection.space_id.is_some() {
                vec![AppCommand::DeleteSelectedSpace]
            } else {
                vec![]
            }
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::EditScaleLengthRequested => vec![AppCommand::PromptScaleLength],
        AppIntent::ToggleScaleOverlayRequested => vec![AppCommand::ToggleScaleOverlay],
        AppIntent::SetDisplayUnitRequested { unit } => vec![AppCommand::SetDisplayUnit { unit }],

        AppIntent::SetEdgeExteriorRequested { value } => {
            vec![AppCommand::SetEdgeExterior { value }]
        }
        AppIntent::SetEdgeFieldRequested { field, input } => {
            vec![AppCommand::SetEdgeField { field, input }]
        }
        AppIntent::SetEdgeDirectionRequested { direction } => {
            vec![AppCommand::SetEdgeDirection { direction }]
        }
        AppIntent::SetEdgeDoorsRequested { value } => vec![AppCommand::SetEdgeDoors { value }],
        AppIntent::SetEdgeTypeRequested { slot, type_ref } => {
            vec![AppCommand::SetEdgeType { slot, type_ref }]
        }

        AppIntent::RenameSpaceRequested { name } => vec![AppCommand::RenameSpace { name }],
        AppIntent::SetSpaceFieldRequested { field, input } => {
            vec![AppCommand::SetSpaceField { field, input }]
        }
        AppIntent::SetSkylightRequested { value } => vec![AppCommand::SetSkylight { value }],
        AppIntent::SetSkylightTypeRequested { type_ref } => {
            vec![AppCommand::SetSkylightType { type_ref }]
        }

        AppIntent::SetCeilingSameAsFloorRequested { value } => {
            vec![AppCommand::SetCeilingSameAsFloor { value }]
        }
        AppIntent::SetCeilingManualOverrideRequested { value } => {
            vec![AppCommand::SetCeilingManualOverride { value }]
        }
        AppIntent::ToggleCeilingVisibilityRequested => vec![AppCommand::ToggleCeilingVisibility],
        AppIntent::ClearCeilingPolygonRequested => vec![AppCommand::ClearCeilingPolygon],

        AppIntent::AddFloorRequested => vec![AppCommand::AddFloor],
        AppIntent::SelectFloorRequested { index } => vec![AppCommand::SelectFloor { index }],
        AppIntent::DeleteFloorRequested { index } => vec![AppCommand::DeleteFloor { index }],
        AppIntent::SetBackgroundRequested { path } => vec![AppCommand::SetBackground { path }],

        AppIntent::ValidateAllRequested => vec![AppCommand::ValidateAll],
        AppIntent::FocusSpaceRequested { space_id } => vec![AppCommand::FocusSpace { space_id }],
        AppIntent::ExportRequested { path } => vec![AppCommand::Export { path }],

        AppIntent::SaveRequested { path } => vec![AppCommand::SaveProject { path }],
        AppIntent::LoadRequested { path } => vec![AppCommand::LoadProject { path }],
    }
}

/// Maustaste gedrückt: Auswertung je nach Modus.
fn map_pointer_pressed(state: &AppState, pos: Point) -> Vec<AppCommand> {
    match &state.mode {
        InteractionMode::DrawSpace { points } | InteractionMode::DrawCeiling { points, .. } => {
            if closes_draft(points, pos, state.options.close_threshold_px) {
                vec![AppCommand::FinishDraft]
            } else {
                vec![AppCommand::AddDraftPoint { pos }]
            }
        }
        InteractionMode::DrawScale { .. } => vec![AppCommand::AddScalePoint { pos }],
        InteractionMode::InsertVertex => {
            let hit = pointer_hit(state, pos, true);
            let insert = match hit {
                HitTarget::SpaceEdge(edge_index) => Some((false, edge_index)),
                HitTarget::CeilingEdge(edge_index) => Some((true, edge_index)),
                _ => None,
            };
            match insert {
                Some((on_ceiling, edge_index)) => vec![
                    AppCommand::InsertVertex {
                        on_ceiling,
                        edge_index,
                        pos,
                    },
                    AppCommand::SetMode {
                        mode: ModeKind::Select,
                    },
                ],
                // Bleibt scharf bis zum nächsten Kantentreffer
                None => vec![],
            }
        }
        InteractionMode::Select => map_select_press(state, pos),
    }
}

fn pointer_hit(state: &AppState, pos: Point, insert_mode: bool) -> HitTarget {
    hit_test(
        state.active_floor(),
        state.selection.space_id,
        pos,
        state.options.hit_radii(),
        insert_mode,
    )
}

/// Select-Modus: Priorität Eckpunkt → Kante → Innenfläche → andere Räume → Hintergrund.
fn map_select_press(state: &AppState, pos: Point) -> Vec<AppCommand> {
    let hit = pointer_hit(state, pos, false);
    // Drag nur, wenn der Hover bereits dasselbe verschiebbare Ziel anzeigte
    let drag_armed = hit.is_movable() && state.selection.hover_target == hit;

    let mut commands = match hit {
        HitTarget::SpaceVertex(i) => vec![AppCommand::SelectVertex {
            vertex: VertexRef::Space(i),
        }],
        HitTarget::CeilingVertex(i) => vec![AppCommand::SelectVertex {
            vertex: VertexRef::Ceiling(i),
        }],
        HitTarget::SpaceEdge(edge_index) => vec![AppCommand::SelectEdge { edge_index }],
        HitTarget::CeilingEdge(_) | HitTarget::Interior => vec![],
        HitTarget::OtherSpace(space_id) => vec![AppCommand::SelectSpace { space_id }],
        HitTarget::Background => {
            if should_deselect(
                state.active_floor(),
                state.selection.space_id,
                pos,
                state.options.hit_radii(),
            ) {
                vec![AppCommand::ClearSelection]
            } else {
                vec![]
            }
        }
    };

    if drag_armed {
        commands.push(AppCommand::BeginDrag { pos });
    }
    commands
}
