//! Application Controller für zentrale Event-Verarbeitung.

use super::prompt::{CancelPrompt, UserPrompt};
use super::render_scene;
use super::use_cases::selection::{cursor_for, CursorIcon};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    prompt: Box<dyn UserPrompt>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller ohne UI-Prompts (alle Abfragen gelten als abgebrochen).
    pub fn new() -> Self {
        Self::with_prompt(Box::new(CancelPrompt))
    }

    /// Erstellt einen Controller mit den Prompts des UI-Hosts.
    pub fn with_prompt(prompt: Box<dyn UserPrompt>) -> Self {
        Self { prompt }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        if state.command_log.record(&command) {
            log::debug!("Command: {:?}", command);
        }
        use super::handlers;
        let prompt = self.prompt.as_mut();

        match command {
            // === Hover, Selektion, Drag ===
            AppCommand::UpdateHover { pos } => handlers::selection::update_hover(state, pos),
            AppCommand::SelectSpace { space_id } => {
                handlers::selection::select_space(state, space_id)
            }
            AppCommand::SelectVertex { vertex } => handlers::selection::select_vertex(state, vertex),
            AppCommand::SelectEdge { edge_index } => {
                handlers::selection::select_edge(state, edge_index)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::BeginDrag { pos } => handlers::selection::begin_drag(state, pos),
            AppCommand::DragTo { pos } => handlers::selection::drag_to(state, pos),
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::FocusSpace { space_id } => {
                handlers::selection::focus_space(state, space_id)
            }

            // === Modus & Struktur ===
            AppCommand::SetMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::AddDraftPoint { pos } => handlers::editing::add_draft_point(state, pos),
            AppCommand::FinishDraft => handlers::editing::finish_draft(state),
            AppCommand::InsertVertex {
                on_ceiling,
                edge_index,
                pos,
            } => handlers::editing::insert_vertex(state, on_ceiling, edge_index, pos),
            AppCommand::DeleteSelectedVertex => handlers::editing::delete_selected_vertex(state),
            AppCommand::DeleteSelectedSpace => {
                handlers::editing::delete_selected_space(state, prompt)
            }

            // === Maßstab & Einheit ===
            AppCommand::AddScalePoint { pos } => {
                handlers::scale::add_scale_point(state, pos, prompt)
            }
            AppCommand::PromptScaleLength => handlers::scale::prompt_length(state, prompt),
            AppCommand::ToggleScaleOverlay => handlers::scale::toggle_overlay(state),
            AppCommand::SetDisplayUnit { unit } => handlers::scale::set_display_unit(state, unit),

            // === Eigenschaften ===
            AppCommand::SetEdgeExterior { value } => {
                handlers::properties::set_edge_exterior(state, value)
            }
            AppCommand::SetEdgeField { field, input } => {
                handlers::properties::set_edge_field(state, field, &input)
            }
            AppCommand::SetEdgeDirection { direction } => {
                handlers::properties::set_edge_direction(state, direction)
            }
            AppCommand::SetEdgeDoors { value } => handlers::properties::set_edge_doors(state, value),
            AppCommand::SetEdgeType { slot, type_ref } => {
                handlers::properties::set_edge_type(state, slot, type_ref)
            }
            AppCommand::RenameSpace { name } => handlers::properties::rename_space(state, &name),
            AppCommand::SetSpaceField { field, input } => {
                handlers::properties::set_space_field(state, field, &input)
            }
            AppCommand::SetSkylight { value } => handlers::properties::set_skylight(state, value),
            AppCommand::SetSkylightType { type_ref } => {
                handlers::properties::set_skylight_type(state, type_ref)
            }
            AppCommand::SetCeilingSameAsFloor { value } => {
                handlers::properties::set_ceiling_same_as_floor(state, value)
            }
            AppCommand::SetCeilingManualOverride { value } => {
                handlers::properties::set_ceiling_manual_override(state, value)
            }
            AppCommand::ToggleCeilingVisibility => {
                handlers::properties::toggle_ceiling_visibility(state)
            }
            AppCommand::ClearCeilingPolygon => handlers::properties::clear_ceiling_polygon(state),

            // === Etagen ===
            AppCommand::AddFloor => handlers::floors::add(state, prompt),
            AppCommand::SelectFloor { index } => handlers::floors::select(state, index),
            AppCommand::DeleteFloor { index } => handlers::floors::delete(state, index, prompt),
            AppCommand::SetBackground { path } => handlers::floors::set_background(state, path),

            // === Prüfung, Export, Datei ===
            AppCommand::ValidateAll => handlers::file_io::validate_all(state),
            AppCommand::Export { path } => handlers::file_io::export(state, path)?,
            AppCommand::SaveProject { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadProject { path } => handlers::file_io::load(state, path),
        }

        state.ui.redraw_requested = true;
        Ok(())
    }

    /// Baut die RenderScene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Cursor für das aktuelle Hover-Ziel.
    pub fn cursor(&self, state: &AppState) -> CursorIcon {
        cursor_for(&state.mode, state.selection.hover_target)
    }
}
