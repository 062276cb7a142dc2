//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Synchrone Benutzer-Abfragen des UI-Hosts
pub mod prompt;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Projekt, Modus, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EdgeField, SpaceField};
pub use prompt::{CancelPrompt, UserPrompt};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, DragState, DragTarget, HitTarget, InteractionMode, ModeKind, SelectionState,
    UiState, VertexRef,
};
pub use use_cases::selection::CursorIcon;
