//! Floorplan-Aufmaß Library.
//! Raumpolygone über Rasterplänen, Maßstab, Wand- und Deckenflächen.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CancelPrompt, EdgeField, InteractionMode,
    ModeKind, SpaceField, UiState, UserPrompt,
};
pub use crate::core::{
    build_takeoff, Ceiling, CompassDirection, Edge, ExportError, Floor, LengthUnit, Point,
    Project, Scale, Space, SpaceId, TakeoffReport, TypeRef, TypeSlot,
};
pub use io::{JsonFileStore, JsonTakeoffWriter, StateStore, TakeoffSink};
pub use shared::{EditorOptions, RenderScene, ShapeRenderer};
