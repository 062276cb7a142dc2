//! Use-Cases: fachliche Abläufe auf dem AppState.

pub mod drag;
pub mod drawing;
pub mod export;
pub mod file_io;
pub mod floors;
pub mod properties;
pub mod scale;
pub mod selection;
pub mod vertex_edit;
