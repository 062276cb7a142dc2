//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Render-Szene, die zwischen `app` und dem
//! Render-Kollaborator geteilt werden.

pub mod options;
mod render_scene;

pub use options::{EditorOptions, HitRadii};
pub use render_scene::{
    to_local, ClosedShape, EdgeShape, MarkerKind, MarkerShape, RenderScene, ShapeRenderer,
    ShapeStyle,
};
