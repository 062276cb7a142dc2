//! Use-Case-Funktionen für Hit-Test und Selektion.
//!
//! - `hit_test` — Priorisierter Treffer-Test, Deselektions-Regel, Cursor
//! - `pick` — Selektion von Räumen, Eckpunkten und Kanten

mod hit_test;
mod pick;

pub use hit_test::{cursor_for, hit_test, should_deselect, CursorIcon};
pub use pick::{clear_selection, focus_space, select_edge, select_space, select_vertex, update_hover};
