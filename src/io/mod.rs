//! Datei-Adapter für Projekt-Persistenz und Aufmaß-Export.
//!
//! Das Projekt wird als ein JSON-Dokument gespeichert; der Export schreibt
//! das fertige Aufmaß als JSON.

pub mod store;
pub mod takeoff_writer;

pub use store::{JsonFileStore, StateStore};
pub use takeoff_writer::{JsonTakeoffWriter, TakeoffSink};
