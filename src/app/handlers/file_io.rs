//! Handler für Datei-Operationen (Laden, Speichern, Export, Prüfung).

use crate::app::use_cases;
use crate::app::AppState;
use crate::io::JsonTakeoffWriter;
use std::path::PathBuf;

/// Lädt ein Projekt aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) {
    use_cases::file_io::load_project(state, path);
}

/// Speichert das Projekt.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_project(state, path)
}

/// Exportiert das Aufmaß als JSON.
pub fn export(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let mut writer = JsonTakeoffWriter::new(path);
    use_cases::export::export_takeoff(state, &mut writer)
}

/// Prüft alle Räume.
pub fn validate_all(state: &mut AppState) {
    use_cases::export::validate_all(state);
}
