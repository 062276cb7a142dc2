//! Use-Case-Funktionen für Projekt laden/speichern.
//! Alle Dateisystem-Operationen laufen über `crate::io`.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::io::{JsonFileStore, StateStore};
use std::path::PathBuf;

/// Lädt ein Projekt. Fehlende oder beschädigte Dateien ergeben ein leeres Projekt.
pub fn load_project(state: &mut AppState, path: PathBuf) {
    let store = JsonFileStore::new(&path);
    let project = match store.load() {
        Some(project) => project,
        None => {
            state.set_status(format!(
                "Projekt '{}' nicht lesbar, leeres Projekt geöffnet",
                path.display()
            ));
            Default::default()
        }
    };

    state.enter_mode(InteractionMode::Select);
    state.selection.clear();
    state.project = project;
    state.current_file_path = Some(path);
    state.ui.validation_report.clear();
}

/// Speichert das Projekt unter `path` oder dem aktuellen Pfad.
pub fn save_project(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(target) = path.or_else(|| state.current_file_path.clone()) else {
        state.set_status("Kein Speicherpfad angegeben");
        return Ok(());
    };

    JsonFileStore::new(&target).save(&state.project)?;
    state.current_file_path = Some(target);
    Ok(())
}
