//! Use-Case: Gesamtprüfung und Aufmaß-Export.

use crate::app::AppState;
use crate::core::takeoff::{build_takeoff, collect_invalid_spaces, ExportError};
use crate::io::TakeoffSink;

/// Prüft alle Räume aller Etagen und legt das Ergebnis im UI-State ab.
pub fn validate_all(state: &mut AppState) {
    let invalid = collect_invalid_spaces(&state.project);
    if invalid.is_empty() {
        state.set_status("Alle Räume vollständig");
    } else {
        state.set_status(format!("{} Räume unvollständig", invalid.len()));
    }
    log::info!("Prüfung: {} unvollständige Räume", invalid.len());
    state.ui.validation_report = invalid;
}

/// Exportiert das Aufmaß in der Anzeigeeinheit.
///
/// Bei unvollständigen Räumen wird nichts geschrieben; die Liste landet
/// im UI-State zur Navigation.
pub fn export_takeoff(state: &mut AppState, sink: &mut dyn TakeoffSink) -> anyhow::Result<()> {
    match build_takeoff(&state.project, state.options.display_unit) {
        Ok(report) => {
            sink.write(&report)?;
            state.ui.validation_report.clear();
            state.set_status(format!("{} Räume exportiert", report.spaces.len()));
        }
        Err(ExportError::InvalidSpaces(invalid)) => {
            state.set_status(format!(
                "Export verweigert: {} Räume unvollständig",
                invalid.len()
            ));
            state.ui.validation_report = invalid;
        }
    }
    Ok(())
}
