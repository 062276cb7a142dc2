//! Begrenzter Verlauf der Bearbeitungs-Commands.
//!
//! Zeigerbewegungen (Hover, Drag-Fortsetzung) werden nicht aufgenommen;
//! ein Drag erscheint als `BeginDrag` … `EndDrag`.

use super::AppCommand;

/// Obergrenze; bei Erreichen wird die ältere Hälfte verworfen.
const MAX_ENTRIES: usize = 1000;

/// Verlauf ausgeführter Bearbeitungen in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    skipped_transient: u64,
}

impl CommandLog {
    /// Leerer Verlauf
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Command auf. Rückgabe: `false` für übersprungene Zeigerbewegungen.
    pub fn record(&mut self, command: &AppCommand) -> bool {
        if command.is_transient() {
            self.skipped_transient += 1;
            return false;
        }
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
            log::debug!("Command-Verlauf gekürzt auf {} Einträge", self.entries.len());
        }
        self.entries.push(command.clone());
        true
    }

    /// Anzahl aufgenommener Commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt aufgenommener Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl übersprungener Zeigerbewegungen
    pub fn skipped_transient(&self) -> u64 {
        self.skipped_transient
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
