//! Schreibt ein fertiges Aufmaß.

use crate::core::TakeoffReport;
use std::path::PathBuf;

/// Abnehmer eines fertigen Aufmaßes (Tabellen-Export o.ä.).
pub trait TakeoffSink {
    /// Übernimmt das Aufmaß.
    fn write(&mut self, report: &TakeoffReport) -> anyhow::Result<()>;
}

/// Schreibt das Aufmaß als formatiertes JSON in eine Datei.
#[derive(Debug, Clone)]
pub struct JsonTakeoffWriter {
    path: PathBuf,
}

impl JsonTakeoffWriter {
    /// Writer für die Datei `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TakeoffSink for JsonTakeoffWriter {
    fn write(&mut self, report: &TakeoffReport) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(report)?;
        std::fs::write(&self.path, content)?;
        log::info!(
            "Aufmaß mit {} Räumen exportiert nach: {}",
            report.spaces.len(),
            self.path.display()
        );
        Ok(())
    }
}
