//! Floorplan-Aufmaß: Kommandozeilen-Auswertung.
//!
//! Lädt ein gespeichertes Projekt und gibt das Aufmaß als JSON aus.
//! Unvollständige Räume werden aufgelistet; der Exit-Code ist dann 1.
//!
//! Aufruf: `floorplan-takeoff <projekt.json> [ft|in|m|cm]`

use anyhow::{bail, Context};
use floorplan_takeoff::io::store::parse_project;
use floorplan_takeoff::{build_takeoff, EditorOptions, ExportError, LengthUnit};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    ReportRunner::run(std::env::args().skip(1).collect())
}

struct ReportRunner;

impl ReportRunner {
    fn run(args: Vec<String>) -> anyhow::Result<ExitCode> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Floorplan-Aufmaß v{} startet...", env!("CARGO_PKG_VERSION"));

        let Some(project_path) = args.first() else {
            bail!("Aufruf: floorplan-takeoff <projekt.json> [ft|in|m|cm]");
        };

        let unit = match args.get(1) {
            Some(suffix) => LengthUnit::from_suffix(suffix)
                .with_context(|| format!("Unbekannte Einheit: {}", suffix))?,
            None => EditorOptions::load_from_file(&EditorOptions::config_path()).display_unit,
        };

        let content = std::fs::read_to_string(project_path)
            .with_context(|| format!("Projektdatei nicht lesbar: {}", project_path))?;
        let project = parse_project(&content)
            .with_context(|| format!("Projektdatei fehlerhaft: {}", project_path))?;

        match build_takeoff(&project, unit) {
            Ok(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(ExportError::InvalidSpaces(invalid)) => {
                for space in &invalid {
                    log::warn!("Unvollständig: {}", space);
                }
                println!("{}", serde_json::to_string_pretty(&invalid)?);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
