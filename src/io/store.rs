//! Laden/Speichern des gesamten Projekts.

use crate::core::Project;
use std::path::{Path, PathBuf};

/// Persistenz des Gesamtzustands als undurchsichtiges Aggregat.
pub trait StateStore {
    /// Lädt den Zustand. `None` bei fehlender oder beschädigter Quelle.
    fn load(&self) -> Option<Project>;

    /// Speichert den Zustand.
    fn save(&self, project: &Project) -> anyhow::Result<()>;
}

/// JSON-Datei als Projektspeicher
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Speicher für die Datei `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dateipfad
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lädt und gibt bei fehlender/beschädigter Datei leere Standardwerte zurück.
    pub fn load_or_default(&self) -> Project {
        self.load().unwrap_or_default()
    }
}

/// Parst ein Projekt aus JSON und repariert abgeleitete Werte.
pub fn parse_project(json: &str) -> anyhow::Result<Project> {
    let mut project: Project = serde_json::from_str(json)?;
    project.recompute_all()?;
    Ok(project)
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Option<Project> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                log::info!("Keine Projektdatei unter {}: {}", self.path.display(), e);
                return None;
            }
        };
        match parse_project(&content) {
            Ok(project) => {
                log::info!(
                    "Projekt geladen aus {}: {} Etagen",
                    self.path.display(),
                    project.floors.len()
                );
                Some(project)
            }
            Err(e) => {
                log::warn!("Projektdatei beschädigt, verwende Standardwerte: {}", e);
                None
            }
        }
    }

    fn save(&self, project: &Project) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(project)?;
        std::fs::write(&self.path, content)?;
        log::info!("Projekt gespeichert nach: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Space};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("floorplan_takeoff_{}_{}", std::process::id(), name))
    }

    #[test]
    fn save_then_load_restores_project() {
        let mut project = Project::default();
        project
            .active_floor_mut()
            .scale
            .set_reference(Point::ZERO, Point::new(100.0, 0.0));
        project.active_floor_mut().scale.set_declared_length(10.0);
        let id = project.allocate_space_id().expect("Raum-ID sollte frei sein");
        let space = Space::new(
            "Küche",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        )
        .expect("Quadrat");
        project.active_floor_mut().add_space(id, space);

        let store = JsonFileStore::new(temp_path("roundtrip.json"));
        store.save(&project).expect("Speichern sollte gelingen");
        let loaded = store.load().expect("Laden sollte gelingen");
        let _ = std::fs::remove_file(store.path());

        assert_eq!(loaded, project);
        assert_eq!(loaded.next_space_id, 2);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "{ nicht json").expect("Testdatei schreibbar");
        let store = JsonFileStore::new(&path);

        assert!(store.load().is_none());
        assert_eq!(store.load_or_default(), Project::default());
        let _ = std::fs::remove_file(&path);
    }

    /// Projekt mit einem Quadrat unter `id` auf kalibrierter Etage, als JSON.
    fn project_json_with_space(id: crate::core::SpaceId) -> String {
        let mut project = Project::default();
        project
            .active_floor_mut()
            .scale
            .set_reference(Point::ZERO, Point::new(100.0, 0.0));
        project.active_floor_mut().scale.set_declared_length(10.0);
        let space = Space::new(
            "Flur",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        )
        .expect("Quadrat");
        project.active_floor_mut().spaces.insert(id, space);
        serde_json::to_string(&project).expect("Projekt sollte serialisierbar sein")
    }

    #[test]
    fn maximal_space_id_is_rejected_instead_of_panicking() {
        let json = project_json_with_space(crate::core::SpaceId::MAX);
        assert!(parse_project(&json).is_err());

        let path = temp_path("max_id.json");
        std::fs::write(&path, json).expect("Testdatei schreibbar");
        let store = JsonFileStore::new(&path);
        assert_eq!(store.load_or_default(), Project::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn stale_pixel_length_is_recomputed_on_load() {
        let mut value: serde_json::Value =
            serde_json::from_str(&project_json_with_space(1)).expect("JSON sollte lesbar sein");
        value["floors"][0]["scale"]["pixel_length"] = serde_json::json!(50.0);

        let project = parse_project(&value.to_string()).expect("Projekt sollte ladbar sein");
        let floor = project.active_floor();
        assert!((floor.scale_factor() - 0.1).abs() < 1e-12);
        assert!((floor.spaces[&1].area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = JsonFileStore::new(temp_path("gibt_es_nicht.json"));
        assert_eq!(store.load_or_default(), Project::default());
    }
}
