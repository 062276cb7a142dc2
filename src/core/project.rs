//! Gesamtzustand eines Aufmaß-Projekts (wird als Ganzes persistiert).

use super::floor::Floor;
use super::space::{Space, SpaceId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fehler beim Reparieren geladener Projektdaten.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectError {
    /// Nach der höchsten Raum-ID ist keine weitere ID mehr frei.
    #[error("Raum-ID {0} erschöpft den ID-Bereich")]
    SpaceIdsExhausted(SpaceId),
}

/// Projekt: geordnete Etagen, aktive Etage, ID-Zähler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Etagen (mindestens eine)
    pub floors: Vec<Floor>,
    /// Index der aktiven Etage
    pub active_floor: usize,
    /// Nächste freie Raum-ID
    pub next_space_id: SpaceId,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            floors: vec![Floor::new(default_floor_name(1))],
            active_floor: 0,
            next_space_id: 1,
        }
    }
}

/// Standardname der n-ten Etage (1-basiert)
pub fn default_floor_name(n: usize) -> String {
    format!("Floor {}", n)
}

impl Project {
    /// Vergibt eine neue, projektweit eindeutige Raum-ID.
    /// `None`, wenn der ID-Bereich erschöpft ist.
    pub fn allocate_space_id(&mut self) -> Option<SpaceId> {
        let id = self.next_space_id;
        self.next_space_id = id.checked_add(1)?;
        Some(id)
    }

    /// Aktive Etage
    pub fn active_floor(&self) -> &Floor {
        &self.floors[self.active_floor_index()]
    }

    /// Aktive Etage (mutabel)
    pub fn active_floor_mut(&mut self) -> &mut Floor {
        let index = self.active_floor_index();
        &mut self.floors[index]
    }

    fn active_floor_index(&self) -> usize {
        self.active_floor.min(self.floors.len().saturating_sub(1))
    }

    /// Hängt eine Etage an und macht sie aktiv. Rückgabe: neuer Index.
    pub fn add_floor(&mut self, name: impl Into<String>) -> usize {
        self.floors.push(Floor::new(name));
        self.active_floor = self.floors.len() - 1;
        self.active_floor
    }

    /// Entfernt eine Etage samt Räumen. Die letzte Etage bleibt immer bestehen.
    pub fn remove_floor(&mut self, index: usize) -> Option<Floor> {
        if self.floors.len() <= 1 || index >= self.floors.len() {
            return None;
        }
        let removed = self.floors.remove(index);
        if self.active_floor >= self.floors.len() || self.active_floor > index {
            self.active_floor = self.active_floor.saturating_sub(1);
        }
        Some(removed)
    }

    /// Wechselt die aktive Etage
    pub fn set_active_floor(&mut self, index: usize) -> bool {
        if index >= self.floors.len() {
            return false;
        }
        self.active_floor = index;
        true
    }

    /// Sucht einen Raum projektweit: (Etagenindex, Raum)
    pub fn find_space(&self, id: SpaceId) -> Option<(usize, &Space)> {
        self.floors
            .iter()
            .enumerate()
            .find_map(|(i, floor)| floor.spaces.get(&id).map(|s| (i, s)))
    }

    /// Repariert geladene Daten und berechnet alle abgeleiteten Werte neu.
    ///
    /// Schlägt fehl, wenn eine Raum-ID keinen Nachfolger mehr zulässt.
    pub fn recompute_all(&mut self) -> Result<(), ProjectError> {
        if self.floors.is_empty() {
            self.floors.push(Floor::new(default_floor_name(1)));
        }
        self.active_floor = self.active_floor_index();

        let max_id = self
            .floors
            .iter()
            .flat_map(|f| f.spaces.keys().copied())
            .max()
            .unwrap_or(0);
        let Some(after_max) = max_id.checked_add(1) else {
            return Err(ProjectError::SpaceIdsExhausted(max_id));
        };
        self.next_space_id = self.next_space_id.max(after_max);

        for floor in &mut self.floors {
            floor.recompute_all();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_one_floor() {
        let project = Project::default();
        assert_eq!(project.floors.len(), 1);
        assert_eq!(project.active_floor().name, "Floor 1");
    }

    #[test]
    fn last_floor_cannot_be_removed() {
        let mut project = Project::default();
        assert!(project.remove_floor(0).is_none());

        project.add_floor("OG");
        assert_eq!(project.active_floor, 1);
        assert!(project.remove_floor(1).is_some());
        assert_eq!(project.active_floor, 0);
        assert_eq!(project.floors.len(), 1);
    }

    #[test]
    fn removing_earlier_floor_keeps_active_floor() {
        let mut project = Project::default();
        project.add_floor("OG");
        project.add_floor("DG");
        assert_eq!(project.active_floor, 2);

        project.remove_floor(0);
        assert_eq!(project.active_floor().name, "DG");
    }

    #[test]
    fn recompute_all_repairs_counters() {
        let mut project = Project {
            floors: Vec::new(),
            active_floor: 7,
            next_space_id: 0,
        };
        project.recompute_all().expect("Reparatur sollte gelingen");
        assert_eq!(project.floors.len(), 1);
        assert_eq!(project.active_floor, 0);
        assert_eq!(project.next_space_id, 1);
    }

    #[test]
    fn allocate_space_id_stops_at_id_limit() {
        let mut project = Project {
            next_space_id: SpaceId::MAX - 1,
            ..Project::default()
        };
        assert_eq!(project.allocate_space_id(), Some(SpaceId::MAX - 1));
        assert_eq!(project.allocate_space_id(), None);
        assert_eq!(project.next_space_id, SpaceId::MAX);
    }

    #[test]
    fn recompute_all_rejects_maximal_space_id() {
        let mut project = Project::default();
        let space = Space::new(
            "Rand",
            vec![
                crate::core::Point::new(0.0, 0.0),
                crate::core::Point::new(10.0, 0.0),
                crate::core::Point::new(0.0, 10.0),
            ],
        )
        .expect("Dreieck sollte gültig sein");
        project.active_floor_mut().spaces.insert(SpaceId::MAX, space);

        assert_eq!(
            project.recompute_all(),
            Err(ProjectError::SpaceIdsExhausted(SpaceId::MAX))
        );
    }
}
