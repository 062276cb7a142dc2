//! Etage: geordnete Raumliste, Maßstab und Hintergrundbild-Referenz.

use super::geometry::{Point, MIN_POLYGON_VERTICES};
use super::scale::Scale;
use super::space::{Space, SpaceId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Eine Etage des Projekts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Anzeigename
    pub name: String,
    /// Räume in Zeichenreihenfolge (spätere liegen oben)
    pub spaces: IndexMap<SpaceId, Space>,
    /// Kalibrierung
    pub scale: Scale,
    /// Pfad/URL des Hintergrundbilds (wird extern geladen)
    pub background: Option<String>,
}

impl Floor {
    /// Leere Etage
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spaces: IndexMap::new(),
            scale: Scale::default(),
            background: None,
        }
    }

    /// Aktueller Maßstabsfaktor
    pub fn scale_factor(&self) -> f64 {
        self.scale.scale_factor()
    }

    /// Fügt einen Raum hinzu und berechnet ihn sofort.
    pub fn add_space(&mut self, id: SpaceId, mut space: Space) {
        space.recompute_derived(self.scale_factor());
        self.spaces.insert(id, space);
    }

    /// Entfernt einen Raum unter Beibehaltung der Reihenfolge.
    pub fn remove_space(&mut self, id: SpaceId) -> Option<Space> {
        self.spaces.shift_remove(&id)
    }

    /// Berechnet einen Raum mit dem aktuellen Faktor neu.
    pub fn recompute_space(&mut self, id: SpaceId) {
        let factor = self.scale_factor();
        if let Some(space) = self.spaces.get_mut(&id) {
            space.recompute_derived(factor);
        }
    }

    /// Berechnet alle Räume neu; entartete Räume aus Altdaten werden verworfen.
    pub fn recompute_all(&mut self) {
        let before = self.spaces.len();
        self.spaces
            .retain(|_, space| space.vertices().len() >= MIN_POLYGON_VERTICES);
        if self.spaces.len() != before {
            log::warn!(
                "{} entartete Räume in Etage '{}' verworfen",
                before - self.spaces.len(),
                self.name
            );
        }

        self.scale.refresh_pixel_length();
        let factor = self.scale_factor();
        for space in self.spaces.values_mut() {
            space.recompute_derived(factor);
        }
    }

    /// Oberster Raum, der den Punkt enthält
    pub fn space_at(&self, pos: Point) -> Option<SpaceId> {
        self.spaces
            .iter()
            .rev()
            .find(|(_, space)| space.contains_point(pos))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calibrated_floor() -> Floor {
        let mut floor = Floor::new("EG");
        floor.scale.set_reference(Point::ZERO, Point::new(100.0, 0.0));
        floor.scale.set_declared_length(10.0);
        floor
    }

    #[test]
    fn recompute_all_derives_pixel_length_from_reference() {
        let mut floor = calibrated_floor();
        floor.scale.pixel_length = 50.0;

        floor.recompute_all();

        assert_relative_eq!(floor.scale.pixel_length, 100.0, epsilon = 1e-9);
        assert_relative_eq!(floor.scale_factor(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn recompute_all_without_reference_is_uncalibrated() {
        let mut floor = Floor::new("EG");
        floor.scale.pixel_length = 100.0;
        floor.scale.declared_length = 10.0;

        floor.recompute_all();

        assert_eq!(floor.scale.pixel_length, 0.0);
        assert!(!floor.scale.is_calibrated());
    }

    #[test]
    fn space_at_prefers_topmost_space() {
        let mut floor = calibrated_floor();
        let square = |offset: f64| {
            vec![
                Point::new(offset, offset),
                Point::new(offset + 100.0, offset),
                Point::new(offset + 100.0, offset + 100.0),
                Point::new(offset, offset + 100.0),
            ]
        };
        floor.add_space(1, Space::new("A", square(0.0)).expect("Quadrat sollte gültig sein"));
        floor.add_space(2, Space::new("B", square(50.0)).expect("Quadrat sollte gültig sein"));

        assert_eq!(floor.space_at(Point::new(75.0, 75.0)), Some(2));
        assert_eq!(floor.space_at(Point::new(25.0, 25.0)), Some(1));
        assert_eq!(floor.space_at(Point::new(500.0, 500.0)), None);
    }
}
