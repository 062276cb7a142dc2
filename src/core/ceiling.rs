//! Decke eines Raums: optionales eigenes Polygon oder Flächen-Override.

use super::geometry::{
    insert_projected_vertex, polygon_area, remove_vertex_checked, Point, MIN_POLYGON_VERTICES,
};
use serde::{Deserialize, Serialize};

/// Woher die effektive Deckenfläche stammt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeilingSource {
    /// Deckenfläche = Raumfläche
    SameAsFloor,
    /// Manuell eingegebene Fläche
    Manual,
    /// Gezeichnetes Deckenpolygon
    Polygon,
}

/// Decke eines Raums.
///
/// Genau eine Flächenquelle ist aktiv: `same_as_floor` gewinnt immer,
/// danach `manual_override`, sonst das Polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ceiling {
    vertices: Vec<Point>,
    /// Deckenfläche entspricht der Raumfläche
    pub same_as_floor: bool,
    /// Manuelle Fläche statt Polygon verwenden
    pub manual_override: bool,
    /// Manuelle Fläche (intern, Fuß²)
    pub manual_area: Option<f64>,
    /// Ob das Deckenpolygon angezeigt und editierbar ist
    pub visible: bool,
    area: f64,
}

impl Default for Ceiling {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            same_as_floor: true,
            manual_override: false,
            manual_area: None,
            visible: true,
            area: 0.0,
        }
    }
}

impl Ceiling {
    /// Eckpunkte des Deckenpolygons (leer, wenn keins gezeichnet)
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Abgeleitete Polygonfläche (intern, Fuß²)
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Ob ein gültiges Polygon (≥ 3 Punkte) existiert
    pub fn has_polygon(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Ob das Polygon gerade sichtbar (und damit treffbar) ist
    pub fn is_shown(&self) -> bool {
        self.visible && self.has_polygon()
    }

    /// Aktive Flächenquelle
    pub fn source(&self) -> CeilingSource {
        if self.same_as_floor {
            CeilingSource::SameAsFloor
        } else if self.manual_override {
            CeilingSource::Manual
        } else {
            CeilingSource::Polygon
        }
    }

    /// Ersetzt das Polygon. Weniger als 3 Punkte werden abgelehnt.
    ///
    /// Ein neues Polygon schaltet die Decke in den Polygon-Modus.
    pub fn set_polygon(&mut self, vertices: Vec<Point>) -> bool {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return false;
        }
        self.vertices = vertices;
        self.same_as_floor = false;
        self.manual_override = false;
        self.visible = true;
        true
    }

    /// Verwirft das Polygon
    pub fn clear_polygon(&mut self) {
        self.vertices.clear();
        self.area = 0.0;
    }

    /// Fügt einen projizierten Punkt auf Kante `edge_index` ein.
    pub fn insert_vertex(&mut self, edge_index: usize, click: Point) -> Option<usize> {
        insert_projected_vertex(&mut self.vertices, edge_index, click)
    }

    /// Entfernt einen Eckpunkt; unter 3 Punkte wird abgelehnt.
    pub fn delete_vertex(&mut self, vertex_index: usize) -> bool {
        remove_vertex_checked(&mut self.vertices, vertex_index)
    }

    /// Setzt einen Eckpunkt auf eine neue Position
    pub fn move_vertex(&mut self, vertex_index: usize, pos: Point) -> bool {
        match self.vertices.get_mut(vertex_index) {
            Some(v) => {
                *v = pos;
                true
            }
            None => false,
        }
    }

    /// Verschiebt das gesamte Polygon
    pub fn translate(&mut self, delta: Point) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Polygonfläche × Faktor², 0 bei fehlender Kalibrierung.
    pub fn recompute_area(&mut self, scale_factor: f64) {
        self.area = if scale_factor > 0.0 && scale_factor.is_finite() {
            polygon_area(&self.vertices) * scale_factor * scale_factor
        } else {
            0.0
        };
    }

    /// Effektive Deckenfläche nach Flag-Priorität. `None` = manuelle Fläche fehlt.
    pub fn effective_area(&self, floor_area: f64) -> Option<f64> {
        match self.source() {
            CeilingSource::SameAsFloor => Some(floor_area),
            CeilingSource::Manual => self.manual_area,
            CeilingSource::Polygon => Some(self.area),
        }
    }
}
