//! Raum: Polygon mit parallel geführter Kantenliste und abgeleiteten Werten.
//!
//! Invariante: `edges.len() == vertices.len()` nach jeder Mutation. Kante `i`
//! gehört zum Segment `(v[i], v[(i+1) % n])`. Abgeleitete Werte (Fläche,
//! Außenumfang, Kantenlängen, Fensterflächen) werden nach jeder Geometrie-
//! änderung über [`Space::recompute_derived`] neu berechnet.

use super::ceiling::Ceiling;
use super::edge::{CompassDirection, Edge, TypeRef};
use super::geometry::{
    distance, insert_projected_vertex, point_in_polygon, polygon_area, Point,
    MIN_POLYGON_VERTICES,
};
use super::validation::{validate_space, ValidationIssue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stabile ID eines Raums innerhalb eines Projekts
pub type SpaceId = u64;

/// Wand- und Fensterflächen einer Himmelsrichtung (intern, Fuß²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DirectionalTotals {
    /// Summe Länge × Höhe der Außenwände
    pub wall_area: f64,
    /// Summe der Fensteröffnungen der Außenwände
    pub window_area: f64,
}

/// Ein Raum einer Etage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Anzeigename
    pub name: String,
    vertices: Vec<Point>,
    edges: Vec<Edge>,
    /// Durchschnittliche Deckenhöhe (intern, Fuß)
    pub average_ceiling_height: Option<f64>,
    /// Oberlicht vorhanden
    pub has_skylight: bool,
    /// Oberlichtfläche (intern, Fuß²)
    pub skylight_area: Option<f64>,
    /// Oberlichttyp
    pub skylight_type: Option<TypeRef>,
    /// Decke des Raums
    pub ceiling: Ceiling,
    area: f64,
    exterior_perimeter: f64,
}

impl Space {
    /// Erstellt einen Raum aus einem fertig gezeichneten Polygon.
    ///
    /// Gibt `None` zurück bei weniger als 3 Punkten.
    pub fn new(name: impl Into<String>, vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        let mut space = Self {
            name: name.into(),
            vertices,
            edges: Vec::new(),
            average_ceiling_height: None,
            has_skylight: false,
            skylight_area: None,
            skylight_type: None,
            ceiling: Ceiling::default(),
            area: 0.0,
            exterior_perimeter: 0.0,
        };
        space.ensure_edges();
        Some(space)
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    /// Eckpunkte in absoluten Pixel-Koordinaten
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Kanten, index-parallel zu den Eckpunkten
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Einzelne Kante (mutabel) für Eigenschaftsänderungen
    pub fn edge_mut(&mut self, edge_index: usize) -> Option<&mut Edge> {
        self.edges.get_mut(edge_index)
    }

    /// Abgeleitete Fläche (intern, Fuß²)
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Abgeleiteter Außenumfang (intern, Fuß)
    pub fn exterior_perimeter(&self) -> f64 {
        self.exterior_perimeter
    }

    /// Endpunkte der Kante `edge_index`
    pub fn edge_segment(&self, edge_index: usize) -> Option<(Point, Point)> {
        super::geometry::edge_endpoints(&self.vertices, edge_index)
    }

    /// Punkt liegt im Raum (Even-Odd)
    pub fn contains_point(&self, point: Point) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    // ── Invarianten & Neuberechnung ─────────────────────────────────

    /// Passt die Kantenliste an die Eckpunktanzahl an.
    ///
    /// Bestehende Indizes behalten ihre Daten, neue bekommen Standardwerte.
    pub fn ensure_edges(&mut self) {
        self.edges.resize_with(self.vertices.len(), Edge::default);
    }

    /// Berechnet Fläche, Kantenlängen, Fensterflächen und Außenumfang neu.
    ///
    /// Bei `scale_factor <= 0` werden alle abgeleiteten Werte exakt 0;
    /// Benutzereingaben bleiben unangetastet. Die Decke wird mitgerechnet.
    pub fn recompute_derived(&mut self, scale_factor: f64) {
        self.ensure_edges();
        self.ceiling.recompute_area(scale_factor);

        if !(scale_factor > 0.0 && scale_factor.is_finite()) {
            self.area = 0.0;
            self.exterior_perimeter = 0.0;
            self.edges.iter_mut().for_each(Edge::clear_derived);
            return;
        }

        self.area = polygon_area(&self.vertices) * scale_factor * scale_factor;

        let n = self.vertices.len();
        let mut perimeter = 0.0;
        for (i, edge) in self.edges.iter_mut().enumerate() {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            edge.apply_length(distance(a, b) * scale_factor);
            if edge.is_exterior {
                perimeter += edge.length;
            }
        }
        self.exterior_perimeter = perimeter;
    }

    // ── Strukturänderungen ──────────────────────────────────────────

    /// Fügt die Projektion von `click` auf Kante `edge_index` als neuen Eckpunkt ein.
    ///
    /// Die neue Kante (`edge_index + 1`) erbt Außenwand, Höhe, Fenstermaße und
    /// Richtung der geteilten Kante. Rückgabe: Index des neuen Eckpunkts.
    pub fn insert_vertex(&mut self, edge_index: usize, click: Point) -> Option<usize> {
        let inherited = Edge::inherited_from(self.edges.get(edge_index)?);
        let new_index = insert_projected_vertex(&mut self.vertices, edge_index, click)?;
        self.edges.insert(new_index, inherited);
        self.ensure_edges();
        Some(new_index)
    }

    /// Entfernt Eckpunkt `vertex_index`. Unter 3 Punkte wird abgelehnt.
    ///
    /// Die beiden angrenzenden Kanten verschmelzen zu einer; deren Metadaten
    /// bestimmt [`merge_adjacent_edges`].
    pub fn delete_vertex(&mut self, vertex_index: usize) -> bool {
        let n = self.vertices.len();
        if vertex_index >= n || n <= MIN_POLYGON_VERTICES {
            return false;
        }

        let left_index = (vertex_index + n - 1) % n;
        let merged = merge_adjacent_edges(&self.edges[left_index], &self.edges[vertex_index]);

        self.vertices.remove(vertex_index);
        self.edges.remove(vertex_index);
        self.ensure_edges();

        let merged_index = if vertex_index == 0 {
            self.edges.len() - 1
        } else {
            vertex_index - 1
        };
        self.edges[merged_index] = merged;
        true
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

    /// Verschiebt Raum und Deckenpolygon gemeinsam
    pub fn translate(&mut self, delta: Point) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.ceiling.translate(delta);
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Nicht erfüllte Pflichtfelder, ohne Mutation.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_space(self)
    }

    /// Effektive Deckenfläche. `None` wenn die manuelle Fläche fehlt.
    pub fn effective_ceiling_area(&self) -> Option<f64> {
        self.ceiling.effective_area(self.area)
    }

    /// Wand- und Fensterflächen der Außenwände je Himmelsrichtung.
    ///
    /// Enthält immer alle acht Richtungen (auch mit 0).
    pub fn directional_totals(&self) -> IndexMap<CompassDirection, DirectionalTotals> {
        let mut totals: IndexMap<CompassDirection, DirectionalTotals> = CompassDirection::ALL
            .into_iter()
            .map(|dir| (dir, DirectionalTotals::default()))
            .collect();

        for edge in self.edges.iter().filter(|e| e.is_exterior) {
            let entry = totals.entry(edge.direction).or_default();
            entry.wall_area += edge.wall_area();
            entry.window_area += edge.window_area;
        }
        totals
    }
}

/// Metadaten der verschmolzenen Kante beim Löschen eines Eckpunkts.
///
/// `left` endet am gelöschten Punkt, `right` beginnt dort. Die linke Kante gewinnt.
pub fn merge_adjacent_edges(left: &Edge, _right: &Edge) -> Edge {
    left.clone()
}

#[cfg(test)]
mod tests;
