//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Alle Koordinaten sind absolut (Modellkoordinaten). Renderer, die
//! shape-lokale Koordinaten brauchen, leiten sie mit [`to_local`] ab.

use crate::core::{geometry, Point, SpaceId};

/// Stil eines Shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Füllfarbe (RGBA), `None` = nur Umriss
    pub fill: Option<[f32; 4]>,
    /// Umrissfarbe (RGBA)
    pub stroke: [f32; 4],
    /// Umrissbreite in Pixeln
    pub stroke_width: f64,
}

/// Geschlossenes (oder bei Entwürfen offenes) Polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedShape {
    /// Zugehöriger Raum, falls vorhanden
    pub space_id: Option<SpaceId>,
    /// Eckpunkte in Zeichenreihenfolge
    pub points: Vec<Point>,
    /// `false` für Zeichenentwürfe (Polylinie)
    pub closed: bool,
    /// Füllung und Umriss
    pub style: ShapeStyle,
}

/// Orientiertes Rechteck entlang einer Kante.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    /// Anfangspunkt der Kante
    pub start: Point,
    /// Endpunkt der Kante
    pub end: Point,
    /// Breite quer zur Kante in Pixeln
    pub thickness: f64,
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

impl EdgeShape {
    /// Eckpunkte des Rechtecks (gegen den Uhrzeigersinn ab `start`).
    ///
    /// Bei entarteter Kante fallen alle vier Ecken auf `start`.
    pub fn corners(&self) -> [Point; 4] {
        let along = self.end - self.start;
        let Some(dir) = along.try_normalize() else {
            return [self.start; 4];
        };
        let offset = dir.perp() * (self.thickness * 0.5);
        [
            self.start - offset,
            self.end - offset,
            self.end + offset,
            self.start + offset,
        ]
    }

    /// Drehwinkel der Kante in Radiant.
    pub fn angle(&self) -> f64 {
        let along = self.end - self.start;
        along.y.atan2(along.x)
    }

    /// Kantenlänge in Modellkoordinaten.
    pub fn length(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }
}

/// Art eines Punkt-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Eckpunkt eines Raumpolygons
    SpaceVertex,
    /// Eckpunkt eines Deckenpolygons
    CeilingVertex,
    /// Punkt eines laufenden Zeichenentwurfs
    DraftPoint,
    /// Endpunkt der Maßstabsstrecke
    ScaleEndpoint,
}

/// Punkt-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    /// Mittelpunkt
    pub position: Point,
    /// Radius in Pixeln
    pub radius: f64,
    /// Art des Markers (bestimmt die Farbe)
    pub kind: MarkerKind,
    /// Hervorgehoben (selektierter Eckpunkt)
    pub highlighted: bool,
}

/// Zeichen-Schnittstelle des Render-Kollaborators.
pub trait ShapeRenderer {
    /// Zeichnet ein Polygon.
    fn draw_shape(&mut self, shape: &ClosedShape);
    /// Zeichnet ein Kanten-Rechteck.
    fn draw_edge(&mut self, edge: &EdgeShape);
    /// Zeichnet einen Marker.
    fn draw_marker(&mut self, marker: &MarkerShape);
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Hintergrundplan der aktiven Etage (Pfad, Laden macht der Host)
    pub background: Option<String>,
    /// Raum- und Deckenpolygone sowie Zeichenentwürfe
    pub shapes: Vec<ClosedShape>,
    /// Außen- und selektierte Kanten
    pub edges: Vec<EdgeShape>,
    /// Eckpunkt-, Entwurfs- und Maßstabsmarker
    pub markers: Vec<MarkerShape>,
}

impl RenderScene {
    /// Gibt zurück, ob nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.edges.is_empty() && self.markers.is_empty()
    }

    /// Spielt die Szene in fester Reihenfolge ab: Flächen, Kanten, Marker.
    pub fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        for shape in &self.shapes {
            renderer.draw_shape(shape);
        }
        for edge in &self.edges {
            renderer.draw_edge(edge);
        }
        for marker in &self.markers {
            renderer.draw_marker(marker);
        }
    }
}

/// Leitet shape-lokale Koordinaten ab: Offset = erster Punkt, Punkte relativ dazu.
pub fn to_local(points: &[Point]) -> (Point, Vec<Point>) {
    let Some(&origin) = points.first() else {
        return (Point::ZERO, Vec::new());
    };
    (origin, points.iter().map(|p| *p - origin).collect())
}
