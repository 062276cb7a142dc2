//! Geometrie-Kernel: Distanzen, Punkt-in-Polygon, Polygonfläche und
//! gemeinsame Polygon-Mutationen für Räume und Decken.
//!
//! Alle Funktionen sind zustandslos und arbeiten auf absoluten Pixel-Koordinaten.

use glam::DVec2;

/// Absolute Pixel-Koordinate auf dem Hintergrundplan.
pub type Point = DVec2;

/// Mindestanzahl an Eckpunkten eines Raum- oder Deckenpolygons.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Euklidische Distanz zweier Punkte.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Projektionsparameter `t` von `point` auf das Segment `a`–`b`, geklemmt auf [0, 1].
///
/// Gibt `None` zurück, wenn das Segment entartet ist (`a == b`).
pub fn projection_parameter(point: Point, a: Point, b: Point) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return None;
    }
    Some(((point - a).dot(ab) / len_sq).clamp(0.0, 1.0))
}

/// Kürzeste Distanz von `point` zum geschlossenen Segment `a`–`b`.
///
/// Bei `a == b` entspricht das der Punktdistanz.
pub fn segment_distance(point: Point, a: Point, b: Point) -> f64 {
    match projection_parameter(point, a, b) {
        Some(t) => point.distance(a.lerp(b, t)),
        None => point.distance(a),
    }
}

/// Projiziert `point` auf das Segment `a`–`b`.
///
/// Entartete Segmente liefern den Mittelpunkt (t = 0.5).
pub fn project_onto_segment(point: Point, a: Point, b: Point) -> Point {
    let t = projection_parameter(point, a, b).unwrap_or(0.5);
    a.lerp(b, t)
}

/// Even-Odd-Raycasting. Polygone mit weniger als 3 Punkten enthalten nichts.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Polygonfläche per Shoelace-Formel (Betrag, unabhängig von der Orientierung).
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return 0.0;
    }

    let n = vertices.len();
    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice_area.abs() * 0.5
}

/// Endpunkte der Kante `edge_index` eines geschlossenen Polygons.
pub fn edge_endpoints(vertices: &[Point], edge_index: usize) -> Option<(Point, Point)> {
    let n = vertices.len();
    if edge_index >= n {
        return None;
    }
    Some((vertices[edge_index], vertices[(edge_index + 1) % n]))
}

/// Kürzeste Distanz von `point` zum Rand eines geschlossenen Polygons.
pub fn boundary_distance(point: Point, vertices: &[Point]) -> Option<f64> {
    (0..vertices.len())
        .filter_map(|i| edge_endpoints(vertices, i))
        .map(|(a, b)| segment_distance(point, a, b))
        .min_by(|a, b| a.total_cmp(b))
}

/// Fügt die Projektion von `click` auf Kante `edge_index` hinter Eckpunkt `edge_index` ein.
///
/// Gibt den Index des neuen Eckpunkts zurück (`edge_index + 1`).
pub fn insert_projected_vertex(
    vertices: &mut Vec<Point>,
    edge_index: usize,
    click: Point,
) -> Option<usize> {
    let (a, b) = edge_endpoints(vertices, edge_index)?;
    let projected = project_onto_segment(click, a, b);
    vertices.insert(edge_index + 1, projected);
    Some(edge_index + 1)
}

/// Entfernt einen Eckpunkt, sofern danach noch mindestens 3 Punkte übrig bleiben.
pub fn remove_vertex_checked(vertices: &mut Vec<Point>, vertex_index: usize) -> bool {
    if vertex_index >= vertices.len() || vertices.len() <= MIN_POLYGON_VERTICES {
        return false;
    }
    vertices.remove(vertex_index);
    true
}
