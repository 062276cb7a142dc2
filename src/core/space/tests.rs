use super::*;
use approx::assert_relative_eq;

/// Quadrat 100×100 px bei Faktor 0.1 ft/px (Szenario A)
fn square_space() -> Space {
    let mut space = Space::new(
        "Room 1",
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
    )
    .expect("Quadrat ist gültig");
    space.recompute_derived(0.1);
    space
}

/// Szenario B: Kante 0 außen, Höhe 8, Fenster 3×4
fn scenario_b() -> Space {
    let mut space = square_space();
    let edge = space.edge_mut(0).expect("Kante 0");
    edge.is_exterior = true;
    edge.height = Some(8.0);
    edge.window_width = Some(3.0);
    edge.window_height = Some(4.0);
    space.recompute_derived(0.1);
    space
}

fn assert_lengths_match_geometry(space: &Space, scale_factor: f64) {
    assert_eq!(space.edges().len(), space.vertices().len());
    let n = space.vertices().len();
    for (i, edge) in space.edges().iter().enumerate() {
        let expected = distance(space.vertices()[i], space.vertices()[(i + 1) % n]) * scale_factor;
        assert_relative_eq!(edge.length, expected, epsilon = 1e-9);
    }
}

#[test]
fn scenario_a_area_and_lengths() {
    let space = square_space();
    assert_relative_eq!(space.area(), 100.0, epsilon = 1e-9);
    for edge in space.edges() {
        assert_relative_eq!(edge.length, 10.0, epsilon = 1e-9);
    }
    assert_eq!(space.exterior_perimeter(), 0.0);
}

#[test]
fn scenario_b_wall_window_perimeter() {
    let space = scenario_b();
    let edge = &space.edges()[0];
    assert_relative_eq!(edge.wall_area(), 80.0, epsilon = 1e-9);
    assert_relative_eq!(edge.window_area, 12.0);
    assert_relative_eq!(space.exterior_perimeter(), 10.0, epsilon = 1e-9);

    let totals = space.directional_totals();
    assert_eq!(totals.len(), 8);
    assert_relative_eq!(totals[&CompassDirection::N].wall_area, 80.0, epsilon = 1e-9);
    assert_relative_eq!(totals[&CompassDirection::N].window_area, 12.0);
    assert_eq!(totals[&CompassDirection::S].wall_area, 0.0);
}

#[test]
fn scenario_c_insert_inherits_split_edge() {
    let mut space = scenario_b();
    let new_index = space
        .insert_vertex(0, Point::new(50.0, 0.0))
        .expect("Kante 0 existiert");
    space.recompute_derived(0.1);

    assert_eq!(new_index, 1);
    assert_eq!(space.vertices().len(), 5);
    assert_eq!(space.edges().len(), 5);
    assert_eq!(space.vertices()[1], Point::new(50.0, 0.0));

    for edge in &space.edges()[0..2] {
        assert!(edge.is_exterior);
        assert_eq!(edge.height, Some(8.0));
        assert_eq!(edge.window_width, Some(3.0));
        assert_eq!(edge.window_height, Some(4.0));
        assert_relative_eq!(edge.length, 5.0, epsilon = 1e-9);
    }
    assert_relative_eq!(space.exterior_perimeter(), 10.0, epsilon = 1e-9);
    assert_lengths_match_geometry(&space, 0.1);
}

#[test]
fn scenario_d_delete_restores_left_neighbor() {
    let mut space = scenario_b();
    space.insert_vertex(0, Point::new(50.0, 0.0));
    space.recompute_derived(0.1);

    assert!(space.delete_vertex(1));
    space.recompute_derived(0.1);

    assert_eq!(space.vertices().len(), 4);
    assert_eq!(space.edges().len(), 4);
    let merged = &space.edges()[0];
    assert!(merged.is_exterior);
    assert_eq!(merged.height, Some(8.0));
    assert_relative_eq!(merged.length, 10.0, epsilon = 1e-9);
    assert_lengths_match_geometry(&space, 0.1);
}

#[test]
fn deleting_first_vertex_merges_into_last_edge() {
    let mut space = square_space();
    space.edge_mut(3).expect("Kante 3").height = Some(7.0);
    space.edge_mut(0).expect("Kante 0").height = Some(2.0);

    assert!(space.delete_vertex(0));
    space.recompute_derived(0.1);

    assert_eq!(space.edges().len(), 3);
    // Letzte Kante verbindet nun (0,100) mit (100,0) und behält die Daten von Kante 3
    assert_eq!(space.edges()[2].height, Some(7.0));
    assert_lengths_match_geometry(&space, 0.1);
}

#[test]
fn delete_on_triangle_is_refused_unchanged() {
    let mut space = Space::new(
        "Dreieck",
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ],
    )
    .expect("Dreieck ist gültig");
    space.recompute_derived(1.0);
    let before = space.clone();

    assert!(!space.delete_vertex(0));
    assert_eq!(space, before);
}

#[test]
fn ensure_edges_is_idempotent() {
    let mut space = scenario_b();
    space.ensure_edges();
    let once = space.edges().to_vec();
    space.ensure_edges();
    assert_eq!(space.edges(), once.as_slice());
}

#[test]
fn zero_scale_zeroes_derived_but_keeps_inputs() {
    let mut space = scenario_b();
    space.recompute_derived(0.0);

    assert_eq!(space.area(), 0.0);
    assert_eq!(space.exterior_perimeter(), 0.0);
    for edge in space.edges() {
        assert_eq!(edge.length, 0.0);
        assert_eq!(edge.window_area, 0.0);
    }
    assert_eq!(space.edges()[0].height, Some(8.0));
    assert_eq!(space.edges()[0].window_width, Some(3.0));

    space.recompute_derived(f64::NAN);
    assert_eq!(space.area(), 0.0);
}

#[test]
fn scenario_e_same_as_floor_ignores_stale_ceiling() {
    let mut space = square_space();
    space.ceiling.set_polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ]);
    space.ceiling.manual_area = Some(999.0);
    space.ceiling.same_as_floor = true;
    space.recompute_derived(0.1);

    assert!(space.ceiling.area() > 0.0);
    assert_eq!(space.effective_ceiling_area(), Some(space.area()));
}

#[test]
fn translate_moves_ceiling_too() {
    let mut space = square_space();
    space.ceiling.set_polygon(vec![
        Point::new(10.0, 10.0),
        Point::new(20.0, 10.0),
        Point::new(10.0, 20.0),
    ]);
    space.translate(Point::new(5.0, -5.0));

    assert_eq!(space.vertices()[0], Point::new(5.0, -5.0));
    assert_eq!(space.ceiling.vertices()[0], Point::new(15.0, 5.0));
}

#[test]
fn new_rejects_degenerate_polygon() {
    assert!(Space::new("x", vec![Point::ZERO, Point::new(1.0, 0.0)]).is_none());
}

#[test]
fn insert_on_missing_edge_is_noop() {
    let mut space = square_space();
    assert!(space.insert_vertex(9, Point::ZERO).is_none());
    assert_eq!(space.vertices().len(), 4);
    assert_eq!(space.edges().len(), 4);
}
