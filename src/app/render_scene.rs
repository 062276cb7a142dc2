//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::{InteractionMode, VertexRef};
use crate::app::AppState;
use crate::core::{Space, SpaceId};
use crate::shared::options::{
    CEILING_COLOR, EDGE_THICKNESS_PX, EXTERIOR_EDGE_COLOR, SCALE_COLOR, SPACE_FILL_COLOR,
    SPACE_SELECTED_COLOR,
};
use crate::shared::{ClosedShape, EdgeShape, MarkerKind, MarkerShape, RenderScene, ShapeStyle};

const SPACE_STROKE_COLOR: [f32; 4] = [0.1, 0.3, 0.7, 1.0];
const DRAFT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let floor = state.active_floor();
    let selected = state.selection.space_id;
    let marker_radius = state.options.vertex_radius_px * 0.5;
    let mut scene = RenderScene {
        background: floor.background.clone(),
        ..RenderScene::default()
    };

    for (&id, space) in &floor.spaces {
        let is_selected = selected == Some(id);
        scene.shapes.push(space_shape(id, space, is_selected));
        if space.ceiling.is_shown() {
            scene.shapes.push(ClosedShape {
                space_id: Some(id),
                points: space.ceiling.vertices().to_vec(),
                closed: true,
                style: ShapeStyle {
                    fill: None,
                    stroke: CEILING_COLOR,
                    stroke_width: 2.0,
                },
            });
        }
        push_edges(&mut scene, space, is_selected.then_some(state.selection.edge).flatten());
    }

    // Marker nur für den selektierten Raum
    if let Some(space) = state.selected_space() {
        for (i, &position) in space.vertices().iter().enumerate() {
            scene.markers.push(MarkerShape {
                position,
                radius: marker_radius,
                kind: MarkerKind::SpaceVertex,
                highlighted: state.selection.vertex == Some(VertexRef::Space(i)),
            });
        }
        if space.ceiling.is_shown() {
            for (i, &position) in space.ceiling.vertices().iter().enumerate() {
                scene.markers.push(MarkerShape {
                    position,
                    radius: marker_radius,
                    kind: MarkerKind::CeilingVertex,
                    highlighted: state.selection.vertex == Some(VertexRef::Ceiling(i)),
                });
            }
        }
    }

    if let Some(points) = state.mode.draft_points() {
        scene.shapes.push(ClosedShape {
            space_id: None,
            points: points.to_vec(),
            closed: false,
            style: ShapeStyle {
                fill: None,
                stroke: DRAFT_COLOR,
                stroke_width: 1.5,
            },
        });
        scene
            .markers
            .extend(points.iter().map(|&position| MarkerShape {
                position,
                radius: marker_radius,
                kind: MarkerKind::DraftPoint,
                highlighted: false,
            }));
    }

    push_scale(&mut scene, state, marker_radius);
    scene
}

fn space_shape(id: SpaceId, space: &Space, is_selected: bool) -> ClosedShape {
    ClosedShape {
        space_id: Some(id),
        points: space.vertices().to_vec(),
        closed: true,
        style: ShapeStyle {
            fill: Some(SPACE_FILL_COLOR),
            stroke: if is_selected {
                SPACE_SELECTED_COLOR
            } else {
                SPACE_STROKE_COLOR
            },
            stroke_width: if is_selected { 2.5 } else { 1.5 },
        },
    }
}

/// Außenkanten rot, die selektierte Kante in Auswahlfarbe darüber.
fn push_edges(scene: &mut RenderScene, space: &Space, selected_edge: Option<usize>) {
    for (i, edge) in space.edges().iter().enumerate() {
        if !edge.is_exterior || selected_edge == Some(i) {
            continue;
        }
        if let Some((start, end)) = space.edge_segment(i) {
            scene.edges.push(EdgeShape {
                start,
                end,
                thickness: EDGE_THICKNESS_PX,
                color: EXTERIOR_EDGE_COLOR,
            });
        }
    }
    if let Some((start, end)) = selected_edge.and_then(|i| space.edge_segment(i)) {
        scene.edges.push(EdgeShape {
            start,
            end,
            thickness: EDGE_THICKNESS_PX * 1.5,
            color: SPACE_SELECTED_COLOR,
        });
    }
}

fn push_scale(scene: &mut RenderScene, state: &AppState, marker_radius: f64) {
    let scale = &state.active_floor().scale;
    let endpoints: Vec<_> = match (&state.mode, scale.reference) {
        (InteractionMode::DrawScale { first: Some(p) }, _) => vec![*p],
        (_, Some([p1, p2])) if scale.overlay_visible => {
            scene.edges.push(EdgeShape {
                start: p1,
                end: p2,
                thickness: EDGE_THICKNESS_PX * 0.5,
                color: SCALE_COLOR,
            });
            vec![p1, p2]
        }
        _ => Vec::new(),
    };
    scene
        .markers
        .extend(endpoints.into_iter().map(|position| MarkerShape {
            position,
            radius: marker_radius,
            kind: MarkerKind::ScaleEndpoint,
            highlighted: false,
        }));
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::{InteractionMode, VertexRef};
    use crate::app::AppState;
    use crate::core::{Point, Space};
    use crate::shared::MarkerKind;

    fn square() -> Space {
        Space::new(
            "Room 1",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        )
        .expect("Quadrat sollte gültig sein")
    }

    #[test]
    fn empty_state_builds_empty_scene() {
        let state = AppState::new();
        assert!(build(&state).is_empty());
    }

    #[test]
    fn selected_space_gets_vertex_markers_and_exterior_edges() {
        let mut state = AppState::new();
        let mut space = square();
        space.edge_mut(0).expect("Kante 0").is_exterior = true;
        state.active_floor_mut().add_space(1, space);
        state.selection.select_space(1);
        state.selection.vertex = Some(VertexRef::Space(2));

        let scene = build(&state);
        // Decke ohne Polygon wird nicht gezeichnet
        assert_eq!(scene.shapes.len(), 1);
        assert_eq!(scene.edges.len(), 1);
        let space_markers: Vec<_> = scene
            .markers
            .iter()
            .filter(|m| m.kind == MarkerKind::SpaceVertex)
            .collect();
        assert_eq!(space_markers.len(), 4);
        assert!(space_markers[2].highlighted);
        assert_eq!(scene.edges[0].end, Point::new(100.0, 0.0));
    }

    #[test]
    fn selected_edge_is_drawn_once_on_top() {
        let mut state = AppState::new();
        let mut space = square();
        space.edge_mut(1).expect("Kante 1").is_exterior = true;
        state.active_floor_mut().add_space(1, space);
        state.selection.select_space(1);
        state.selection.edge = Some(1);

        let scene = build(&state);
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.edges[0].start, Point::new(100.0, 0.0));
    }

    #[test]
    fn draft_and_scale_reference_are_drawn() {
        let mut state = AppState::new();
        state.mode = InteractionMode::DrawSpace {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        };
        state
            .active_floor_mut()
            .scale
            .set_reference(Point::new(0.0, 50.0), Point::new(40.0, 50.0));

        let scene = build(&state);
        assert_eq!(scene.shapes.len(), 1);
        assert!(!scene.shapes[0].closed);
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(
            scene
                .markers
                .iter()
                .filter(|m| m.kind == MarkerKind::ScaleEndpoint)
                .count(),
            2
        );

        state.active_floor_mut().scale.overlay_visible = false;
        let scene = build(&state);
        assert!(scene.edges.is_empty());
    }
}
