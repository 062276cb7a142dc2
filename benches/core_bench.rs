use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_takeoff::app::use_cases::selection::hit_test;
use floorplan_takeoff::shared::HitRadii;
use floorplan_takeoff::{Floor, Point, Space, SpaceId};
use std::hint::black_box;

/// Regelmäßiger Kreis-Grundriss mit `vertex_count` Eckpunkten.
fn ring_space(center: Point, radius: f64, vertex_count: usize) -> Space {
    let vertices = (0..vertex_count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / vertex_count as f64;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    Space::new("Bench", vertices).expect("Ring sollte gültig sein")
}

/// Etage mit `space_count` Räumen im Raster; jeder Rand ist Außenwand.
fn build_synthetic_floor(space_count: usize, vertex_count: usize) -> Floor {
    let mut floor = Floor::new("Bench");
    floor.scale.set_reference(Point::ZERO, Point::new(100.0, 0.0));
    floor.scale.set_declared_length(10.0);

    for index in 0..space_count {
        let column = (index % 32) as f64;
        let row = (index / 32) as f64;
        let mut space = ring_space(
            Point::new(column * 250.0 + 100.0, row * 250.0 + 100.0),
            90.0,
            vertex_count,
        );
        for edge_index in 0..vertex_count {
            if let Some(edge) = space.edge_mut(edge_index) {
                edge.is_exterior = true;
                edge.height = Some(8.0);
            }
        }
        floor.add_space(index as SpaceId + 1, space);
    }
    floor
}

fn build_query_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 8000) as f64 + 0.37;
            let y = ((i * 7) % 8000) as f64 + 0.63;
            Point::new(x, y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let query_points = build_query_points(1024);

    for &vertex_count in &[8usize, 256usize] {
        let floor = build_synthetic_floor(256, vertex_count);

        group.bench_with_input(
            BenchmarkId::new("pointer_batch", vertex_count),
            &floor,
            |b, floor| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        let target =
                            hit_test(floor, Some(1), black_box(*point), HitRadii::default(), false);
                        if target.is_movable() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for &space_count in &[64usize, 1024usize] {
        let floor = build_synthetic_floor(space_count, 32);

        group.bench_with_input(
            BenchmarkId::new("floor_recompute_all", space_count),
            &floor,
            |b, floor| {
                b.iter_batched(
                    || floor.clone(),
                    |mut floor| {
                        floor.recompute_all();
                        black_box(floor.spaces.len())
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_hit_test, bench_recompute);
criterion_main!(core_benches);
