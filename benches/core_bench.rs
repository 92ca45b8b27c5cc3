use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use spline_builder::app::build_render_scene;
use spline_builder::core::{pick, sample_curve};
use spline_builder::shared::{CURVE_SEGMENTS, PICK_RADIUS};
use spline_builder::{EditorSession, Path, Viewport2D};
use std::hint::black_box;

fn build_synthetic_path(node_count: usize) -> Path {
    let mut path = Path::new();
    path.create_first(Vec2::ZERO);
    for index in 1..node_count {
        let x = index as f32 * 40.0;
        let y = ((index * 7) % 13) as f32 * 10.0;
        path.append_end(Vec2::new(x, y));
    }
    path
}

fn build_query_points(count: usize, max_x: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i as f32 * 37.3) % max_x;
            let y = ((i * 11) % 200) as f32 - 50.0;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_curve_sampling(c: &mut Criterion) {
    let path = build_synthetic_path(2);
    let (a, b) = path.segments().next().expect("Segment erwartet");

    let mut group = c.benchmark_group("curve_sampling");
    for &segments in &[50usize, CURVE_SEGMENTS, 1000] {
        group.bench_with_input(
            BenchmarkId::new("sample_curve", segments),
            &segments,
            |bench, &n| {
                bench.iter(|| {
                    let sum = sample_curve(black_box(a), black_box(b), n)
                        .fold(Vec2::ZERO, |acc, p| acc + p);
                    black_box(sum)
                })
            },
        );
    }
    group.finish();
}

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");

    for &node_count in &[10usize, 100, 1000] {
        let path = build_synthetic_path(node_count);
        let query_points = build_query_points(256, node_count as f32 * 40.0);

        group.bench_with_input(
            BenchmarkId::new("pick_batch", node_count),
            &path,
            |bench, path| {
                bench.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|&&p| pick(path, black_box(p), PICK_RADIUS).is_some())
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let mut session = EditorSession::new();
    session.path = build_synthetic_path(100);
    let viewport = Viewport2D::new(Vec2::new(4000.0, 1000.0));

    c.bench_function("render_scene_100_nodes", |bench| {
        bench.iter(|| {
            let scene = build_render_scene(black_box(&session), viewport);
            black_box(scene.curves.len())
        })
    });
}

criterion_group!(benches, bench_curve_sampling, bench_picking, bench_render_scene);
criterion_main!(benches);
