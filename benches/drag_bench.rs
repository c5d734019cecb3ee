//! Hot-path benchmarks: sphere projection, minimal rotation and a full
//! drag step.
#![allow(missing_docs, unused_results)]

use arcball::camera::{minimal_rotation, ArcballController, Viewport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn projection_benchmark(c: &mut Criterion) {
    let Ok(viewport) = Viewport::new(1920.0, 1080.0) else {
        return;
    };
    c.bench_function("screen_to_sphere", |b| {
        b.iter(|| viewport.screen_to_sphere(black_box(1200.0), black_box(300.0)));
    });
}

fn rotation_benchmark(c: &mut Criterion) {
    let from = Vec3::new(0.3, 0.4, 0.866_025).normalize();
    let to = Vec3::new(0.35, 0.38, 0.855).normalize();
    c.bench_function("minimal_rotation", |b| {
        b.iter(|| minimal_rotation(black_box(from), black_box(to)));
    });
    c.bench_function("minimal_rotation_antipodal", |b| {
        b.iter(|| minimal_rotation(black_box(Vec3::X), black_box(-Vec3::X)));
    });
}

fn drag_step_benchmark(c: &mut Criterion) {
    let Ok(mut controller) =
        ArcballController::new(Vec3::ZERO, 10.0, 1920.0, 1080.0)
    else {
        return;
    };
    controller.begin_drag(960.0, 540.0);
    let mut x = 960.0_f32;
    c.bench_function("drag_step", |b| {
        b.iter(|| {
            x = if x > 1400.0 { 500.0 } else { x + 3.0 };
            controller.drag(black_box(x), black_box(540.0));
            black_box(controller.view_matrix())
        });
    });
}

criterion_group!(
    benches,
    projection_benchmark,
    rotation_benchmark,
    drag_step_benchmark
);
criterion_main!(benches);
