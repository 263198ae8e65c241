use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use wireframe_sim::core::{fill_pattern, rasterize_line, Framebuffer, Renderer, WindowDimensions};
use wireframe_sim::demo::DemoWorld;
use wireframe_sim::core::wireframe::{draw_body, draw_joint};
use wireframe_sim::math::Color;
use wireframe_sim::traits::Simulation;

fn framebuffer(width: u32, height: u32) -> Framebuffer {
    Framebuffer::try_new(WindowDimensions::new(width, height)).unwrap()
}

/// Benchmark: Line traversal without pixel writes, one segment per octant
fn bench_line_traversal(c: &mut Criterion) {
    let segments = [
        ((0, 0), (799, 300)),
        ((0, 0), (300, 599)),
        ((0, 599), (799, 300)),
        ((0, 599), (300, 0)),
    ];

    c.bench_function("line_traversal_octants", |b| {
        b.iter(|| {
            let mut count = 0u32;
            for (p1, p2) in segments {
                rasterize_line(black_box(p1), black_box(p2), |_, _| count += 1);
            }
            black_box(count)
        })
    });
}

/// Benchmark: Lines drawn into an 800x600 framebuffer, partly clipped
fn bench_draw_lines(c: &mut Criterion) {
    let mut fb = framebuffer(800, 600);

    c.bench_function("draw_lines_800x600", |b| {
        b.iter(|| {
            for i in 0..100 {
                let t = i * 8;
                fb.draw_line((t - 100, 0), (900 - t, 599), Color::BLACK);
            }
            black_box(fb.pixels()[0])
        })
    });
}

/// Benchmark: Clearing frames of increasing size
fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");

    for (width, height) in [(320, 240), (800, 600), (1920, 1080)] {
        let mut fb = framebuffer(width, height);
        group.bench_with_input(
            BenchmarkId::new("fill_pattern", format!("{}x{}", width, height)),
            &(width, height),
            |b, _| b.iter(|| fb.clear(black_box(Color::from_rgb(12, 34, 56)))),
        );
    }

    // Naive per-pixel loop for comparison
    let mut buffer = vec![0u8; 1920 * 1080 * 4];
    group.bench_function("per_pixel/1920x1080", |b| {
        b.iter(|| {
            for px in buffer.chunks_exact_mut(4) {
                px.copy_from_slice(black_box(&[12, 34, 56, 0]));
            }
        })
    });

    // Odd length forces the tail copy
    let mut odd = vec![0u8; 1920 * 1080 * 4 + 3];
    group.bench_function("fill_pattern_odd_tail", |b| {
        b.iter(|| fill_pattern(black_box(&mut odd), [12, 34, 56, 0]))
    });

    group.finish();
}

/// Benchmark: One full demo frame: clear, outline every body and joint
fn bench_demo_frame(c: &mut Criterion) {
    let mut renderer = Renderer::init(WindowDimensions::new(800, 600), Vec2::splat(15.0), Vec2::ZERO).unwrap();
    let mut world = DemoWorld::new(20);

    c.bench_function("demo_frame_20_pendulums", |b| {
        b.iter(|| {
            world.step(1.0 / 60.0);
            renderer.clear(Color::WHITE);
            for body in world.bodies() {
                draw_body(&mut renderer, &body, Color::BLACK);
            }
            for joint in world.joints() {
                draw_joint(&mut renderer, &joint, Color::BLACK);
            }
            black_box(renderer.frame_info().pixels.len())
        })
    });
}

criterion_group!(
    benches,
    bench_line_traversal,
    bench_draw_lines,
    bench_clear,
    bench_demo_frame,
);

criterion_main!(benches);
