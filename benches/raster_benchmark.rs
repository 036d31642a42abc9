#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization and canvas rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_rasterization_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_rasterization");

    for length in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("shallow", length), &length, |b, &length| {
            b.iter(|| rasterize_line(black_box(Point::ORIGIN), black_box(Point::new(length, length / 3))));
        });

        group.bench_with_input(BenchmarkId::new("steep", length), &length, |b, &length| {
            b.iter(|| rasterize_line(black_box(Point::ORIGIN), black_box(Point::new(length / 3, length))));
        });
    }

    group.finish();
}

fn canvas_draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_draw");

    for size in [16, 64, 256] {
        let rects: Vec<Rectangle> =
            (0..size / 2).map(|i| Rectangle::from_coords(i, i, size - 1 - i, size - 1 - i)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut canvas = Canvas::new(size as u32, size as u32);
                canvas.draw(black_box(rects.as_slice()));
                canvas
            });
        });
    }

    group.finish();
}

fn canvas_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_render");

    for size in [16u32, 64, 256] {
        let mut canvas = Canvas::new(size, size);
        let max = size as i32 - 1;
        canvas.draw(&Rectangle::from_coords(0, 0, max, max));
        canvas.draw(&Line::from_coords(0, 0, max, max));
        canvas.draw(&Line::from_coords(0, max, max, 0));

        for kind in RendererKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &canvas, |b, canvas| {
                b.iter(|| canvas.render_as(black_box(kind)));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    line_rasterization_benchmark,
    canvas_draw_benchmark,
    canvas_render_benchmark
);
criterion_main!(benches);
