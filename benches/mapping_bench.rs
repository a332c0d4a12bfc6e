// Benchmark for the week grid mapping
// Measures pointer-to-time resolution and overlay sizing across scroll offsets

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use egui::{Pos2, Rect, Vec2};
use purpose_calendar::models::time_code::CalendarTimeCode;
use purpose_calendar::ui_egui::grid_mapping::GridGeometry;
use purpose_calendar::ui_egui::radial_menu::place_menu;

fn grid(scroll_top: f32) -> GridGeometry {
    GridGeometry::week(
        Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(1164.0, 600.0)),
        scroll_top,
        64.0,
        64.0,
    )
}

fn bench_pointer_to_time_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_to_time_code");

    for scroll_top in [0.0f32, 512.0, 936.0].iter() {
        let geometry = grid(*scroll_top);
        group.bench_with_input(
            BenchmarkId::from_parameter(scroll_top),
            &geometry,
            |b, geometry| {
                b.iter(|| {
                    (0..600).step_by(4).fold(0i64, |acc, y| {
                        let pointer = Pos2::new(black_box(500.0), 100.0 + y as f32);
                        let position = geometry.position_from_pointer(pointer);
                        acc + geometry.relative_y_to_time_code(position.y).to_quarters()
                    })
                });
            },
        );
    }

    group.finish();
}

fn bench_overlay_and_menu(c: &mut Criterion) {
    let geometry = grid(512.0);
    let viewport = Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0));

    c.bench_function("overlay_geometry_full_day", |b| {
        b.iter(|| {
            (0..96).fold(0.0f32, |acc, q| {
                let end = CalendarTimeCode::from_quarters_clamped(black_box(q));
                acc + geometry.overlay_geometry(3, CalendarTimeCode::MIDNIGHT, end).height
            })
        });
    });

    c.bench_function("place_menu_sweep", |b| {
        b.iter(|| {
            (0..1200).step_by(10).fold(0.0f32, |acc, x| {
                let origin = place_menu(Pos2::new(x as f32, black_box(400.0)), 192.0, viewport, 8.0);
                acc + origin.x
            })
        });
    });
}

criterion_group!(benches, bench_pointer_to_time_code, bench_overlay_and_menu);
criterion_main!(benches);
