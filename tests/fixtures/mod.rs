// Test fixtures - reusable test data
// A fixed week and grid measurement shared by the integration tests

use chrono::{Duration, NaiveDate};
use egui::{Pos2, Rect, Vec2};
use purpose_calendar::ui_egui::grid_mapping::GridGeometry;

/// Sunday, October 18 2026 through Saturday, October 24 2026
pub fn sample_week() -> Vec<NaiveDate> {
    let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    (0..7).map(|i| sunday + Duration::days(i)).collect()
}

/// Whole window the menu is clamped into
pub fn window() -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0))
}

/// 64px gutter and seven 100px columns starting at y=100, scrolled to 8 AM.
///
/// With 64px hours, viewport y = 100 + 64 * (hour - 8).
pub fn grid_at_eight() -> GridGeometry {
    GridGeometry::week(
        Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(764.0, 600.0)),
        512.0,
        64.0,
        64.0,
    )
}

/// Viewport x at the middle of day column `day`
pub fn column_center_x(day: usize) -> f32 {
    64.0 + 100.0 * day as f32 + 50.0
}
