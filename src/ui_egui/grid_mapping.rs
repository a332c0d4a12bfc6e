//! Pixel ↔ calendar mapping for the scrollable week grid.
//!
//! The grid is a gutter of hour labels followed by equal-width day columns.
//! Vertical position maps linearly onto the 96 quarter hours of a day across
//! the full scroll height, so the same math works at any scroll offset.

use egui::{Pos2, Rect};

use crate::models::time_code::{CalendarTimeCode, HOURS_PER_DAY, QUARTERS_PER_HOUR};

pub const DAYS_PER_WEEK: usize = 7;

/// A pointer location in two coordinate spaces.
///
/// `x`/`y` are relative to the grid content (scroll already applied) and
/// drive day and time mapping; `absolute_x`/`absolute_y` are viewport
/// coordinates used to place the floating menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub absolute_x: f32,
    pub absolute_y: f32,
}

impl Position {
    pub fn absolute(&self) -> Pos2 {
        Pos2::new(self.absolute_x, self.absolute_y)
    }
}

/// Overlay rectangle relative to the top-left of the day columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayGeometry {
    /// Translate into screen space given where the day columns start.
    pub fn to_rect(self, columns_origin: Pos2) -> Rect {
        Rect::from_min_size(
            columns_origin + egui::vec2(self.left, self.top),
            egui::vec2(self.width, self.height),
        )
    }
}

/// Measured bounds of the scrollable grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Left edge of the grid viewport, gutter included
    pub left: f32,
    /// Top edge of the grid viewport
    pub top: f32,
    pub width: f32,
    pub scroll_top: f32,
    /// Full content height of the scrolled grid
    pub scroll_height: f32,
    pub gutter_width: f32,
    pub hour_height: f32,
    pub day_count: usize,
}

impl GridGeometry {
    /// Geometry for a week grid whose content is exactly 24 hour rows tall.
    pub fn week(
        viewport: Rect,
        scroll_top: f32,
        gutter_width: f32,
        hour_height: f32,
    ) -> Self {
        Self {
            left: viewport.left(),
            top: viewport.top(),
            width: viewport.width(),
            scroll_top,
            scroll_height: hour_height * HOURS_PER_DAY as f32,
            gutter_width,
            hour_height,
            day_count: DAYS_PER_WEEK,
        }
    }

    pub fn column_width(&self) -> f32 {
        (self.width - self.gutter_width) / self.day_count as f32
    }

    /// Resolve a viewport pointer into a grid [`Position`].
    pub fn position_from_pointer(&self, pointer: Pos2) -> Position {
        Position {
            x: pointer.x - self.left,
            y: pointer.y - self.top + self.scroll_top,
            absolute_x: pointer.x,
            absolute_y: pointer.y,
        }
    }

    /// Day column under a viewport x coordinate.
    ///
    /// Returns `None` over the gutter, past the last column, or when the
    /// columns have no width, so gestures cannot start outside the week.
    pub fn pixel_to_day_index(&self, pointer_x: f32) -> Option<usize> {
        let columns_width = self.width - self.gutter_width;
        if columns_width <= 0.0 || self.day_count == 0 {
            return None;
        }

        let fraction = (pointer_x - self.left - self.gutter_width) / columns_width;
        let index = (fraction * self.day_count as f32).floor();
        if index.is_finite() && index >= 0.0 && (index as usize) < self.day_count {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Time code under a viewport y coordinate, clamped into the day.
    pub fn pixel_to_time_code(&self, pointer_y: f32) -> CalendarTimeCode {
        let relative_y = pointer_y - self.top + self.scroll_top;
        self.relative_y_to_time_code(relative_y)
    }

    /// Time code for a y already relative to the grid content.
    pub fn relative_y_to_time_code(&self, relative_y: f32) -> CalendarTimeCode {
        if self.scroll_height <= 0.0 {
            return CalendarTimeCode::MIDNIGHT;
        }
        let total_quarters = HOURS_PER_DAY * QUARTERS_PER_HOUR;
        let quarters = (relative_y * total_quarters as f32 / self.scroll_height).round();
        CalendarTimeCode::from_quarters_clamped(quarters as i64)
    }

    /// Overlay covering the drag between `a` and `b` in column `day`.
    pub fn overlay_geometry(
        &self,
        day: usize,
        a: CalendarTimeCode,
        b: CalendarTimeCode,
    ) -> OverlayGeometry {
        let column_width = self.column_width();
        let offset_a = time_code_to_pixel_offset(a, self.hour_height);
        let offset_b = time_code_to_pixel_offset(b, self.hour_height);
        OverlayGeometry {
            left: day as f32 * column_width,
            top: offset_a.min(offset_b),
            width: column_width,
            height: (offset_a - offset_b).abs(),
        }
    }
}

/// Vertical pixel offset of a time code from the top of the grid content.
pub fn time_code_to_pixel_offset(code: CalendarTimeCode, hour_height: f32) -> f32 {
    code.to_quarters() as f32 * hour_height / QUARTERS_PER_HOUR as f32
}
