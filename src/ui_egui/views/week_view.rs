use chrono::{Datelike, NaiveDate};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{DayStripPalette, RadialMenuPalette, TimeGridPalette};
use crate::models::settings::Settings;
use crate::models::time_code::{hours, DAYS, HOURS_PER_DAY};
use crate::services::selection_log::SelectionSink;
use crate::ui_egui::drag::RangeDragManager;
use crate::ui_egui::grid_mapping::{GridGeometry, DAYS_PER_WEEK};
use crate::ui_egui::selection_shell::{SelectionMode, SelectionShell};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_short_date;

const HEADER_HEIGHT: f32 = 48.0;
const AGENDA_PLACEHOLDER: &str =
    "Nothing planned yet. Click here to choose a purpose for the whole day, \
     or drag across the hours below to pick a time.";

pub struct WeekView;

impl WeekView {
    pub fn show<S: SelectionSink>(
        ui: &mut egui::Ui,
        shell: &mut SelectionShell<S>,
        settings: &Settings,
        theme: &CalendarTheme,
        today: NaiveDate,
    ) {
        let strip_palette = DayStripPalette::from_theme(theme);
        let grid_palette = TimeGridPalette::from_theme(theme);
        let week: Vec<NaiveDate> = shell.week().to_vec();

        Self::render_header(ui, &week, settings, &strip_palette, today);
        ui.add_space(4.0);
        let agenda_click = Self::render_agenda(ui, shell, settings, &strip_palette);

        ui.add_space(8.0);

        let release_consumed = egui::ScrollArea::vertical()
            .id_source("week_time_grid")
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |scroll_ui| {
                let width = scroll_ui.available_width();
                let (grid_rect, _) = scroll_ui.allocate_exact_size(
                    Vec2::new(width, settings.hour_height * HOURS_PER_DAY as f32),
                    Sense::hover(),
                );
                let clip = scroll_ui.clip_rect();
                let geometry = GridGeometry::week(
                    Rect::from_x_y_ranges(grid_rect.x_range(), clip.y_range()),
                    clip.top() - grid_rect.top(),
                    settings.gutter_width,
                    settings.hour_height,
                );

                Self::paint_grid(scroll_ui, grid_rect, &geometry, &week, today, &grid_palette);

                let visible = grid_rect.intersect(clip);
                let consumed = Self::handle_pointer(scroll_ui, shell, &geometry, visible);

                if let Some(overlay) = shell.overlay(&geometry) {
                    let columns_origin = Pos2::new(grid_rect.left() + geometry.gutter_width, grid_rect.top());
                    let rect = overlay.to_rect(columns_origin).shrink2(Vec2::new(2.0, 0.0));
                    let painter = scroll_ui.painter();
                    painter.rect_filled(rect, Rounding::same(4.0), grid_palette.selection_fill);
                    painter.rect_stroke(
                        rect,
                        Rounding::same(4.0),
                        Stroke::new(1.0, grid_palette.selection_border),
                    );
                }

                consumed
            })
            .inner;

        // A release that just closed the menu must not reopen it on a day cell
        if let Some((day, pointer)) = agenda_click.filter(|_| !release_consumed) {
            let viewport = ui.ctx().screen_rect();
            shell.select_date(day, pointer, viewport);
        }

        if let Some((menu, origin)) = shell.purpose_menu() {
            let palette = RadialMenuPalette::from_theme(theme);
            if let Some(action) = menu.show(ui.ctx(), origin, &palette) {
                shell.apply(action);
            }
        }
    }

    fn render_header(
        ui: &mut egui::Ui,
        week: &[NaiveDate],
        settings: &Settings,
        palette: &DayStripPalette,
        today: NaiveDate,
    ) {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), HEADER_HEIGHT), Sense::hover());
        let painter = ui.painter();
        painter.rect(
            rect,
            Rounding::same(10.0),
            palette.strip_bg,
            Stroke::new(1.0, palette.strip_border),
        );

        for (i, date) in week.iter().enumerate() {
            let cell = column_rect(rect, settings.gutter_width, i).shrink(4.0);
            let is_today = *date == today;
            let (fill, border) = if is_today {
                (palette.today_cell_bg, palette.accent_line)
            } else {
                (palette.cell_bg, palette.strip_border)
            };
            painter.rect(cell, Rounding::same(6.0), fill, Stroke::new(1.0, border));

            let day_name = DAYS[date.weekday().num_days_from_sunday() as usize];
            painter.text(
                cell.center_top() + Vec2::new(0.0, 4.0),
                Align2::CENTER_TOP,
                day_name,
                FontId::proportional(12.0),
                palette.text,
            );
            painter.text(
                cell.center_bottom() - Vec2::new(0.0, 4.0),
                Align2::CENTER_BOTTOM,
                format_short_date(*date, &settings.date_format),
                FontId::proportional(11.0),
                palette.date_text,
            );
        }

        painter.hline(rect.x_range(), rect.bottom(), Stroke::new(1.0, palette.accent_line));
    }

    /// Whole-day cells above the time grid. Returns the clicked day and
    /// where the click landed.
    fn render_agenda<S: SelectionSink>(
        ui: &mut egui::Ui,
        shell: &SelectionShell<S>,
        settings: &Settings,
        palette: &DayStripPalette,
    ) -> Option<(usize, Pos2)> {
        let selected_day = match shell.mode() {
            SelectionMode::PurposePending { selection, .. } => Some(selection.day()),
            _ => None,
        };

        egui::ScrollArea::vertical()
            .id_source("week_agenda")
            .max_height(settings.agenda_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let width = ui.available_width();
                let col_width = (width - settings.gutter_width) / DAYS_PER_WEEK as f32;
                let font = FontId::proportional(12.0);
                let galleys: Vec<_> = (0..DAYS_PER_WEEK)
                    .map(|_| {
                        ui.painter().layout(
                            AGENDA_PLACEHOLDER.to_string(),
                            font.clone(),
                            palette.agenda_text,
                            (col_width - 12.0).max(1.0),
                        )
                    })
                    .collect();
                let content_height = galleys
                    .iter()
                    .map(|g| g.size().y + 12.0)
                    .fold(settings.agenda_height, f32::max);

                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(width, content_height), Sense::hover());
                let mut clicked = None;

                for (i, galley) in galleys.into_iter().enumerate() {
                    let cell = column_rect(rect, settings.gutter_width, i);
                    let response = ui.interact(cell, ui.id().with(("agenda_cell", i)), Sense::click());

                    let painter = ui.painter();
                    if selected_day == Some(i) || response.hovered() {
                        painter.rect_filled(cell, Rounding::ZERO, palette.hover_overlay);
                    }
                    painter.vline(cell.right(), cell.y_range(), Stroke::new(1.0, palette.strip_border));
                    painter.galley(cell.left_top() + Vec2::splat(6.0), galley, palette.agenda_text);

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            clicked = Some((i, pos));
                        }
                    }
                }

                clicked
            })
            .inner
    }

    fn paint_grid(
        ui: &egui::Ui,
        grid_rect: Rect,
        geometry: &GridGeometry,
        week: &[NaiveDate],
        today: NaiveDate,
        palette: &TimeGridPalette,
    ) {
        let painter = ui.painter();
        let hour_height = geometry.hour_height;

        for (i, date) in week.iter().enumerate() {
            let column = column_rect(grid_rect, geometry.gutter_width, i);
            let fill = if *date == today {
                palette.today_bg
            } else {
                palette.regular_bg
            };
            painter.rect_filled(column, Rounding::ZERO, fill);
            painter.vline(column.right(), column.y_range(), Stroke::new(1.0, palette.divider));
        }

        let columns_x = (grid_rect.left() + geometry.gutter_width)..=grid_rect.right();
        for hour in 1..HOURS_PER_DAY {
            let y = grid_rect.top() + hour as f32 * hour_height;
            painter.hline(columns_x.clone(), y, Stroke::new(1.0, palette.hour_line));
        }

        let gutter_x = grid_rect.left() + geometry.gutter_width;
        painter.vline(gutter_x, grid_rect.y_range(), Stroke::new(1.0, palette.divider));

        let label_x = gutter_x - 6.0;
        for (hour, label) in hours().iter().enumerate() {
            let y = grid_rect.top() + hour as f32 * hour_height;
            let (anchor, size) = if hour == 0 {
                (Align2::RIGHT_TOP, 10.0)
            } else {
                (Align2::RIGHT_CENTER, 12.0)
            };
            painter.text(
                Pos2::new(label_x, y),
                anchor,
                label,
                FontId::proportional(size),
                palette.label_text,
            );
        }
        // Midnight again at the foot of the day
        painter.text(
            Pos2::new(label_x, grid_rect.bottom()),
            Align2::RIGHT_BOTTOM,
            &hours()[0],
            FontId::proportional(10.0),
            palette.label_text,
        );
    }

    /// Feed this frame's pointer input to the shell.
    ///
    /// Presses only count over the visible grid; once a drag holds the
    /// pointer capture, movement and release are read from anywhere in the
    /// window. Returns `true` when a release changed the selection.
    fn handle_pointer<S: SelectionSink>(
        ui: &egui::Ui,
        shell: &mut SelectionShell<S>,
        geometry: &GridGeometry,
        visible: Rect,
    ) -> bool {
        let ctx = ui.ctx();
        let (pressed, released, press_origin, latest) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && shell.is_idle() {
            if let Some(origin) = press_origin.filter(|p| ui.rect_contains_pointer(visible) && visible.contains(*p)) {
                let position = geometry.position_from_pointer(origin);
                if shell.pointer_down(egui::PointerButton::Primary, position, Some(geometry)) {
                    RangeDragManager::begin(ctx, position);
                }
            }
        }

        if RangeDragManager::is_active(ctx) {
            if let Some(pointer) = latest {
                let position = geometry.position_from_pointer(pointer);
                RangeDragManager::update(ctx, position);
                if shell.pointer_move(position, Some(geometry)) {
                    ctx.request_repaint();
                }
            }
        }

        let mut consumed = false;
        if released {
            let release_point = RangeDragManager::finish(ctx)
                .map(|drag| drag.current.absolute())
                .or(latest);
            if let Some(pointer) = release_point {
                consumed = shell.pointer_up(egui::PointerButton::Primary, pointer, ctx.screen_rect());
            }
        }

        if !shell.is_dragging() {
            RangeDragManager::cancel(ctx);
        }

        consumed
    }
}

/// Rect of day column `index` within a row that starts with the gutter.
fn column_rect(row: Rect, gutter_width: f32, index: usize) -> Rect {
    let col_width = (row.width() - gutter_width) / DAYS_PER_WEEK as f32;
    let left = row.left() + gutter_width + index as f32 * col_width;
    Rect::from_min_size(Pos2::new(left, row.top()), Vec2::new(col_width, row.height()))
}
