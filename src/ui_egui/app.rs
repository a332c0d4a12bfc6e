mod lifecycle;

use crate::models::settings::Settings;
use crate::services::selection_log::LogSink;
use crate::ui_egui::selection_shell::SelectionShell;
use crate::ui_egui::theme::CalendarTheme;
use chrono::NaiveDate;

pub struct CalendarApp {
    /// Layout and appearance options loaded at startup
    settings: Settings,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Date the visible week was built from
    today: NaiveDate,
    /// Sole owner of the in-progress selection
    shell: SelectionShell<LogSink>,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
