//! Colors for the week grid and the egui chrome around it.
//!
//! Settings name a theme ("light", "dark" or "system"); this module turns
//! that name into concrete colors and pushes the matching visuals into egui.

use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    pub is_dark: bool,
    /// Panel and window fill behind everything
    pub window_fill: Color32,
    /// Header strip behind the day names
    pub strip_fill: Color32,
    /// Day columns and agenda cells
    pub column_fill: Color32,
    /// Column for the current date
    pub today_fill: Color32,
    /// Today marker, hover tint and drag selection
    pub accent: Color32,
    /// Hour lines and column borders
    pub grid_line: Color32,
    pub text: Color32,
    /// Hour labels, dates and agenda placeholder
    pub muted_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            window_fill: Color32::from_rgb(244, 244, 245),
            strip_fill: Color32::from_rgb(250, 250, 250),
            column_fill: Color32::WHITE,
            today_fill: Color32::from_rgb(232, 241, 255),
            accent: Color32::from_rgb(59, 130, 246),
            grid_line: Color32::from_rgb(221, 221, 225),
            text: Color32::from_rgb(39, 39, 42),
            muted_text: Color32::from_rgb(113, 113, 122),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            window_fill: Color32::from_rgb(24, 24, 27),
            strip_fill: Color32::from_rgb(32, 32, 36),
            column_fill: Color32::from_rgb(39, 39, 42),
            today_fill: Color32::from_rgb(45, 55, 78),
            accent: Color32::from_rgb(96, 165, 250),
            grid_line: Color32::from_rgb(63, 63, 70),
            text: Color32::from_rgb(244, 244, 245),
            muted_text: Color32::from_rgb(161, 161, 170),
        }
    }

    /// Resolve a settings theme name. "system" follows the OS preference
    /// and falls back to light when the platform doesn't report one.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
            _ => Self::light(),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.window_fill;
        visuals.panel_fill = self.window_fill;
        visuals.extreme_bg_color = self.column_fill;
        visuals.selection.bg_fill = self.accent;
        visuals.widgets.noninteractive.bg_stroke.color = self.grid_line;
        visuals.override_text_color = Some(self.text);

        ctx.set_visuals(visuals);
    }
}
