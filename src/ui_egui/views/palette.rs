use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub strip_bg: Color32,
    pub strip_border: Color32,
    pub accent_line: Color32,
    pub cell_bg: Color32,
    pub today_cell_bg: Color32,
    pub text: Color32,
    pub date_text: Color32,
    pub agenda_text: Color32,
    pub hover_overlay: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            strip_bg: theme.strip_fill,
            strip_border: theme.grid_line,
            accent_line: theme.accent,
            cell_bg: theme.column_fill,
            today_cell_bg: theme.today_fill,
            text: theme.text,
            date_text: theme.muted_text,
            agenda_text: with_alpha(theme.muted_text, 200),
            hover_overlay: with_alpha(theme.accent, if theme.is_dark { 60 } else { 35 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub regular_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub label_text: Color32,
    pub selection_fill: Color32,
    pub selection_border: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.column_fill,
            today_bg: theme.today_fill,
            hour_line: theme.grid_line,
            divider: blend(theme.grid_line, theme.muted_text, 0.25),
            label_text: theme.muted_text,
            selection_fill: with_alpha(theme.accent, if theme.is_dark { 110 } else { 90 }),
            selection_border: theme.accent,
        }
    }
}

/// Colors for the purpose menu. The menu stays dark in both themes so it
/// reads as a floating control over the grid.
#[derive(Clone, Copy)]
pub struct RadialMenuPalette {
    pub background: Color32,
    pub hover: Color32,
    pub divider: Color32,
    pub text: Color32,
    pub disabled_text: Color32,
    pub disabled_overlay: Color32,
}

impl RadialMenuPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        let background = if theme.is_dark {
            blend(theme.column_fill, Color32::BLACK, 0.3)
        } else {
            Color32::from_rgb(39, 39, 42)
        };
        Self {
            background,
            hover: blend(background, Color32::WHITE, 0.12),
            divider: Color32::from_rgb(212, 212, 216),
            text: Color32::WHITE,
            disabled_text: with_alpha(Color32::WHITE, 110),
            disabled_overlay: with_alpha(Color32::WHITE, 50),
        }
    }
}
