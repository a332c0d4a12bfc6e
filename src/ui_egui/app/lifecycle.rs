use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::selection_log::LogSink;
use crate::services::settings::SettingsService;
use crate::ui_egui::drag::RangeDragManager;
use crate::ui_egui::selection_shell::{MenuLayout, SelectionShell};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::week_view::WeekView;
use crate::utils::date::week_dates;
use chrono::{Local, NaiveDate};

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_default_location();
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded settings from {}: theme={}, first_day_of_week={}",
            settings_service.path().display(),
            settings.theme,
            settings.first_day_of_week
        );

        let app = Self::with_settings(settings, Local::now().date_naive());
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without a window, for a given "today".
    pub fn with_settings(settings: Settings, today: NaiveDate) -> Self {
        let active_theme = CalendarTheme::from_name(&settings.theme);
        let shell = SelectionShell::new(
            week_dates(today, settings.first_day_of_week),
            MenuLayout::from(&settings),
            LogSink::new(),
        );

        Self {
            settings,
            active_theme,
            today,
            shell,
        }
    }

    pub fn visible_week(&self) -> &[NaiveDate] {
        self.shell.week()
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.release_gesture(ctx);
        }

        self.roll_over_day_if_idle(Local::now().date_naive());

        egui::CentralPanel::default().show(ctx, |ui| {
            WeekView::show(ui, &mut self.shell, &self.settings, &self.active_theme, self.today);
        });
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shell.reset();
    }

    /// Drop the pointer capture and any unfinished selection.
    fn release_gesture(&mut self, ctx: &egui::Context) {
        RangeDragManager::cancel(ctx);
        self.shell.reset();
    }

    /// Move to the new week after midnight, but never under an active gesture.
    pub(crate) fn roll_over_day_if_idle(&mut self, now: NaiveDate) -> bool {
        if now == self.today || !self.shell.is_idle() {
            return false;
        }

        log::info!("Date changed to {}, rebuilding visible week", now);
        self.today = now;
        self.shell = SelectionShell::new(
            week_dates(now, self.settings.first_day_of_week),
            MenuLayout::from(&self.settings),
            LogSink::new(),
        );
        true
    }
}
