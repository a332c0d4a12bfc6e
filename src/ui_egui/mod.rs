mod app;
pub mod drag;
pub mod grid_mapping;
pub mod radial_menu;
pub mod selection_shell;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
