pub mod palette;
pub mod week_view;
