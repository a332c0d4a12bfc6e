// Settings service module
// Loads and saves user settings from a TOML file

mod service;

pub use service::SettingsService;
