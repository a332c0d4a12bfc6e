// Settings module
// User-tunable layout and appearance options, stored as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_NAMES: [&str; 3] = ["light", "dark", "system"];

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),
    #[error("first_day_of_week must be between 0 and 6, got {0}")]
    FirstDayOutOfRange(u8),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("menu hub ({hub}px) must be smaller than the menu ({menu}px)")]
    HubTooLarge { hub: f32, menu: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub date_format: String,
    /// Width of the hour label column left of the day columns
    pub gutter_width: f32,
    pub hour_height: f32,
    /// Height of the whole-day agenda strip above the time grid
    pub agenda_height: f32,
    pub menu_diameter: f32,
    pub menu_hub_diameter: f32,
    /// Minimum distance kept between the radial menu and the window edge
    pub menu_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            first_day_of_week: 0, // Sunday
            date_format: "MM/DD/YYYY".to_string(),
            gutter_width: 64.0,
            hour_height: 64.0,
            agenda_height: 128.0,
            menu_diameter: 192.0,
            menu_hub_diameter: 64.0,
            menu_margin: 8.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(SettingsError::UnknownTheme(self.theme.clone()));
        }

        if self.first_day_of_week > 6 {
            return Err(SettingsError::FirstDayOutOfRange(self.first_day_of_week));
        }

        // The margin may be zero; every other size must be positive
        let sizes = [
            ("gutter_width", self.gutter_width, false),
            ("hour_height", self.hour_height, false),
            ("agenda_height", self.agenda_height, false),
            ("menu_diameter", self.menu_diameter, false),
            ("menu_hub_diameter", self.menu_hub_diameter, false),
            ("menu_margin", self.menu_margin, true),
        ];
        for (field, value, zero_allowed) in sizes {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field, value });
            }
            if value < 0.0 || (value == 0.0 && !zero_allowed) {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        if self.menu_hub_diameter >= self.menu_diameter {
            return Err(SettingsError::HubTooLarge {
                hub: self.menu_hub_diameter,
                menu: self.menu_diameter,
            });
        }

        Ok(())
    }
}
