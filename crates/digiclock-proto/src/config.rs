use serde::{Deserialize, Deserializer, de::Error as _};

mod appearance;
mod validation;

pub use appearance::{Appearance, AppearanceColor, ColorTones, Shade};
pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/digiclock/config.toml";

/// Hour notation used when rendering the clock face.
#[derive(Deserialize, Default, Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HourFormat {
    /// `00`-`23`.
    #[default]
    TwentyFourHour,
    /// `01`-`12`, midnight and noon both render as `12`.
    TwelveHour,
}

impl HourFormat {
    /// Button caption for this format.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "24-Hour Format",
            Self::TwelveHour => "12-Hour Format",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClockModuleConfig {
    #[serde(default)]
    pub default_format: HourFormat,
    #[serde(
        deserialize_with = "tick_interval_deserializer",
        default = "default_tick_interval_ms"
    )]
    pub tick_interval_ms: u64,
}

impl Default for ClockModuleConfig {
    fn default() -> Self {
        Self {
            default_format: HourFormat::default(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn tick_interval_deserializer<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u64::deserialize(deserializer)?;

    if value == 0 {
        return Err(D::Error::custom("Tick interval must be greater than 0"));
    }

    Ok(value)
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

fn default_window_width() -> f32 {
    520.
}

fn default_window_height() -> f32 {
    360.
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub clock: ClockModuleConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub appearance: Appearance,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            clock: ClockModuleConfig::default(),
            window: WindowConfig::default(),
            appearance: Appearance::default(),
        }
    }
}
