//! Configuration loading for the widget core.
//!
//! Parses `menukit.toml` into the timing and text defaults the widgets
//! consume: cursor blink period, scroll transition duration, and the default
//! reveal speed. Unknown fields are ignored so the file can grow without
//! breaking older binaries; a malformed file falls back to defaults rather
//! than failing startup.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Milliseconds between cursor blink toggles.
    #[serde(default = "TimingConfig::default_cursor_blink_ms")]
    pub cursor_blink_ms: u32,
    /// Duration of one scroll-window transition.
    #[serde(default = "TimingConfig::default_scroll_ms")]
    pub scroll_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cursor_blink_ms: Self::default_cursor_blink_ms(),
            scroll_ms: Self::default_scroll_ms(),
        }
    }
}

impl TimingConfig {
    const fn default_cursor_blink_ms() -> u32 {
        400
    }
    const fn default_scroll_ms() -> u32 {
        100
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TextConfig {
    /// Default progressive-reveal speed in characters per second.
    #[serde(default = "TextConfig::default_speed_cps")]
    pub default_speed_cps: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_speed_cps: Self::default_speed_cps(),
        }
    }
}

impl TextConfig {
    const fn default_speed_cps() -> f32 {
        40.0
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub text: TextConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub file: ConfigFile,
}

impl Config {
    pub fn timing(&self) -> TimingConfig {
        self.file.timing
    }

    pub fn text(&self) -> TextConfig {
        self.file.text
    }
}

/// Best-effort config path: working-directory `menukit.toml` first, then the
/// platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("menukit.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("menukit").join("menukit.toml");
    }
    PathBuf::from("menukit.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(
                    target: "menu.config",
                    path = %path.display(),
                    cursor_blink_ms = file.timing.cursor_blink_ms,
                    scroll_ms = file.timing.scroll_ms,
                    "config_loaded"
                );
                Ok(Config { file })
            }
            Err(e) => {
                warn!(target: "menu.config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        },
        Err(_) => Ok(Config::default()),
    }
}
