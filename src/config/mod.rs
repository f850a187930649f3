// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Every setting is optional in the file; missing or unparseable values fall
//! back to fixed defaults so a broken config can never prevent rendering.
//!
//! # Examples
//!
//! ```no_run
//! use miclock::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.background_color = Some("#1B5E20".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::design_tokens::{palette, typography};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MiClock";

pub const DEFAULT_BACKGROUND_HEX: &str = "#237EAD";
pub const DEFAULT_LIGHT_HEX: &str = "#FFFFFF";
pub const DEFAULT_DARK_HEX: &str = "#80FFFFFF";
pub const DEFAULT_TEXT_SIZE: f32 = typography::LABEL_SIZE;
pub const DEFAULT_MAX_TILT_DEGREES: f32 = 10.0;

pub const MIN_TEXT_SIZE: f32 = 8.0;
pub const MAX_TEXT_SIZE: f32 = 96.0;
pub const MIN_MAX_TILT_DEGREES: f32 = 0.0;
pub const MAX_MAX_TILT_DEGREES: f32 = 45.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dial background color as `#RRGGBB` or `#AARRGGBB`.
    pub background_color: Option<String>,
    /// Bright accent color (minute/second hands, gradient head).
    #[serde(default)]
    pub light_color: Option<String>,
    /// Muted accent color (hour hand, labels, gradient tail).
    #[serde(default)]
    pub dark_color: Option<String>,
    /// Size of the dial labels in logical pixels.
    #[serde(default)]
    pub text_size: Option<f32>,
    /// Maximum tilt angle of the pseudo-3D effect, in degrees.
    #[serde(default)]
    pub max_tilt_degrees: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: Some(DEFAULT_BACKGROUND_HEX.to_string()),
            light_color: Some(DEFAULT_LIGHT_HEX.to_string()),
            dark_color: Some(DEFAULT_DARK_HEX.to_string()),
            text_size: Some(DEFAULT_TEXT_SIZE),
            max_tilt_degrees: Some(DEFAULT_MAX_TILT_DEGREES),
        }
    }
}

impl Config {
    /// Resolved background color, defaulting on a missing or invalid value.
    #[must_use]
    pub fn background(&self) -> Color {
        resolve_color(self.background_color.as_deref(), palette::MI_BLUE)
    }

    /// Resolved bright accent color.
    #[must_use]
    pub fn light(&self) -> Color {
        resolve_color(self.light_color.as_deref(), palette::LIGHT)
    }

    /// Resolved muted accent color.
    #[must_use]
    pub fn dark(&self) -> Color {
        resolve_color(self.dark_color.as_deref(), palette::DARK)
    }

    /// Label text size, clamped to the supported range.
    #[must_use]
    pub fn text_size(&self) -> f32 {
        self.text_size
            .unwrap_or(DEFAULT_TEXT_SIZE)
            .clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE)
    }

    /// Maximum tilt angle, clamped so persisted configs cannot request a
    /// tilt that folds the dial over itself.
    #[must_use]
    pub fn max_tilt_degrees(&self) -> f32 {
        self.max_tilt_degrees
            .unwrap_or(DEFAULT_MAX_TILT_DEGREES)
            .clamp(MIN_MAX_TILT_DEGREES, MAX_MAX_TILT_DEGREES)
    }
}

fn resolve_color(hex: Option<&str>, fallback: Color) -> Color {
    match hex {
        None => fallback,
        Some(value) => parse_color(value).unwrap_or_else(|| {
            log::warn!("ignoring invalid color {value:?}, using default");
            fallback
        }),
    }
}

/// Parses `#RRGGBB` or `#AARRGGBB` (Android channel order) into a [`Color`].
///
/// Returns `None` for anything else; callers fall back to defaults.
#[must_use]
pub fn parse_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f32> {
        let byte = u8::from_str_radix(digits.get(range)?, 16).ok()?;
        Some(byte as f32 / 255.0)
    };

    match digits.len() {
        6 => Some(Color::from_rgb(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        )),
        8 => Some(Color::from_rgba(
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
            channel(0..2)?,
        )),
        _ => None,
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("invalid settings file {}: {err}", path.display());
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_colors() {
        let config = Config {
            background_color: Some("#1B5E20".to_string()),
            light_color: Some("#FFEE58".to_string()),
            dark_color: Some("#40FFFFFF".to_string()),
            text_size: Some(20.0),
            max_tilt_degrees: Some(15.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.background_color, config.background_color);
        assert_eq!(loaded.light_color, config.light_color);
        assert_eq!(loaded.dark_color, config.dark_color);
        assert_eq!(loaded.text_size, config.text_size);
        assert_eq!(loaded.max_tilt_degrees, config.max_tilt_degrees);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.background_color, Some(DEFAULT_BACKGROUND_HEX.to_string()));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn parse_color_accepts_rgb() {
        let color = parse_color("#237EAD").expect("valid color");
        assert!((color.r - 0x23 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 0x7E as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0xAD as f32 / 255.0).abs() < f32::EPSILON);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parse_color_accepts_argb() {
        let color = parse_color("#80FFFFFF").expect("valid color");
        assert!((color.a - 0x80 as f32 / 255.0).abs() < f32::EPSILON);
        assert_eq!(color.r, 1.0);
    }

    #[test]
    fn parse_color_rejects_junk() {
        assert!(parse_color("237EAD").is_none());
        assert!(parse_color("#23").is_none());
        assert!(parse_color("#GGGGGG").is_none());
        assert!(parse_color("#237EAD00FF").is_none());
    }

    #[test]
    fn invalid_color_falls_back_to_default() {
        let config = Config {
            background_color: Some("not-a-color".to_string()),
            ..Config::default()
        };
        assert_eq!(config.background(), palette::MI_BLUE);
    }

    #[test]
    fn missing_values_use_defaults() {
        let config = Config {
            background_color: None,
            light_color: None,
            dark_color: None,
            text_size: None,
            max_tilt_degrees: None,
        };
        assert_eq!(config.background(), palette::MI_BLUE);
        assert_eq!(config.light(), palette::LIGHT);
        assert_eq!(config.text_size(), DEFAULT_TEXT_SIZE);
        assert_eq!(config.max_tilt_degrees(), DEFAULT_MAX_TILT_DEGREES);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            text_size: Some(500.0),
            max_tilt_degrees: Some(-3.0),
            ..Config::default()
        };
        assert_eq!(config.text_size(), MAX_TEXT_SIZE);
        assert_eq!(config.max_tilt_degrees(), MIN_MAX_TILT_DEGREES);
    }
}
