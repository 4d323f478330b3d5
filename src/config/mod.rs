//! Configuration file support for paintbox.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintbox/config.toml` (or a path given on the command line).
//! Settings include the initial brush, the canvas size and where exports are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::export::DEFAULT_FILENAME;
use crate::input::{BRUSH_STEP, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest canvas edge accepted from the config file.
const MAX_CANVAS_EDGE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_brush_width = 10
/// airbrush_opacity = 0.3
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [export]
/// directory = "~/Pictures"
/// filename = "painting.png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, width, airbrush opacity)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export location
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_width`: even, 2 - 512
    /// - `airbrush_opacity`: 0.05 - 1.0
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `export.filename`: non-empty, ending in `.png`
    pub fn validate_and_clamp(&mut self) {
        // Brush width: the +/- controls move in steps of 2 within 2 - 512
        let width = self.drawing.default_brush_width;
        if !(MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH).contains(&width) || width % BRUSH_STEP != 0 {
            let fixed = width
                .clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
                .next_multiple_of(BRUSH_STEP);
            log::warn!("Invalid default_brush_width {width}, using {fixed}");
            self.drawing.default_brush_width = fixed;
        }

        // Airbrush opacity: 0.05 - 1.0
        if !(0.05..=1.0).contains(&self.drawing.airbrush_opacity) {
            log::warn!(
                "Invalid airbrush_opacity {:.2}, clamping to 0.05-1.0 range",
                self.drawing.airbrush_opacity
            );
            self.drawing.airbrush_opacity = if self.drawing.airbrush_opacity.is_nan() {
                0.3
            } else {
                self.drawing.airbrush_opacity.clamp(0.05, 1.0)
            };
        }

        // Canvas size: 1 - 8192
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        // Export filename: exports are always PNG
        let filename = self.export.filename.trim().to_string();
        if filename.is_empty() {
            log::warn!("Empty export filename, falling back to '{DEFAULT_FILENAME}'");
            self.export.filename = DEFAULT_FILENAME.to_string();
        } else if !filename.to_lowercase().ends_with(".png") {
            log::warn!("Export filename '{filename}' lacks .png extension, appending it");
            self.export.filename = format!("{filename}.png");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintbox/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintbox");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_brush_width, 10);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.airbrush_opacity, 0.3);
        assert_eq!((config.canvas.width, config.canvas.height), (800, 600));
        assert_eq!(config.export.filename, "painting.png");
    }

    #[test]
    fn brush_width_is_forced_even_and_above_minimum() {
        let config = Config::from_toml("[drawing]\ndefault_brush_width = 0\n").unwrap();
        assert_eq!(config.drawing.default_brush_width, 2);

        let config = Config::from_toml("[drawing]\ndefault_brush_width = 7\n").unwrap();
        assert_eq!(config.drawing.default_brush_width, 8);
    }

    #[test]
    fn huge_brush_width_is_capped() {
        for width in [u32::MAX, u32::MAX - 1, 513] {
            let config =
                Config::from_toml(&format!("[drawing]\ndefault_brush_width = {width}\n")).unwrap();
            assert_eq!(config.drawing.default_brush_width, MAX_BRUSH_WIDTH);
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            airbrush_opacity = 3.0

            [canvas]
            width = 0
            height = 100000

            [export]
            filename = "sketch"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.airbrush_opacity, 1.0);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.export.filename, "sketch.png");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\n").is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_color = \"#ff0000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_color.to_color(), crate::draw::RED);
    }

    #[test]
    fn load_from_missing_file_fails_with_context() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn export_target_expands_configured_location() {
        let config = Config::from_toml("[export]\ndirectory = \"/tmp/art\"\n").unwrap();
        let target = config.export.target();
        assert_eq!(target.path(), PathBuf::from("/tmp/art/painting.png"));
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").expect("schema has properties");
        for section in ["drawing", "canvas", "export"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
