//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::{self, ExportTarget};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush when the canvas first opens. The toolbar changes these
/// values at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial stroke color - a named color, a `#rrggbb` hex string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush width in pixels (even, valid range: 2 - 512)
    #[serde(default = "default_brush_width")]
    pub default_brush_width: u32,

    /// Opacity of airbrush stamps (valid range: 0.05 - 1.0)
    #[serde(default = "default_airbrush_opacity")]
    pub airbrush_opacity: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_width: default_brush_width(),
            airbrush_opacity: default_airbrush_opacity(),
        }
    }
}

/// Canvas dimensions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (`~/` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name of the exported image
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
        }
    }
}

impl ExportConfig {
    /// Resolves the configured location into an export target.
    pub fn target(&self) -> ExportTarget {
        ExportTarget {
            directory: export::expand_tilde(&self.directory),
            filename: self.filename.clone(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_width() -> u32 {
    10
}

fn default_airbrush_opacity() -> f64 {
    0.3
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    600
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_filename() -> String {
    export::DEFAULT_FILENAME.to_string()
}
