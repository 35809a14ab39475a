//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::FontDescriptor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Color painted when the canvas is cleared ("transparent" keeps alpha)
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Marker tool settings.
///
/// The tool palette offers a thin and a thick marker; selecting either resets
/// the color to `default_color` (or a random color when `randomize_color` is set).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkerConfig {
    /// Thin marker width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Thick marker width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,

    /// Marker color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_marker_color")]
    pub default_color: ColorSpec,

    /// Pick a random color every time a tool is selected
    #[serde(default)]
    pub randomize_color: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
            default_color: default_marker_color(),
            randomize_color: false,
        }
    }
}

/// Sticker tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StickerConfig {
    /// Sticker glyph size in pixels (valid range: 8.0 - 128.0)
    #[serde(default = "default_sticker_font_size")]
    pub font_size: f64,

    /// Font family used to draw stickers (should cover emoji)
    #[serde(default = "default_sticker_font_family")]
    pub font_family: String,

    /// Initial sticker palette; custom stickers are appended at runtime
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Degrees added per rotate keypress (valid range: 1.0 - 180.0)
    #[serde(default = "default_rotation_step")]
    pub rotation_step: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            font_size: default_sticker_font_size(),
            font_family: default_sticker_font_family(),
            palette: default_palette(),
            rotation_step: default_rotation_step(),
        }
    }
}

impl StickerConfig {
    /// Font descriptor for sticker glyphs.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::for_family(&self.font_family)
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Upscale factor applied to the canvas size (valid range: 1.0 - 8.0)
    #[serde(default = "default_export_scale")]
    pub scale: f64,

    /// Directory for exports triggered by the export keybinding (`~` expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers, without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    256
}

fn default_canvas_height() -> u32 {
    256
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_thin_thickness() -> f64 {
    2.0
}

fn default_thick_thickness() -> f64 {
    6.0
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_sticker_font_size() -> f64 {
    32.0
}

fn default_sticker_font_family() -> String {
    "Sans".to_string()
}

pub(crate) fn default_palette() -> Vec<String> {
    vec!["🌮".to_string(), "🐱".to_string(), "⭐".to_string()]
}

fn default_rotation_step() -> f64 {
    15.0
}

fn default_export_scale() -> f64 {
    4.0
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

pub(crate) fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
