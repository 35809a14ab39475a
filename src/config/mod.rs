//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include canvas geometry,
//! marker and sticker defaults, export scaling, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, ExportConfig, MarkerConfig, StickerConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [marker]
/// thin_thickness = 2.0
/// thick_thickness = 6.0
/// default_color = "black"
///
/// [sticker]
/// palette = ["🌮", "🐱", "⭐"]
///
/// [export]
/// scale = 4.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Marker tool defaults
    #[serde(default)]
    pub marker: MarkerConfig,

    /// Sticker tool defaults
    #[serde(default)]
    pub sticker: StickerConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 4096
    /// - marker thicknesses: 0.5 - 50.0 (thin never exceeds thick)
    /// - `sticker.font_size`: 8.0 - 128.0
    /// - `sticker.rotation_step`: 1.0 - 180.0
    /// - `export.scale`: 1.0 - 8.0
    pub fn validate_and_clamp(&mut self) {
        if !(16..=4096).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }

        if !(16..=4096).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }

        for (name, value) in [
            ("thin_thickness", &mut self.marker.thin_thickness),
            ("thick_thickness", &mut self.marker.thick_thickness),
        ] {
            if !(0.5..=50.0).contains(&*value) {
                warn!("Invalid {name} {:.1}, clamping to 0.5-50.0 range", *value);
                // NaN fails `contains` and survives clamp; fall back to the floor
                *value = if value.is_nan() { 0.5 } else { value.clamp(0.5, 50.0) };
            }
        }

        if self.marker.thin_thickness > self.marker.thick_thickness {
            warn!(
                "thin_thickness {:.1} exceeds thick_thickness {:.1}, swapping",
                self.marker.thin_thickness, self.marker.thick_thickness
            );
            std::mem::swap(
                &mut self.marker.thin_thickness,
                &mut self.marker.thick_thickness,
            );
        }

        if !(8.0..=128.0).contains(&self.sticker.font_size) {
            warn!(
                "Invalid sticker font_size {:.1}, clamping to 8.0-128.0 range",
                self.sticker.font_size
            );
            self.sticker.font_size = if self.sticker.font_size.is_nan() {
                8.0
            } else {
                self.sticker.font_size.clamp(8.0, 128.0)
            };
        }

        if !(1.0..=180.0).contains(&self.sticker.rotation_step) {
            warn!(
                "Invalid rotation_step {:.1}°, clamping to 1.0-180.0° range",
                self.sticker.rotation_step
            );
            self.sticker.rotation_step = if self.sticker.rotation_step.is_nan() {
                1.0
            } else {
                self.sticker.rotation_step.clamp(1.0, 180.0)
            };
        }

        let before = self.sticker.palette.len();
        self.sticker
            .palette
            .retain(|symbol| !symbol.trim().is_empty());
        if self.sticker.palette.len() != before {
            warn!(
                "Dropped {} empty sticker palette entries",
                before - self.sticker.palette.len()
            );
        }
        if self.sticker.palette.is_empty() {
            warn!("Sticker palette is empty, falling back to the default palette");
            self.sticker.palette = types::default_palette();
        }

        if !(1.0..=8.0).contains(&self.export.scale) {
            warn!(
                "Invalid export scale {:.2}, clamping to 1.0-8.0 range",
                self.export.scale
            );
            self.export.scale = if self.export.scale.is_nan() {
                1.0
            } else {
                self.export.scale.clamp(1.0, 8.0)
            };
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, falling back to the default");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
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
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Writes the commented example config to `path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists at `path` or it cannot be written.
    pub fn create_default_file_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                path.display()
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(path, default_config)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Created default config at {}", path.display());
        Ok(())
    }

    /// Writes the commented example config to the default location.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
