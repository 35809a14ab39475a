//! Types shared by the export pipeline.

use crate::config::Config;
use crate::draw::{Color, FontDescriptor};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export scale {0}")]
    InvalidScale(f64),

    #[error("Export size {width}x{height} is too large")]
    TooLarge { width: f64, height: f64 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save export: {0}")]
    Io(#[from] std::io::Error),
}

/// Geometry and appearance of an exported image.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Canvas width in logical pixels
    pub width: u32,
    /// Canvas height in logical pixels
    pub height: u32,
    /// Upscale factor; the image is `width * scale` by `height * scale`
    pub scale: f64,
    /// Color painted under the marks
    pub background: Color,
    /// Font used for stickers
    pub font: FontDescriptor,
}

impl ExportOptions {
    /// Options for the configured canvas at the configured export scale.
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            scale: config.export.scale,
            background: config.canvas.background.to_color(),
            font: config.sticker.font(),
        }
    }

    /// Same options with a different scale.
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Output size in device pixels.
    ///
    /// # Errors
    /// Returns [`ExportError::InvalidScale`] for non-finite or non-positive
    /// scales and [`ExportError::TooLarge`] if the result overflows `i32`.
    pub fn pixel_size(&self) -> Result<(i32, i32), ExportError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ExportError::InvalidScale(self.scale));
        }

        let width = (f64::from(self.width) * self.scale).round();
        let height = (f64::from(self.height) * self.scale).round();
        if width < 1.0 || height < 1.0 {
            return Err(ExportError::InvalidScale(self.scale));
        }
        if width > f64::from(i32::MAX) || height > f64::from(i32::MAX) {
            return Err(ExportError::TooLarge { width, height });
        }

        Ok((width as i32, height as i32))
    }
}
