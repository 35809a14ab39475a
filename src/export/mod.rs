//! Image export.
//!
//! Renders committed history onto an upscaled offscreen Cairo surface, encodes
//! it as PNG, and writes it either to an explicit path or into the configured
//! export directory under a timestamped name.

pub mod file;
pub mod image;
pub mod types;

pub use file::{FileSaveConfig, expand_tilde, save_png, save_png_to};
pub use image::{encode_png, render_export};
pub use types::{ExportError, ExportOptions};
