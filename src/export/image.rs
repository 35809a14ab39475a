//! Offscreen rendering and PNG encoding.

use super::types::{ExportError, ExportOptions};
use crate::draw::{CairoSurface, SceneView, Surface, replay};

/// Renders the committed history (and any mark in progress) at export scale.
///
/// The cursor preview is never part of an export.
pub fn render_export(
    view: SceneView<'_>,
    options: &ExportOptions,
) -> Result<cairo::ImageSurface, ExportError> {
    let (width, height) = options.pixel_size()?;
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;

    {
        let ctx = cairo::Context::new(&image)?;
        ctx.scale(options.scale, options.scale);
        let mut surface = CairoSurface::new(ctx, options.background, options.font.clone());
        surface.clear();
        replay(&mut surface, view.history, view.in_progress);
    }

    image.flush();
    log::debug!(
        "Rendered {} marks at {}x{} (scale {:.2})",
        view.history.len(),
        width,
        height,
        options.scale
    );
    Ok(image)
}

/// Encodes an image surface as PNG bytes.
pub fn encode_png(image: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    image.write_to_png(&mut buffer)?;
    Ok(buffer)
}
