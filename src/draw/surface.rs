//! Drawing surface abstraction and its Cairo implementation.
//!
//! Renderables only ever issue the primitive calls declared on [`Surface`]:
//! stroke style, path tracing, text fill/measure, transform stack and clear.
//! [`CairoSurface`] maps them onto a `cairo::Context`, using Pango for text so
//! emoji stickers are shaped and measured the same way on screen and in exports.

use super::color::Color;
use super::font::FontDescriptor;

/// The primitive drawing calls the core relies on.
///
/// Coordinates are canvas-local pixels; any device scale (e.g. export
/// upscaling) is applied by whoever owns the surface.
pub trait Surface {
    /// Sets the width used by the next [`Surface::stroke`].
    fn set_line_width(&mut self, width: f64);

    /// Sets the color used for both stroking and text fill.
    fn set_color(&mut self, color: Color);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment from the current point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a full circle as a closed sub-path.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64);

    /// Strokes and consumes the current path.
    fn stroke(&mut self);

    /// Sets the pixel size used for text fill and measurement.
    fn set_font_size(&mut self, size: f64);

    /// Fills `text` with its baseline starting at (x, y).
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Returns the advance width of `text` at the current font size.
    fn measure_text(&mut self, text: &str) -> f64;

    /// Pushes the current transform and style state.
    fn save(&mut self);

    /// Pops the state pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotates the user space by `radians` (clockwise in screen space).
    fn rotate(&mut self, radians: f64);

    /// Resets every pixel of the surface to its background, ignoring transforms.
    fn clear(&mut self);
}

/// [`Surface`] backed by a Cairo context.
pub struct CairoSurface {
    ctx: cairo::Context,
    background: Color,
    font: FontDescriptor,
    font_size: f64,
}

impl CairoSurface {
    /// Wraps a context. `background` is what [`Surface::clear`] paints.
    pub fn new(ctx: cairo::Context, background: Color, font: FontDescriptor) -> Self {
        Self {
            ctx,
            background,
            font,
            font_size: 16.0,
        }
    }

    fn layout(&self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.ctx);
        let font_desc =
            pango::FontDescription::from_string(&self.font.to_pango_string(self.font_size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);
        layout
    }
}

impl Surface for CairoSurface {
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64) {
        self.ctx.new_sub_path();
        self.ctx.arc(cx, cy, radius.max(0.0), 0.0, 2.0 * std::f64::consts::PI);
    }

    fn stroke(&mut self) {
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.set_line_join(cairo::LineJoin::Round);
        let _ = self.ctx.stroke();
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }
        let layout = self.layout(text);
        // Pango positions layouts by their top-left corner, not the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.ctx.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.ctx, &layout);
        self.ctx.new_path();
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let (_ink, logical) = self.layout(text).extents();
        logical.width() as f64 / pango::SCALE as f64
    }

    fn save(&mut self) {
        let _ = self.ctx.save();
    }

    fn restore(&mut self) {
        let _ = self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ctx.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.ctx.rotate(radians);
    }

    fn clear(&mut self) {
        let bg = self.background;
        let _ = self.ctx.save();
        self.ctx.identity_matrix();
        self.ctx.reset_clip();
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = self.ctx.paint();
        let _ = self.ctx.restore();
        self.ctx.new_path();
    }
}

#[cfg(test)]
pub(crate) use recording::{RecordingSurface, SurfaceOp};
