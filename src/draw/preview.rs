//! Cursor previews: non-committing renderables that follow the pointer.

use super::color::Color;
use super::point::Point;
use super::renderable::Renderable;
use super::sticker::StickerMark;
use super::surface::Surface;

/// Outline width of the marker radius indicator.
const MARKER_PREVIEW_LINE_WIDTH: f64 = 1.0;

/// Opacity of the ghost sticker drawn under the cursor.
pub const GHOST_OPACITY: f64 = 0.5;

/// Circle showing where, and how thick, the marker will draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCursorPreview {
    position: Point,
    thickness: f64,
    color: Color,
}

impl ToolCursorPreview {
    pub fn new(position: Point, thickness: f64, color: Color) -> Self {
        Self {
            position,
            thickness,
            color,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Renderable for ToolCursorPreview {
    fn paint(&self, surface: &mut dyn Surface) {
        surface.set_line_width(MARKER_PREVIEW_LINE_WIDTH);
        surface.set_color(self.color);
        surface.begin_path();
        surface.arc(self.position.x, self.position.y, self.thickness / 2.0);
        surface.stroke();
    }
}

/// Translucent copy of the pending sticker, drawn where it would land.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCursorPreview {
    ghost: StickerMark,
}

impl StickerCursorPreview {
    pub fn new(symbol: &str, position: Point, rotation_degrees: f64, font_size: f64) -> Self {
        Self {
            ghost: StickerMark::place(symbol, position.x, position.y, rotation_degrees, font_size),
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.ghost.reposition(x, y);
    }

    pub fn rotate(&mut self, delta_degrees: f64) {
        self.ghost.rotate(delta_degrees);
    }

    pub fn sticker(&self) -> &StickerMark {
        &self.ghost
    }
}

impl Renderable for StickerCursorPreview {
    fn paint(&self, surface: &mut dyn Surface) {
        self.ghost.paint_with_opacity(surface, GHOST_OPACITY);
    }
}

/// The single preview attached to the current tool.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorPreview {
    Marker(ToolCursorPreview),
    Sticker(StickerCursorPreview),
}

impl CursorPreview {
    /// Moves the preview to the pointer position.
    pub fn update(&mut self, x: f64, y: f64) {
        match self {
            CursorPreview::Marker(preview) => preview.update(x, y),
            CursorPreview::Sticker(preview) => preview.update(x, y),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            CursorPreview::Marker(preview) => preview.position(),
            CursorPreview::Sticker(preview) => preview.sticker().position(),
        }
    }
}

impl Renderable for CursorPreview {
    fn paint(&self, surface: &mut dyn Surface) {
        match self {
            CursorPreview::Marker(preview) => preview.paint(surface),
            CursorPreview::Sticker(preview) => preview.paint(surface),
        }
    }
}
