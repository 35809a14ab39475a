//! Emoji/text stickers.

use super::color::BLACK;
use super::point::Point;
use super::renderable::Renderable;
use super::surface::Surface;
use crate::util;

/// Baseline offset below the sticker center, as a fraction of the font size.
///
/// Fixed per font size; glyphs are not re-measured vertically.
pub const STICKER_BASELINE_RATIO: f64 = 0.5;

/// A symbol stamped onto the canvas, centered on its position and rotated
/// about that center.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerMark {
    symbol: String,
    position: Point,
    /// Degrees, kept in `[0, 360)`
    rotation: f64,
    font_size: f64,
}

impl StickerMark {
    /// Places `symbol` centered at (x, y).
    pub fn place(
        symbol: impl Into<String>,
        x: f64,
        y: f64,
        rotation_degrees: f64,
        font_size: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            position: Point::new(x, y),
            rotation: util::normalize_degrees(rotation_degrees),
            font_size,
        }
    }

    /// Moves the sticker center. Only reachable while the sticker is owned by
    /// the placement in progress; committed stickers are shared read-only.
    pub fn reposition(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Adds `delta_degrees` and wraps the result into `[0, 360)`.
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.rotation = util::normalize_degrees(self.rotation + delta_degrees);
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub(crate) fn paint_with_opacity(&self, surface: &mut dyn Surface, opacity: f64) {
        surface.save();
        surface.translate(self.position.x, self.position.y);
        surface.rotate(self.rotation.to_radians());
        surface.set_font_size(self.font_size);
        surface.set_color(BLACK.with_alpha(opacity));
        let width = surface.measure_text(&self.symbol);
        surface.fill_text(
            &self.symbol,
            -width / 2.0,
            self.font_size * STICKER_BASELINE_RATIO,
        );
        surface.restore();
    }
}

impl Renderable for StickerMark {
    fn paint(&self, surface: &mut dyn Surface) {
        self.paint_with_opacity(surface, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{RecordingSurface, SurfaceOp};

    fn rotation_of(ops: &[SurfaceOp]) -> f64 {
        ops.iter()
            .find_map(|op| match op {
                SurfaceOp::Rotate(radians) => Some(*radians),
                _ => None,
            })
            .expect("sticker paint rotates")
    }

    #[test]
    fn five_fifteen_degree_steps_paint_at_seventy_five() {
        let mut sticker = StickerMark::place("⭐", 50.0, 50.0, 0.0, 32.0);
        for _ in 0..5 {
            sticker.rotate(15.0);
        }
        assert_eq!(sticker.rotation(), 75.0);

        let mut surface = RecordingSurface::new();
        sticker.paint(&mut surface);

        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::Save,
                SurfaceOp::Translate(50.0, 50.0),
                SurfaceOp::Rotate(75.0_f64.to_radians()),
                SurfaceOp::FontSize(32.0),
                SurfaceOp::Color(BLACK),
                SurfaceOp::FillText("⭐".to_string(), -8.0, 16.0),
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn full_turn_leaves_orientation_unchanged() {
        let mut coarse = StickerMark::place("🐱", 0.0, 0.0, 40.0, 32.0);
        coarse.rotate(360.0);
        assert_eq!(coarse.rotation(), 40.0);

        let mut fine = StickerMark::place("🐱", 0.0, 0.0, 40.0, 32.0);
        for _ in 0..36 {
            fine.rotate(10.0);
        }
        assert_eq!(fine.rotation(), 40.0);

        let mut uneven = StickerMark::place("🐱", 0.0, 0.0, 40.0, 32.0);
        for _ in 0..3600 {
            uneven.rotate(0.1);
        }
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        coarse.paint(&mut a);
        uneven.paint(&mut b);
        let (ra, rb) = (rotation_of(&a.ops), rotation_of(&b.ops));
        assert!((ra.sin() - rb.sin()).abs() < 1e-9);
        assert!((ra.cos() - rb.cos()).abs() < 1e-9);
    }

    #[test]
    fn negative_rotation_wraps_into_positive_range() {
        let mut sticker = StickerMark::place("🌮", 0.0, 0.0, 0.0, 24.0);
        sticker.rotate(-15.0);
        assert_eq!(sticker.rotation(), 345.0);

        let placed = StickerMark::place("🌮", 0.0, 0.0, -370.0, 24.0);
        assert_eq!(placed.rotation(), 350.0);
    }

    #[test]
    fn reposition_moves_center() {
        let mut sticker = StickerMark::place("🌮", 1.0, 2.0, 0.0, 24.0);
        sticker.reposition(30.0, 40.0);
        assert_eq!(sticker.position(), Point::new(30.0, 40.0));
    }
}
