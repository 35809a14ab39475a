//! Freehand marker strokes.

use super::color::Color;
use super::point::Point;
use super::renderable::Renderable;
use super::surface::Surface;

/// Polyline traced by the pointer while the marker tool is held down.
///
/// Every pointer-move sample is kept as-is: there is no deduplication and no
/// simplification, so long strokes grow without bound.
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandStroke {
    points: Vec<Point>,
    thickness: f64,
    color: Color,
}

impl FreehandStroke {
    /// Starts a single-point stroke at (x, y).
    pub fn begin(x: f64, y: f64, thickness: f64, color: Color) -> Self {
        Self {
            points: vec![Point::new(x, y)],
            thickness,
            color,
        }
    }

    /// Appends a sample to the end of the stroke.
    pub fn extend(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Renderable for FreehandStroke {
    /// Traces straight segments through the points in insertion order.
    ///
    /// A one-point stroke produces a path with no segments, which strokes to
    /// nothing.
    fn paint(&self, surface: &mut dyn Surface) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        surface.set_line_width(self.thickness);
        surface.set_color(self.color);
        surface.begin_path();
        surface.move_to(first.x, first.y);
        for point in rest {
            surface.line_to(point.x, point.y);
        }
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use crate::draw::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn extend_keeps_every_sample() {
        let mut stroke = FreehandStroke::begin(1.0, 1.0, 2.0, BLACK);
        stroke.extend(1.0, 1.0);
        stroke.extend(2.0, 3.0);
        assert_eq!(
            stroke.points(),
            &[
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 3.0)
            ]
        );
    }

    #[test]
    fn paint_traces_points_in_order() {
        let mut stroke = FreehandStroke::begin(0.0, 0.0, 4.0, RED);
        stroke.extend(10.0, 0.0);
        stroke.extend(10.0, 10.0);

        let mut surface = RecordingSurface::new();
        stroke.paint(&mut surface);

        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::LineWidth(4.0),
                SurfaceOp::Color(RED),
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo(0.0, 0.0),
                SurfaceOp::LineTo(10.0, 0.0),
                SurfaceOp::LineTo(10.0, 10.0),
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn single_point_stroke_has_no_segments() {
        let stroke = FreehandStroke::begin(5.0, 5.0, 3.0, BLACK);
        let mut surface = RecordingSurface::new();
        stroke.paint(&mut surface);

        assert!(
            !surface
                .ops
                .iter()
                .any(|op| matches!(op, SurfaceOp::LineTo(..)))
        );
        assert_eq!(
            surface
                .ops
                .iter()
                .filter(|op| matches!(op, SurfaceOp::MoveTo(..)))
                .count(),
            1
        );
    }
}
