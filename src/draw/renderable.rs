//! The paint capability shared by everything that appears on the canvas.

use super::surface::Surface;

/// Anything that can paint itself into a [`Surface`].
///
/// Implementations set whatever style they need before drawing; callers make
/// no assumptions about the style left behind.
pub trait Renderable {
    fn paint(&self, surface: &mut dyn Surface);
}

/// Paints every item in order (first item = bottom layer).
pub fn paint_all<'a, R, I>(surface: &mut dyn Surface, items: I)
where
    R: Renderable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    for item in items {
        item.paint(surface);
    }
}
