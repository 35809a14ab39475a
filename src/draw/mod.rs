//! Canvas content model and rendering (Cairo-based).
//!
//! This module defines the core drawing types of the sketch pad:
//! - [`Renderable`]: the paint capability shared by all canvas content
//! - [`FreehandStroke`] and [`StickerMark`]: committable marks, unified as [`Mark`]
//! - [`ToolCursorPreview`] and [`StickerCursorPreview`]: pointer-following previews
//! - [`HistoryStack`]: linear undo/redo of committed marks
//! - [`SceneRenderer`]: full repaint of the canvas on every [`Repaint`] signal
//! - [`Surface`]: the primitive drawing calls, implemented by [`CairoSurface`]

pub mod color;
pub mod font;
pub mod history;
pub mod mark;
pub mod point;
pub mod preview;
pub mod render;
pub mod renderable;
pub mod repaint;
pub mod sticker;
pub mod stroke;
pub mod surface;

pub use color::Color;
pub use font::FontDescriptor;
pub use history::HistoryStack;
pub use mark::Mark;
pub use point::Point;
pub use preview::{CursorPreview, StickerCursorPreview, ToolCursorPreview};
pub use render::{SceneRenderer, SceneView, replay};
pub use renderable::Renderable;
pub use repaint::{Repaint, RepaintQueue};
pub use sticker::StickerMark;
pub use stroke::FreehandStroke;
pub use surface::{CairoSurface, Surface};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
