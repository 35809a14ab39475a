//! Committable canvas content.

use super::renderable::Renderable;
use super::sticker::StickerMark;
use super::stroke::FreehandStroke;
use super::surface::Surface;

/// Anything that can be committed to the history: a stroke or a sticker.
///
/// A mark is built on pointer-down, mutated while the pointer moves, and frozen
/// once it is handed to the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Stroke(FreehandStroke),
    Sticker(StickerMark),
}

impl Mark {
    /// Short label used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Mark::Stroke(_) => "stroke",
            Mark::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&FreehandStroke> {
        match self {
            Mark::Stroke(stroke) => Some(stroke),
            Mark::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            Mark::Sticker(sticker) => Some(sticker),
            Mark::Stroke(_) => None,
        }
    }
}

impl From<FreehandStroke> for Mark {
    fn from(stroke: FreehandStroke) -> Self {
        Mark::Stroke(stroke)
    }
}

impl From<StickerMark> for Mark {
    fn from(sticker: StickerMark) -> Self {
        Mark::Sticker(sticker)
    }
}

impl Renderable for Mark {
    fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Mark::Stroke(stroke) => stroke.paint(surface),
            Mark::Sticker(sticker) => sticker.paint(surface),
        }
    }
}
