//! Active tool selection and its cursor preview.

use crate::draw::{
    Color, CursorPreview, FreehandStroke, Mark, Point, StickerCursorPreview, StickerMark,
    ToolCursorPreview,
};
use crate::util;

/// Drawing tools available on the sketch pad.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Freehand marker of a fixed width
    Marker { thickness: f64 },
    /// Places `symbol` as a glyph, rotated by `rotation` degrees
    Sticker { symbol: String, rotation: f64 },
}

/// Settings applied each time a tool is selected.
#[derive(Debug, Clone)]
pub struct ToolDefaults {
    /// Color restored on every selection
    pub color: Color,
    /// Pick a random color on selection instead of `color`
    pub randomize_color: bool,
    /// Glyph size for stickers and their preview
    pub sticker_font_size: f64,
}

/// Current tool, color and the preview that follows the pointer.
///
/// Exactly one preview exists at a time; it is regenerated whenever the tool
/// changes so it always reflects the active tool.
#[derive(Debug)]
pub struct ToolState {
    tool: Tool,
    color: Color,
    defaults: ToolDefaults,
    preview: CursorPreview,
    preview_visible: bool,
    rng: fastrand::Rng,
}

impl ToolState {
    /// Starts with a marker of `thickness`. The preview stays hidden until the
    /// pointer first moves over the canvas.
    pub fn new(defaults: ToolDefaults, thickness: f64) -> Self {
        Self::with_rng(defaults, thickness, fastrand::Rng::new())
    }

    /// Same as [`ToolState::new`] with a caller-provided random source.
    pub fn with_rng(defaults: ToolDefaults, thickness: f64, rng: fastrand::Rng) -> Self {
        let tool = Tool::Marker { thickness };
        let color = defaults.color;
        let preview =
            CursorPreview::Marker(ToolCursorPreview::new(Point::default(), thickness, color));
        let mut state = Self {
            tool,
            color,
            defaults,
            preview,
            preview_visible: false,
            rng,
        };
        state.reset_color();
        state.regenerate_preview();
        state
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Marker width, or `None` while a sticker is selected.
    pub fn thickness(&self) -> Option<f64> {
        match self.tool {
            Tool::Marker { thickness } => Some(thickness),
            Tool::Sticker { .. } => None,
        }
    }

    /// Symbol of the pending sticker, if a sticker is selected.
    pub fn sticker_symbol(&self) -> Option<&str> {
        match &self.tool {
            Tool::Sticker { symbol, .. } => Some(symbol),
            Tool::Marker { .. } => None,
        }
    }

    /// Rotation of the pending sticker, if a sticker is selected.
    pub fn sticker_rotation(&self) -> Option<f64> {
        match self.tool {
            Tool::Sticker { rotation, .. } => Some(rotation),
            Tool::Marker { .. } => None,
        }
    }

    /// Switches to a marker of `thickness`.
    pub fn select_marker(&mut self, thickness: f64) {
        self.tool = Tool::Marker { thickness };
        self.reset_color();
        self.regenerate_preview();
        log::debug!(
            "Selected marker ({thickness:.1}px, {})",
            util::color_to_name(&self.color)
        );
    }

    /// Switches to a sticker of `symbol`, unrotated.
    pub fn select_sticker(&mut self, symbol: &str) {
        self.tool = Tool::Sticker {
            symbol: symbol.to_string(),
            rotation: 0.0,
        };
        self.reset_color();
        self.regenerate_preview();
        log::debug!("Selected sticker {symbol} ({})", util::color_to_name(&self.color));
    }

    /// Rotates the pending sticker and its preview.
    ///
    /// Returns `false` when the marker is selected.
    pub fn rotate_sticker(&mut self, delta_degrees: f64) -> bool {
        let Tool::Sticker { rotation, .. } = &mut self.tool else {
            return false;
        };
        *rotation = util::normalize_degrees(*rotation + delta_degrees);
        if let CursorPreview::Sticker(preview) = &mut self.preview {
            preview.rotate(delta_degrees);
        }
        true
    }

    /// Moves the preview to the pointer and makes it visible.
    pub fn update_cursor(&mut self, x: f64, y: f64) {
        self.preview.update(x, y);
        self.preview_visible = true;
    }

    pub fn hide_preview(&mut self) {
        self.preview_visible = false;
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// The preview, or `None` while hidden.
    pub fn preview(&self) -> Option<&CursorPreview> {
        self.preview_visible.then_some(&self.preview)
    }

    /// Builds the mark the active tool starts at (x, y).
    pub fn begin_mark(&self, x: f64, y: f64) -> Mark {
        match &self.tool {
            Tool::Marker { thickness } => FreehandStroke::begin(x, y, *thickness, self.color).into(),
            Tool::Sticker { symbol, rotation } => StickerMark::place(
                symbol.as_str(),
                x,
                y,
                *rotation,
                self.defaults.sticker_font_size,
            )
            .into(),
        }
    }

    fn reset_color(&mut self) {
        self.color = if self.defaults.randomize_color {
            Color::random(&mut self.rng)
        } else {
            self.defaults.color
        };
    }

    fn regenerate_preview(&mut self) {
        let position = self.preview.position();
        self.preview = match &self.tool {
            Tool::Marker { thickness } => {
                CursorPreview::Marker(ToolCursorPreview::new(position, *thickness, self.color))
            }
            Tool::Sticker { symbol, rotation } => CursorPreview::Sticker(StickerCursorPreview::new(
                symbol,
                position,
                *rotation,
                self.defaults.sticker_font_size,
            )),
        };
    }
}
