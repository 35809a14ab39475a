use crate::draw::Mark;

use super::{DrawingState, InputController};

impl InputController {
    /// Processes a primary-button press over the canvas.
    ///
    /// Starts a new mark with the active tool. Anything still in the redo
    /// buffer becomes unreachable, since a new branch of history begins here.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.tool.update_cursor(x, y);
        if self.is_drawing() {
            log::warn!("Pointer down while already drawing, ignoring");
            return;
        }

        self.history.discard_redo();
        let mark = self.tool.begin_mark(x, y);
        log::trace!("Starting {} at ({x:.1}, {y:.1})", mark.kind());
        self.state = DrawingState::Drawing(mark);
        self.mark_scene();
    }

    /// Processes pointer motion over the canvas.
    ///
    /// # Behavior
    /// - While drawing a stroke: appends the point
    /// - While placing a sticker: moves the sticker
    /// - Otherwise: only the preview moves
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.tool.update_cursor(x, y);
        match &mut self.state {
            DrawingState::Drawing(Mark::Stroke(stroke)) => {
                stroke.extend(x, y);
                self.mark_scene();
            }
            DrawingState::Drawing(Mark::Sticker(sticker)) => {
                sticker.reposition(x, y);
                self.mark_scene();
            }
            DrawingState::Idle => self.mark_tool(),
        }
    }

    /// Processes a primary-button release: commits the mark being drawn.
    pub fn on_pointer_up(&mut self) {
        self.commit_in_progress();
    }

    /// Processes the pointer leaving the canvas.
    ///
    /// Commits any mark in progress exactly like a release, then hides the
    /// preview until the pointer comes back.
    pub fn on_pointer_leave(&mut self) {
        self.commit_in_progress();
        if self.tool.preview_visible() {
            self.tool.hide_preview();
            self.mark_tool();
        }
    }
}
