use crate::config::Action;
use crate::draw::Mark;
use crate::input::events::Key;

use super::{DrawingState, InputController};

impl InputController {
    /// Processes a key press event.
    ///
    /// Modifier keys only update modifier state; every other key is looked up
    /// in the keybinding map and dispatched to [`InputController::handle_action`].
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.apply(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.apply(key, false);
    }

    /// Runs a keybinding action.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("Action {action:?}");
        match action {
            Action::Exit => {
                // Escape abandons a mark in progress before it quits
                if self.is_drawing() {
                    self.state = DrawingState::Idle;
                    self.mark_scene();
                } else {
                    self.should_exit = true;
                }
            }
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::ClearCanvas => self.clear(),
            Action::SelectThinMarker => self.select_marker(self.thin_thickness()),
            Action::SelectThickMarker => self.select_marker(self.thick_thickness()),
            Action::NextSticker => self.next_sticker(),
            Action::PreviousSticker => self.previous_sticker(),
            Action::RotateClockwise => self.rotate_sticker(self.rotation_step()),
            Action::RotateCounterclockwise => self.rotate_sticker(-self.rotation_step()),
            Action::Export => self.request_export(),
        }
    }

    /// Reverts the most recent committed mark.
    ///
    /// Returns whether anything changed; a no-op does not repaint.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            log::debug!("Nothing to undo");
            return false;
        }
        self.history.undo();
        self.mark_scene();
        true
    }

    /// Re-applies the most recently undone mark.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            log::debug!("Nothing to redo");
            return false;
        }
        self.history.redo();
        self.mark_scene();
        true
    }

    /// Wipes history, the redo buffer and any mark in progress.
    pub fn clear(&mut self) {
        self.history.clear();
        self.state = DrawingState::Idle;
        self.mark_scene();
        log::info!("Canvas cleared");
    }

    /// Selects a marker of `thickness`.
    pub fn select_marker(&mut self, thickness: f64) {
        self.tool.select_marker(thickness);
        self.set_palette_index(None);
        self.mark_tool();
    }

    /// Selects a sticker. Symbols not in the palette are still usable but do
    /// not take part in next/previous cycling.
    pub fn select_sticker(&mut self, symbol: &str) {
        let index = self.palette().iter().position(|s| s == symbol);
        self.tool.select_sticker(symbol);
        self.set_palette_index(index);
        self.mark_tool();
    }

    /// Selects the palette sticker after the current one, wrapping around.
    /// From the marker this selects the first sticker.
    pub fn next_sticker(&mut self) {
        let len = self.palette().len();
        if len == 0 {
            return;
        }
        let index = match self.palette_index() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select_palette_entry(index);
    }

    /// Selects the palette sticker before the current one, wrapping around.
    pub fn previous_sticker(&mut self) {
        let len = self.palette().len();
        if len == 0 {
            return;
        }
        let index = match self.palette_index() {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select_palette_entry(index);
    }

    /// Adds `text` to the palette and selects it.
    ///
    /// Empty or whitespace-only text is discarded and returns `false`.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("Ignoring empty custom sticker");
            return false;
        }

        let index = self.push_palette(text.to_string());
        self.select_palette_entry(index);
        true
    }

    /// Rotates the pending sticker, its preview, and a sticker being dragged.
    ///
    /// Does nothing while the marker is selected.
    pub fn rotate_sticker(&mut self, delta_degrees: f64) {
        if !self.tool.rotate_sticker(delta_degrees) {
            return;
        }

        if let DrawingState::Drawing(Mark::Sticker(sticker)) = &mut self.state {
            sticker.rotate(delta_degrees);
            self.mark_scene();
        } else {
            self.mark_tool();
        }
    }

    /// Flags an export for the host to pick up with
    /// [`InputController::take_pending_export`].
    pub fn request_export(&mut self) {
        self.request_export_flag();
    }

    fn select_palette_entry(&mut self, index: usize) {
        let Some(symbol) = self.palette().get(index).cloned() else {
            return;
        };
        self.tool.select_sticker(&symbol);
        self.set_palette_index(Some(index));
        self.mark_tool();
    }
}
