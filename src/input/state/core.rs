//! Drawing state machine and controller state.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{HistoryStack, Mark, Repaint, RepaintQueue, SceneView};
use crate::input::{
    modifiers::Modifiers,
    tool::{ToolDefaults, ToolState},
};
use std::collections::HashMap;

/// Current drawing mode state machine.
///
/// A mark is in progress only between a pointer press and the matching
/// release (or the pointer leaving the canvas).
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Pointer held down; the mark grows or moves with the pointer
    Drawing(Mark),
}

/// Main controller state for a sketch pad session.
///
/// Owns the committed history, the active tool and the mark being drawn, and
/// translates pointer, keyboard and command input into changes to them. Every
/// change queues a [`Repaint`] signal that the host drains with
/// [`InputController::take_repaint`].
pub struct InputController {
    /// Committed marks with undo/redo
    pub history: HistoryStack,
    /// Active tool, color and cursor preview
    pub tool: ToolState,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the user asked to quit
    pub should_exit: bool,
    palette: Vec<String>,
    palette_index: Option<usize>,
    thin_thickness: f64,
    thick_thickness: f64,
    rotation_step: f64,
    repaint: RepaintQueue,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    pending_export: bool,
}

impl InputController {
    /// Creates a controller starting with the thin marker selected.
    ///
    /// # Arguments
    /// * `tool` - Tool state, normally built with the thin marker width
    /// * `thin_thickness` / `thick_thickness` - Marker widths offered by the palette
    /// * `palette` - Sticker symbols, cycled by next/previous sticker
    /// * `rotation_step` - Degrees per rotate action
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        tool: ToolState,
        thin_thickness: f64,
        thick_thickness: f64,
        palette: Vec<String>,
        rotation_step: f64,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            history: HistoryStack::new(),
            tool,
            state: DrawingState::Idle,
            modifiers: Modifiers::new(),
            should_exit: false,
            palette,
            palette_index: None,
            thin_thickness,
            thick_thickness,
            rotation_step,
            repaint: RepaintQueue::new(),
            action_map,
            pending_export: false,
        }
    }

    /// Builds a controller from validated configuration.
    ///
    /// # Errors
    /// Returns an error if a keybinding is invalid or bound twice.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        Self::from_config_with_rng(config, fastrand::Rng::new())
    }

    /// Same as [`InputController::from_config`] with a caller-provided random
    /// source for color randomization.
    pub fn from_config_with_rng(config: &Config, rng: fastrand::Rng) -> Result<Self, String> {
        let action_map = config.keybindings.build_action_map()?;
        let defaults = ToolDefaults {
            color: config.marker.default_color.to_color(),
            randomize_color: config.marker.randomize_color,
            sticker_font_size: config.sticker.font_size,
        };
        let tool = ToolState::with_rng(defaults, config.marker.thin_thickness, rng);

        Ok(Self::with_defaults(
            tool,
            config.marker.thin_thickness,
            config.marker.thick_thickness,
            config.sticker.palette.clone(),
            config.sticker.rotation_step,
            action_map,
        ))
    }

    /// Everything the renderer needs for the next repaint.
    ///
    /// The preview is left out while a mark is in progress.
    pub fn scene(&self) -> SceneView<'_> {
        let in_progress = self.in_progress();
        SceneView {
            history: &self.history,
            in_progress,
            preview: if in_progress.is_some() {
                None
            } else {
                self.tool.preview()
            },
        }
    }

    /// The mark being drawn, if any.
    pub fn in_progress(&self) -> Option<&Mark> {
        match &self.state {
            DrawingState::Drawing(mark) => Some(mark),
            DrawingState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing(_))
    }

    /// Takes the pending repaint signal, if any.
    ///
    /// Signals raised since the last call are coalesced; a scene change wins
    /// over a pointer-only move.
    pub fn take_repaint(&mut self) -> Option<Repaint> {
        self.repaint.take()
    }

    /// Sticker symbols currently offered, including custom ones.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    pub fn thin_thickness(&self) -> f64 {
        self.thin_thickness
    }

    pub fn thick_thickness(&self) -> f64 {
        self.thick_thickness
    }

    /// Takes and clears the export request raised by the export action.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub(super) fn request_export_flag(&mut self) {
        self.pending_export = true;
    }

    pub(super) fn palette_index(&self) -> Option<usize> {
        self.palette_index
    }

    pub(super) fn set_palette_index(&mut self, index: Option<usize>) {
        self.palette_index = index;
    }

    pub(super) fn push_palette(&mut self, symbol: String) -> usize {
        if let Some(index) = self.palette.iter().position(|s| *s == symbol) {
            return index;
        }
        self.palette.push(symbol);
        self.palette.len() - 1
    }

    pub(super) fn mark_scene(&mut self) {
        self.repaint.mark_scene();
    }

    pub(super) fn mark_tool(&mut self) {
        self.repaint.mark_tool();
    }

    /// Moves the in-progress mark into history. Returns `false` if nothing
    /// was being drawn.
    pub(super) fn commit_in_progress(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing(mark) => {
                log::debug!("Committing {} ({} in history)", mark.kind(), self.history.len() + 1);
                self.history.commit(mark);
                self.mark_scene();
                true
            }
            DrawingState::Idle => false,
        }
    }

    /// Looks up the action bound to `key_str` under the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }
}
