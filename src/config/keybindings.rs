//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps key
//! combinations to sketch pad commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // History
    Undo,
    Redo,
    ClearCanvas,

    // Tool palette
    SelectThinMarker,
    SelectThickMarker,
    NextSticker,
    PreviousSticker,

    // Sticker rotation
    RotateClockwise,
    RotateCounterclockwise,

    // Output
    Export,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Delete".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in s_normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key: normalize_key(&key),
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Canonical spelling of a key name, so "z" and "Z" (or "delete" and
/// "Delete") compare equal as map keys, the same way `matches` compares them.
fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// clear_canvas = ["Delete"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_select_thin_marker")]
    pub select_thin_marker: Vec<String>,

    #[serde(default = "default_select_thick_marker")]
    pub select_thick_marker: Vec<String>,

    #[serde(default = "default_next_sticker")]
    pub next_sticker: Vec<String>,

    #[serde(default = "default_previous_sticker")]
    pub previous_sticker: Vec<String>,

    #[serde(default = "default_rotate_clockwise")]
    pub rotate_clockwise: Vec<String>,

    #[serde(default = "default_rotate_counterclockwise")]
    pub rotate_counterclockwise: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            select_thin_marker: default_select_thin_marker(),
            select_thick_marker: default_select_thick_marker(),
            next_sticker: default_next_sticker(),
            previous_sticker: default_previous_sticker(),
            rotate_clockwise: default_rotate_clockwise(),
            rotate_counterclockwise: default_rotate_counterclockwise(),
            export: default_export(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 11] = [
            (&self.exit, Action::Exit),
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.select_thin_marker, Action::SelectThinMarker),
            (&self.select_thick_marker, Action::SelectThickMarker),
            (&self.next_sticker, Action::NextSticker),
            (&self.previous_sticker, Action::PreviousSticker),
            (&self.rotate_clockwise, Action::RotateClockwise),
            (&self.rotate_counterclockwise, Action::RotateCounterclockwise),
            (&self.export, Action::Export),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Delete".to_string()]
}

fn default_select_thin_marker() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_thick_marker() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_next_sticker() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_previous_sticker() -> Vec<String> {
    vec!["Shift+S".to_string()]
}

fn default_rotate_clockwise() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_rotate_counterclockwise() -> Vec<String> {
    vec!["Q".to_string()]
}

fn default_export() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}
