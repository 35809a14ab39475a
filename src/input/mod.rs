//! Input handling and tool state machine.
//!
//! This module translates pointer, keyboard and command input into sketch pad
//! changes. It keeps the active tool (marker or sticker) with its cursor
//! preview, the mark being drawn, and the undo/redo history, and reports which
//! kind of repaint each change needs.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::Key;
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputController};
pub use tool::{Tool, ToolDefaults, ToolState};
