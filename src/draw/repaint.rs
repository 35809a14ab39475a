//! Repaint signals raised by input handling.
//!
//! Handlers mark what kind of change happened; the host drains the signal
//! once per event and hands it to the scene renderer.

/// Why the canvas needs repainting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Repaint {
    /// Only the cursor preview moved or changed.
    ToolMoved,
    /// Committed or in-progress content changed.
    SceneChanged,
}

/// Single-consumer repaint signal.
///
/// Signals coalesce: a pending [`Repaint::SceneChanged`] absorbs any
/// [`Repaint::ToolMoved`] raised after it, and vice versa.
#[derive(Debug, Default)]
pub struct RepaintQueue {
    pending: Option<Repaint>,
}

impl RepaintQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a content change.
    pub fn mark_scene(&mut self) {
        self.pending = Some(Repaint::SceneChanged);
    }

    /// Records a cosmetic cursor change unless a content change is pending.
    pub fn mark_tool(&mut self) {
        self.pending = self.pending.max(Some(Repaint::ToolMoved));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drains the pending signal.
    pub fn take(&mut self) -> Option<Repaint> {
        self.pending.take()
    }
}
