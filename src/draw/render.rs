//! Scene repaint loop.

use super::history::HistoryStack;
use super::mark::Mark;
use super::preview::CursorPreview;
use super::renderable::{Renderable, paint_all};
use super::repaint::Repaint;
use super::surface::Surface;

/// Borrowed view of everything the renderer paints.
///
/// `preview` is `None` whenever the preview must not be shown (pointer
/// outside the canvas, or a mark is being drawn).
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub history: &'a HistoryStack,
    pub in_progress: Option<&'a Mark>,
    pub preview: Option<&'a CursorPreview>,
}

impl<'a> SceneView<'a> {
    /// View of committed history only.
    pub fn history_only(history: &'a HistoryStack) -> Self {
        Self {
            history,
            in_progress: None,
            preview: None,
        }
    }
}

/// Paints committed history in order, then the in-progress mark.
///
/// Previews are never replayed; this is the path export uses.
pub fn replay(surface: &mut dyn Surface, history: &HistoryStack, in_progress: Option<&Mark>) {
    paint_all(surface, history.items());
    if let Some(mark) = in_progress {
        mark.paint(surface);
    }
}

/// Owns the on-screen surface and redraws it from scratch on every signal.
pub struct SceneRenderer<S: Surface> {
    surface: S,
    scene_repaints: u64,
    tool_repaints: u64,
}

impl<S: Surface> SceneRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            scene_repaints: 0,
            tool_repaints: 0,
        }
    }

    /// Clears the surface and paints history, in-progress mark and preview.
    ///
    /// Both triggers run the same procedure; they are counted separately so
    /// cursor-only traffic is visible in logs.
    pub fn repaint(&mut self, trigger: Repaint, scene: SceneView<'_>) {
        match trigger {
            Repaint::SceneChanged => self.scene_repaints += 1,
            Repaint::ToolMoved => self.tool_repaints += 1,
        }
        log::trace!(
            "Repaint ({:?}): {} committed, in-progress: {}, preview: {}",
            trigger,
            scene.history.len(),
            scene.in_progress.map_or("none", Mark::kind),
            scene.preview.is_some()
        );

        self.surface.clear();
        replay(&mut self.surface, scene.history, scene.in_progress);
        if let Some(preview) = scene.preview {
            preview.paint(&mut self.surface);
        }
    }

    /// Releases the surface (e.g. to read back pixels).
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of repaints performed for (scene changes, tool moves).
    pub fn repaint_counts(&self) -> (u64, u64) {
        (self.scene_repaints, self.tool_repaints)
    }
}
