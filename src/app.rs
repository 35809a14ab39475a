//! Offscreen host for the sketch pad.
//!
//! [`SketchApp`] plays the part a windowing host would: it feeds input to the
//! [`InputController`], repaints an offscreen canvas whenever a repaint signal
//! is raised, and writes exports when the export action fires.

use crate::config::Config;
use crate::draw::{CairoSurface, Repaint, SceneRenderer};
use crate::export::{self, ExportOptions, FileSaveConfig};
use crate::input::InputController;
use crate::script::{self, MarkerSize, Script, ScriptEvent};
use anyhow::{Context, Result, anyhow};
use std::fmt;
use std::path::{Path, PathBuf};

/// What a script run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Events dispatched (fewer than the script holds if it exited early)
    pub events: usize,
    /// Marks in history at the end of the run
    pub committed: usize,
    /// Marks waiting in the redo buffer
    pub redo_depth: usize,
    /// Images written by the export action
    pub exports: Vec<PathBuf>,
    pub scene_repaints: u64,
    pub tool_repaints: u64,
    /// Whether the exit action stopped the run
    pub exited: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events, {} marks committed, {} in redo buffer, {} exports, {} repaints ({} scene, {} tool)",
            self.events,
            self.committed,
            self.redo_depth,
            self.exports.len(),
            self.scene_repaints + self.tool_repaints,
            self.scene_repaints,
            self.tool_repaints
        )?;
        if self.exited {
            write!(f, ", exited early")?;
        }
        Ok(())
    }
}

/// Controller, renderer and export settings for one sketch pad session.
pub struct SketchApp {
    controller: InputController,
    renderer: SceneRenderer<CairoSurface>,
    export_options: ExportOptions,
    save_config: FileSaveConfig,
    exports: Vec<PathBuf>,
}

impl SketchApp {
    /// Builds a session from validated configuration and paints the empty canvas.
    pub fn new(config: &Config) -> Result<Self> {
        let controller = InputController::from_config(config)
            .map_err(|e| anyhow!("Invalid keybindings: {e}"))?;
        Self::with_controller(config, controller)
    }

    /// Builds a session around an existing controller.
    pub fn with_controller(config: &Config, controller: InputController) -> Result<Self> {
        let export_options = ExportOptions::from_config(config);
        let canvas = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            config.canvas.width as i32,
            config.canvas.height as i32,
        )
        .context("Failed to create canvas surface")?;
        let ctx = cairo::Context::new(&canvas).context("Failed to create canvas context")?;
        let surface = CairoSurface::new(
            ctx,
            export_options.background,
            export_options.font.clone(),
        );

        let mut renderer = SceneRenderer::new(surface);
        renderer.repaint(Repaint::SceneChanged, controller.scene());

        Ok(Self {
            controller,
            renderer,
            export_options,
            save_config: FileSaveConfig::from(&config.export),
            exports: Vec::new(),
        })
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn renderer(&self) -> &SceneRenderer<CairoSurface> {
        &self.renderer
    }

    /// Overrides the configured export scale.
    pub fn set_export_scale(&mut self, scale: f64) {
        self.export_options = self.export_options.clone().with_scale(scale);
    }

    /// Overrides the directory the export action writes into.
    pub fn set_export_directory(&mut self, directory: PathBuf) {
        self.save_config.save_directory = directory;
    }

    /// Feeds one event to the controller, then services the signals it raised.
    pub fn dispatch(&mut self, event: &ScriptEvent) -> Result<()> {
        let controller = &mut self.controller;
        match event {
            ScriptEvent::PointerDown { x, y } => controller.on_pointer_down(*x, *y),
            ScriptEvent::PointerMove { x, y } => controller.on_pointer_move(*x, *y),
            ScriptEvent::PointerUp => controller.on_pointer_up(),
            ScriptEvent::PointerLeave => controller.on_pointer_leave(),
            ScriptEvent::Key { key } => match script::parse_key(key) {
                Some(key) => controller.on_key_press(key),
                None => log::warn!("Ignoring unknown key '{key}'"),
            },
            ScriptEvent::KeyRelease { key } => match script::parse_key(key) {
                Some(key) => controller.on_key_release(key),
                None => log::warn!("Ignoring unknown key '{key}'"),
            },
            // An explicit thickness wins over a named size
            ScriptEvent::SelectMarker { size, thickness } => match (thickness, size) {
                (Some(t), _) if t.is_finite() && *t > 0.0 => controller.select_marker(*t),
                (Some(t), _) => log::warn!("Ignoring invalid marker thickness {t}"),
                (None, Some(MarkerSize::Thick)) => {
                    controller.select_marker(controller.thick_thickness())
                }
                (None, Some(MarkerSize::Thin) | None) => {
                    controller.select_marker(controller.thin_thickness())
                }
            },
            ScriptEvent::SelectSticker { symbol } => controller.select_sticker(symbol),
            ScriptEvent::CustomSticker { text } => {
                controller.add_custom_sticker(text);
            }
            ScriptEvent::Undo => {
                controller.undo();
            }
            ScriptEvent::Redo => {
                controller.redo();
            }
            ScriptEvent::Clear => controller.clear(),
            ScriptEvent::Export => controller.request_export(),
        }

        self.service()
    }

    /// Dispatches every event in order, stopping early on the exit action.
    pub fn run(&mut self, script: &Script) -> Result<RunSummary> {
        let mut dispatched = 0;
        for event in &script.events {
            self.dispatch(event)?;
            dispatched += 1;
            if self.controller.should_exit {
                log::info!("Exit requested after {dispatched} events");
                break;
            }
        }

        let summary = self.summary(dispatched);
        log::info!("Run finished: {summary}");
        Ok(summary)
    }

    /// Renders the current history and writes it as PNG to `path`.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let image = export::render_export(self.controller.scene(), &self.export_options)?;
        let bytes = export::encode_png(&image)?;
        export::save_png_to(&bytes, path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        log::info!("Exported canvas to {}", path.display());
        Ok(())
    }

    fn summary(&self, events: usize) -> RunSummary {
        let (scene_repaints, tool_repaints) = self.renderer.repaint_counts();
        RunSummary {
            events,
            committed: self.controller.history.len(),
            redo_depth: self.controller.history.redo_items().len(),
            exports: self.exports.clone(),
            scene_repaints,
            tool_repaints,
            exited: self.controller.should_exit,
        }
    }

    fn service(&mut self) -> Result<()> {
        if let Some(trigger) = self.controller.take_repaint() {
            self.renderer.repaint(trigger, self.controller.scene());
        }

        if self.controller.take_pending_export() {
            let image = export::render_export(self.controller.scene(), &self.export_options)?;
            let bytes = export::encode_png(&image)?;
            let path = export::save_png(&bytes, &self.save_config)?;
            log::info!("Exported canvas to {}", path.display());
            self.exports.push(path);
        }

        Ok(())
    }
}
