//! Library exports for the sketch pad.
//!
//! The core (history, marks, previews, tool state and the input controller) is
//! host-independent; [`app::SketchApp`] drives it offscreen with Cairo so
//! scripted sessions can be rendered and exported without a window.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use app::{RunSummary, SketchApp};
pub use config::Config;

/// Title shown by hosts and in the CLI about text.
pub const APP_TITLE: &str = "Draw with Me";
