//! Event scripts: recorded pointer, keyboard and command input.
//!
//! A script is a TOML document with one `[[event]]` table per input event,
//! tagged by `type`:
//!
//! ```toml
//! [[event]]
//! type = "select-sticker"
//! symbol = "🐱"
//!
//! [[event]]
//! type = "pointer-down"
//! x = 40.0
//! y = 40.0
//!
//! [[event]]
//! type = "key"
//! key = "E"
//! ```

use crate::input::Key;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown key name '{key}' in event {index}")]
    UnknownKey { key: String, index: usize },
}

/// Marker widths selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Thin,
    Thick,
}

/// A single scripted input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    PointerLeave,
    Key {
        key: String,
    },
    KeyRelease {
        key: String,
    },
    /// Either a named `size` or an explicit `thickness`
    SelectMarker {
        #[serde(default)]
        size: Option<MarkerSize>,
        #[serde(default)]
        thickness: Option<f64>,
    },
    SelectSticker {
        symbol: String,
    },
    CustomSticker {
        text: String,
    },
    Undo,
    Redo,
    Clear,
    Export,
}

/// A parsed event script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::info!("Loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }

    /// Parses a script and checks every key name.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(source)?;
        for (index, event) in script.events.iter().enumerate() {
            if let ScriptEvent::Key { key } | ScriptEvent::KeyRelease { key } = event {
                parse_key(key).ok_or_else(|| ScriptError::UnknownKey {
                    key: key.clone(),
                    index,
                })?;
            }
        }
        Ok(script)
    }
}

/// Maps a script key name to a [`Key`].
pub fn parse_key(name: &str) -> Option<Key> {
    Key::from_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_every_event_type() {
        let script = Script::parse(
            r#"
            [[event]]
            type = "pointer-down"
            x = 1.0
            y = 2.0

            [[event]]
            type = "pointer-move"
            x = 3.0
            y = 4.0

            [[event]]
            type = "pointer-up"

            [[event]]
            type = "pointer-leave"

            [[event]]
            type = "key"
            key = "Ctrl"

            [[event]]
            type = "key-release"
            key = "Ctrl"

            [[event]]
            type = "select-marker"
            size = "thick"

            [[event]]
            type = "select-marker"
            thickness = 4.5

            [[event]]
            type = "select-sticker"
            symbol = "🐱"

            [[event]]
            type = "custom-sticker"
            text = "🦀"

            [[event]]
            type = "undo"

            [[event]]
            type = "redo"

            [[event]]
            type = "clear"

            [[event]]
            type = "export"
            "#,
        )
        .unwrap();

        assert_eq!(script.events.len(), 14);
        assert_eq!(script.events[0], ScriptEvent::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(
            script.events[6],
            ScriptEvent::SelectMarker {
                size: Some(MarkerSize::Thick),
                thickness: None,
            }
        );
        assert_eq!(script.events[13], ScriptEvent::Export);
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(Script::parse("").unwrap().events.is_empty());
    }

    #[test]
    fn unknown_key_is_rejected_with_position() {
        let err = Script::parse(
            r#"
            [[event]]
            type = "undo"

            [[event]]
            type = "key"
            key = "Hyper"
            "#,
        )
        .unwrap_err();
        match err {
            ScriptError::UnknownKey { key, index } => {
                assert_eq!(key, "Hyper");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_event_type_is_a_parse_error() {
        let err = Script::parse("[[event]]\ntype = \"teleport\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[event]]\ntype = \"clear\"").unwrap();
        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.events, vec![ScriptEvent::Clear]);

        let missing = Script::load(Path::new("/nonexistent/script.toml")).unwrap_err();
        assert!(matches!(missing, ScriptError::Read { .. }));
    }
}
