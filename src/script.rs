//! Scripted input sessions.
//!
//! A script is a TOML file listing pointer events and toolbar actions in the
//! order a user would produce them. Playing it through an [`InputState`] is how
//! the command-line host drives the canvas.
//!
//! ```toml
//! [[events]]
//! type = "press"
//! x = 10
//! y = 10
//!
//! [[events]]
//! type = "action"
//! action = "toggle-rectangle"
//!
//! [[events]]
//! type = "color"
//! color = "#ff0000"
//! ```

use crate::draw::Surface;
use crate::export::ExportError;
use crate::input::{Action, InputState};
use crate::util;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or playing a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color '{color}' in event {index}")]
    InvalidColor { index: usize, color: String },

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// One recorded user interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Primary button pressed at (x, y)
    Press { x: i32, y: i32 },
    /// Pointer moved to (x, y)
    Move { x: i32, y: i32 },
    /// Primary button released at (x, y)
    Release { x: i32, y: i32 },
    /// Toolbar button pressed
    Action { action: Action },
    /// Color picker changed (name or `#rrggbb`)
    Color { color: String },
}

/// An ordered list of interactions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path)?;
        let script = Self::from_toml(&source)?;
        log::info!(
            "Loaded script {} ({} events)",
            path.display(),
            script.events.len()
        );
        Ok(script)
    }

    /// Feeds every event into `state`, drawing on `surface`.
    ///
    /// Whenever a `save` action leaves an export pending, `on_export` is called
    /// with the surface as it looks at that point in the script.
    ///
    /// # Returns
    /// Number of exports performed
    pub fn play<S, F>(
        &self,
        state: &mut InputState,
        surface: &mut S,
        mut on_export: F,
    ) -> Result<usize, ScriptError>
    where
        S: Surface + ?Sized,
        F: FnMut(&mut S) -> Result<(), ScriptError>,
    {
        let mut exports = 0;

        for (index, event) in self.events.iter().enumerate() {
            log::trace!("Event {index}: {event:?}");
            match event {
                ScriptEvent::Press { x, y } => state.on_pointer_press(surface, *x, *y),
                ScriptEvent::Move { x, y } => state.on_pointer_motion(surface, *x, *y),
                ScriptEvent::Release { x, y } => state.on_pointer_release(surface, *x, *y),
                ScriptEvent::Action { action } => state.handle_action(*action, surface),
                ScriptEvent::Color { color } => {
                    let parsed =
                        util::parse_color(color).ok_or_else(|| ScriptError::InvalidColor {
                            index,
                            color: color.clone(),
                        })?;
                    state.set_color(parsed);
                }
            }

            if state.take_pending_export() {
                on_export(surface)?;
                exports += 1;
            }
        }

        Ok(exports)
    }
}
