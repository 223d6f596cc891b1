//! Console configuration.
//!
//! Loaded from an optional TOML file:
//!
//! ```toml
//! [console]
//! help_display_secs = 5.0
//! start_visible = false
//!
//! [bindings]
//! ":tab" = "auto_complete"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DevconError, Result};
use crate::input::ConsoleAction;

/// Default seconds the help output stays on screen.
pub const DEFAULT_HELP_DISPLAY_SECS: f32 = 5.0;

/// Default number of output lines retained by the console.
pub const DEFAULT_MAX_OUTPUT_LINES: usize = 100;

/// Behavior of the console core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// How long help output stays visible after `help` runs.
    pub help_display_secs: f32,
    /// Whether the overlay is shown at startup.
    pub start_visible: bool,
    /// Whether the command listing panel is shown at startup.
    pub start_with_help_panel: bool,
    /// Output log capacity; the oldest lines are dropped first.
    pub max_output_lines: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            help_display_secs: DEFAULT_HELP_DISPLAY_SECS,
            start_visible: false,
            start_with_help_panel: false,
            max_output_lines: DEFAULT_MAX_OUTPUT_LINES,
        }
    }
}

impl ConsoleConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.help_display_secs.is_finite() || self.help_display_secs <= 0.0 {
            return Err(DevconError::Config(format!(
                "help_display_secs must be positive, got {}",
                self.help_display_secs
            )));
        }
        if self.max_output_lines == 0 {
            return Err(DevconError::Config(
                "max_output_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full configuration file: console behavior plus host key bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevconConfig {
    pub console: ConsoleConfig,
    /// Host input token -> console action.
    pub bindings: BTreeMap<String, ConsoleAction>,
}

impl Default for DevconConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            bindings: default_bindings(),
        }
    }
}

impl DevconConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.console.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Look up the action bound to a host token.
    pub fn action_for(&self, token: &str) -> Option<ConsoleAction> {
        self.bindings.get(token).copied()
    }
}

fn default_bindings() -> BTreeMap<String, ConsoleAction> {
    [
        (":toggle", ConsoleAction::Toggle),
        (":tab", ConsoleAction::AutoComplete),
        (":run", ConsoleAction::Execute),
        (":panel", ConsoleAction::ToggleHelp),
    ]
    .into_iter()
    .map(|(token, action)| (token.to_string(), action))
    .collect()
}
