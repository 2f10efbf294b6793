//! Configuration system for vimirror.
//!
//! This module provides the configuration structure for vimirror with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use vimirror::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.cursor_class, "vim-cursor");
//! assert!(config.keymap.is_empty());
//!
//! // Extra bindings are compiled after the defaults
//! let keymap = config.compile_keymap();
//! assert!(keymap.get("w").is_some());
//! ```

use crate::editor::dispatcher::DEFAULT_CURSOR_CLASS;
use crate::keymap::{default_keymap, KeyBinding, Keymap};
use serde::{Deserialize, Serialize};

/// Configuration for the vimirror application.
///
/// # Fields
///
/// * `cursor_class` - Class name attached to the cursor decoration (default: "vim-cursor")
/// * `show_line_numbers` - Display block numbers in the document view (default: true)
/// * `keymap` - Extra bindings appended after the built-in table (default: none)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Class name attached to the cursor decoration
    #[serde(default = "default_cursor_class")]
    pub cursor_class: String,

    /// Display block numbers in the document view
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Extra bindings; later entries override earlier ones for the same chord
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keymap: Vec<KeyBinding>,
}

/// Returns the default cursor class.
fn default_cursor_class() -> String {
    DEFAULT_CURSOR_CLASS.to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cursor_class: default_cursor_class(),
            show_line_numbers: default_show_line_numbers(),
            keymap: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vimirror/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vimirror");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("cannot read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Compiles the built-in table followed by the configured bindings.
    pub fn compile_keymap(&self) -> Keymap {
        Keymap::compile(default_keymap().into_iter().chain(self.keymap.iter().cloned()))
    }
}
