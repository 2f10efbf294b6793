//! Editor mode management for modal editing.
//!
//! This module provides the `Mode` enum that represents the current editing
//! mode of one editor instance. Only Normal and Insert have transitions; the
//! remaining modes are reserved names that a host may still report or
//! receive through transaction metadata.
//!
//! # Example
//!
//! ```
//! use vimirror::editor::mode::Mode;
//!
//! // Editor starts in Normal mode by default
//! let mode = Mode::default();
//! assert_eq!(mode, Mode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! assert_eq!(mode.name(), "normal");
//!
//! // External names parse back
//! assert_eq!("insert".parse::<Mode>(), Ok(Mode::Insert));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the current editing mode of the editor.
///
/// Exactly one mode is active per editor instance. The mode is shown in the
/// status bar through the `Display` implementation, and handed to hosts by
/// its lowercase external name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Navigation and commands.
    #[default]
    Normal,
    /// Free text entry.
    Insert,
    /// Reserved.
    Visual,
    /// Reserved.
    Command,
    /// Reserved.
    Replace,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 5] = [
        Mode::Normal,
        Mode::Insert,
        Mode::Visual,
        Mode::Command,
        Mode::Replace,
    ];

    /// Returns the external name reported to hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Insert => "insert",
            Mode::Visual => "visual",
            Mode::Command => "command",
            Mode::Replace => "replace",
        }
    }
}

impl fmt::Display for Mode {
    /// Formats the mode as an uppercase string suitable for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Insert => write!(f, "INSERT"),
            Mode::Visual => write!(f, "VISUAL"),
            Mode::Command => write!(f, "COMMAND"),
            Mode::Replace => write!(f, "REPLACE"),
        }
    }
}

/// Returned when a string is not one of the external mode names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
