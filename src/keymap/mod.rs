//! Key bindings and the compiled keymap.
//!
//! A keymap is built from an ordered list of [`KeyBinding`]s. Compilation
//! walks the list in declaration order and later entries replace earlier ones
//! bound to the same chord, so a table can declare generic bindings first and
//! overrides after them.
//!
//! # Example
//!
//! ```
//! use vimirror::editor::motions::Motion;
//! use vimirror::keymap::{KeyBinding, Keymap};
//!
//! let keymap = Keymap::compile(vec![
//!     KeyBinding::motion("j", Motion::MoveDown),
//!     KeyBinding::motion("j", Motion::MoveUp),
//! ]);
//! assert_eq!(keymap.len(), 1);
//! assert_eq!(keymap.get("j"), Some(&KeyBinding::motion("j", Motion::MoveUp)));
//! ```

pub mod default;

use crate::editor::actions::Action;
use crate::editor::mode::Mode;
use crate::editor::motions::Motion;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use default::default_keymap;

/// String parameters attached to a binding and handed to its action.
pub type Props = IndexMap<String, String>;

/// The kind of command a binding triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Motion,
    Action,
    KeyToKey,
    Operator,
    OperatorMotion,
    Search,
}

/// The command a binding triggers.
///
/// Only motions and actions are executed; the other kinds are accepted in a
/// table but never handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    Motion {
        motion: Motion,
    },
    Action {
        action: Action,
    },
    #[serde(rename_all = "camelCase")]
    KeyToKey {
        to_keys: String,
    },
    Operator {
        operator: String,
    },
    OperatorMotion {
        operator: String,
        motion: Motion,
    },
    Search,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Motion { .. } => CommandKind::Motion,
            Command::Action { .. } => CommandKind::Action,
            Command::KeyToKey { .. } => CommandKind::KeyToKey,
            Command::Operator { .. } => CommandKind::Operator,
            Command::OperatorMotion { .. } => CommandKind::OperatorMotion,
            Command::Search => CommandKind::Search,
        }
    }
}

/// One entry of a keymap table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Chord identifier, e.g. `"j"`, `"Escape"`, `"Ctrl-r"`.
    pub keys: String,

    #[serde(flatten)]
    pub command: Command,

    /// When set, the binding only fires in this mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub props: Props,
}

impl KeyBinding {
    pub fn new(keys: &str, command: Command) -> Self {
        Self {
            keys: keys.to_string(),
            command,
            mode: None,
            props: Props::new(),
        }
    }

    pub fn motion(keys: &str, motion: Motion) -> Self {
        Self::new(keys, Command::Motion { motion })
    }

    pub fn action(keys: &str, action: Action) -> Self {
        Self::new(keys, Command::Action { action })
    }

    /// Restricts the binding to `mode`.
    pub fn in_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_prop(mut self, key: &str, value: &str) -> Self {
        self.props.insert(key.to_string(), value.to_string());
        self
    }
}

/// Bindings keyed by chord, read-only once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: IndexMap<String, KeyBinding>,
}

impl Keymap {
    /// Compiles bindings in declaration order; the last binding for a chord wins.
    pub fn compile(bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        let mut map = IndexMap::new();
        for binding in bindings {
            if let Some(previous) = map.insert(binding.keys.clone(), binding) {
                log::trace!("binding for {:?} overridden", previous.keys);
            }
        }
        Self { bindings: map }
    }

    pub fn get(&self, chord: &str) -> Option<&KeyBinding> {
        self.bindings.get(chord)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.values()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::compile(default_keymap())
    }
}
