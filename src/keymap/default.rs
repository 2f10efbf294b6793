//! The built-in key table.

use super::KeyBinding;
use crate::editor::actions::{Action, CursorPosition};
use crate::editor::mode::Mode;
use crate::editor::motions::Motion;

fn insert_at(keys: &str, position: CursorPosition) -> KeyBinding {
    KeyBinding::action(keys, Action::EnterInsertMode)
        .in_mode(Mode::Normal)
        .with_prop(CursorPosition::PROP, position.name())
}

/// Returns the default bindings in declaration order.
///
/// Order matters: compilation lets later entries override earlier ones, so
/// key-to-key remaps belong at the top, ahead of the motions.
pub fn default_keymap() -> Vec<KeyBinding> {
    vec![
        // Motions
        KeyBinding::motion("H", Motion::FocusStart),
        KeyBinding::motion("h", Motion::MoveToLeft),
        KeyBinding::motion("L", Motion::FocusEnd),
        KeyBinding::motion("l", Motion::MoveToRight),
        KeyBinding::motion("w", Motion::WordJumpForward),
        KeyBinding::motion("b", Motion::WordJumpBackward),
        KeyBinding::motion("j", Motion::MoveDown),
        KeyBinding::motion("k", Motion::MoveUp),
        // Actions
        KeyBinding::action("Escape", Action::EnterNormalMode),
        insert_at("i", CursorPosition::BeforeCurrent),
        insert_at("a", CursorPosition::AfterCurrent),
        insert_at("I", CursorPosition::BlockStart),
        insert_at("A", CursorPosition::BlockEnd),
        KeyBinding::action("u", Action::Undo).in_mode(Mode::Normal),
        KeyBinding::action("Ctrl-r", Action::Redo),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Command, Keymap};

    #[test]
    fn test_default_chords() {
        let keymap = Keymap::default();
        let chords: Vec<&str> = keymap.iter().map(|b| b.keys.as_str()).collect();
        assert_eq!(
            chords,
            vec!["H", "h", "L", "l", "w", "b", "j", "k", "Escape", "i", "a", "I", "A", "u", "Ctrl-r"]
        );
    }

    #[test]
    fn test_escape_is_mode_unguarded() {
        let keymap = Keymap::default();
        assert_eq!(keymap.get("Escape").unwrap().mode, None);
    }

    #[test]
    fn test_insert_variants_carry_cursor_position() {
        let keymap = Keymap::default();
        let binding = keymap.get("A").unwrap();
        assert_eq!(
            binding.command,
            Command::Action {
                action: Action::EnterInsertMode
            }
        );
        assert_eq!(binding.mode, Some(Mode::Normal));
        assert_eq!(binding.props[CursorPosition::PROP], "blockEnd");
    }
}
