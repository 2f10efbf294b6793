//! Mapping terminal key events to chord strings.

use termion::event::Key;

/// Converts a termion key to the chord string used in keymaps.
///
/// Returns `None` for keys no chord is defined for.
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use vimirror::input::keys::key_to_chord;
///
/// assert_eq!(key_to_chord(Key::Char('j')).as_deref(), Some("j"));
/// assert_eq!(key_to_chord(Key::Esc).as_deref(), Some("Escape"));
/// assert_eq!(key_to_chord(Key::Ctrl('r')).as_deref(), Some("Ctrl-r"));
/// ```
pub fn key_to_chord(key: Key) -> Option<String> {
    let chord = match key {
        Key::Char('\n') => "Enter".to_string(),
        Key::Char('\t') => "Tab".to_string(),
        Key::Char(c) => c.to_string(),
        Key::Ctrl(c) => format!("Ctrl-{}", c),
        Key::Alt(c) => format!("Alt-{}", c),
        Key::Esc => "Escape".to_string(),
        Key::Backspace => "Backspace".to_string(),
        Key::Delete => "Delete".to_string(),
        Key::Left => "ArrowLeft".to_string(),
        Key::Right => "ArrowRight".to_string(),
        Key::Up => "ArrowUp".to_string(),
        Key::Down => "ArrowDown".to_string(),
        Key::Home => "Home".to_string(),
        Key::End => "End".to_string(),
        Key::PageUp => "PageUp".to_string(),
        Key::PageDown => "PageDown".to_string(),
        Key::F(n) => format!("F{}", n),
        _ => return None,
    };
    Some(chord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_keys() {
        assert_eq!(key_to_chord(Key::Char('A')).as_deref(), Some("A"));
        assert_eq!(key_to_chord(Key::Char(' ')).as_deref(), Some(" "));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_to_chord(Key::Char('\n')).as_deref(), Some("Enter"));
        assert_eq!(key_to_chord(Key::Backspace).as_deref(), Some("Backspace"));
        assert_eq!(key_to_chord(Key::F(1)).as_deref(), Some("F1"));
    }
}
