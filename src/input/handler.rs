//! Input event handler for polling and routing keyboard events.
//!
//! Every key goes to the modal engine first. Keys it does not handle fall
//! through to the session's native editing, except that characters are
//! swallowed outside Insert mode.

use super::keys::key_to_chord;
use crate::editor::dispatcher::Vim;
use crate::editor::host::EditorHost;
use crate::session::Session;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};

/// Chord that quits the application regardless of mode.
pub const QUIT_KEY: Key = Key::Ctrl('q');

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// What happened to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A binding consumed the key.
    Handled,
    /// The session edited the document natively.
    Edited,
    /// The key was swallowed because the editor is not in Insert mode.
    Suppressed,
    /// Nothing happened.
    Ignored,
    /// A binding ran into a usage error.
    Failed(String),
}

/// Routes one key through the engine and, on fallthrough, to the session.
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use vimirror::document::tree::{BlockTree, Node};
/// use vimirror::editor::dispatcher::Vim;
/// use vimirror::input::handler::{route_key, KeyOutcome};
/// use vimirror::session::Session;
///
/// let mut session = Session::at_start(BlockTree::new(vec![Node::paragraph("ab")]));
/// let mut vim = Vim::with_defaults(&session);
///
/// // Characters never reach the document in Normal mode
/// assert_eq!(route_key(Key::Char('x'), &mut vim, &mut session), KeyOutcome::Suppressed);
///
/// assert_eq!(route_key(Key::Char('i'), &mut vim, &mut session), KeyOutcome::Handled);
/// assert_eq!(route_key(Key::Char('x'), &mut vim, &mut session), KeyOutcome::Edited);
/// ```
pub fn route_key(key: Key, vim: &mut Vim, session: &mut Session) -> KeyOutcome {
    let Some(chord) = key_to_chord(key) else {
        return KeyOutcome::Ignored;
    };

    match vim.handle_key(session, &chord) {
        Ok(true) => return KeyOutcome::Handled,
        Ok(false) => {}
        Err(err) => {
            log::error!("{:?}: {}", chord, err);
            return KeyOutcome::Failed(err.to_string());
        }
    }

    if vim.suppresses_keypress() {
        return match key {
            Key::Char(_) | Key::Backspace => KeyOutcome::Suppressed,
            _ => KeyOutcome::Ignored,
        };
    }

    let committed = match key {
        Key::Char('\n') => session.split_block(),
        Key::Char(c) => session.type_char(c),
        Key::Backspace => session.backspace(),
        _ => None,
    };
    match committed {
        Some(tr) => {
            vim.apply_transaction(&tr, session.selection());
            KeyOutcome::Edited
        }
        None => KeyOutcome::Ignored,
    }
}

/// Handles terminal input events and updates editor state.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
    /// Last usage error reported by a binding, shown in the status line
    last_error: Option<String>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
            last_error: None,
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
            last_error: None,
        })
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if the input ended.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// The last usage error, if the most recent key produced one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Handles a terminal event.
    ///
    /// Returns Ok(true) if the application should quit, Ok(false) otherwise.
    pub fn handle_event(
        &mut self,
        event: Event,
        vim: &mut Vim,
        session: &mut Session,
    ) -> Result<bool> {
        let key = match event {
            Event::Key(key) => key,
            _ => return Ok(false),
        };
        if key == QUIT_KEY {
            return Ok(true);
        }

        self.last_error = match route_key(key, vim, session) {
            KeyOutcome::Failed(message) => Some(message),
            _ => None,
        };
        Ok(false)
    }
}
