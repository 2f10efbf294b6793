//! Key dispatch and the mode state machine.
//!
//! [`Vim`] is the per-instance engine: it holds the compiled keymap and the
//! derived [`VimState`], routes each key chord to a motion or action, and
//! recomputes state after every committed transaction.
//!
//! # Example
//!
//! ```
//! use vimirror::document::tree::{BlockTree, Node};
//! use vimirror::document::Selection;
//! use vimirror::editor::dispatcher::Vim;
//! use vimirror::editor::host::EditorHost;
//! use vimirror::editor::mode::Mode;
//! use vimirror::session::Session;
//!
//! let tree = BlockTree::new(vec![Node::paragraph("hello world")]);
//! let mut session = Session::new(tree, Selection::cursor(1));
//! let mut vim = Vim::with_defaults(&session);
//!
//! assert!(vim.handle_key(&mut session, "w").unwrap());
//! assert_eq!(session.selection(), Selection::cursor(7));
//!
//! assert!(vim.handle_key(&mut session, "i").unwrap());
//! assert_eq!(vim.mode(), Mode::Insert);
//! ```

use super::host::{EditorHost, FocusTarget};
use super::mode::Mode;
use super::state::{ModeCallback, VimState};
use super::transaction::Transaction;
use crate::document::Selection;
use crate::error::VimError;
use crate::keymap::{Command, Keymap};

/// Class name given to the cursor decoration unless configured otherwise.
pub const DEFAULT_CURSOR_CLASS: &str = "vim-cursor";

/// What a motion or action gets to work with.
///
/// Every change a handler makes goes through [`Context::dispatch`] (or the
/// focus/history helpers), so derived state is recomputed in the same pass.
pub struct Context<'a, H: EditorHost> {
    pub state: &'a mut VimState,
    pub host: &'a mut H,
}

impl<'a, H: EditorHost> Context<'a, H> {
    pub fn new(state: &'a mut VimState, host: &'a mut H) -> Self {
        Self { state, host }
    }

    /// Commits a transaction and recomputes derived state.
    pub fn dispatch(&mut self, tr: Transaction) {
        self.host.commit(&tr);
        let selection = self.host.selection();
        self.state.apply(&tr, selection);
    }

    pub fn focus(&mut self, target: FocusTarget) -> bool {
        let handled = self.host.focus(target);
        self.sync();
        handled
    }

    pub fn undo(&mut self) -> bool {
        let handled = self.host.undo();
        self.sync();
        handled
    }

    pub fn redo(&mut self) -> bool {
        let handled = self.host.redo();
        self.sync();
        handled
    }

    /// Recomputes state after the host changed the selection on its own.
    fn sync(&mut self) {
        let selection = self.host.selection();
        self.state.apply(&Transaction::new(), selection);
    }
}

/// The modal engine for one editor instance.
#[derive(Debug)]
pub struct Vim {
    keymap: Keymap,
    state: VimState,
}

impl Vim {
    /// Creates an engine for `host` in Normal mode.
    ///
    /// `on_mode_change` is notified once right away with the initial mode.
    pub fn new<H: EditorHost>(
        host: &H,
        keymap: Keymap,
        cursor_class: &str,
        on_mode_change: Option<ModeCallback>,
    ) -> Self {
        let state = VimState::init(host.selection(), cursor_class, on_mode_change);
        log::debug!("vim engine ready with {} bindings", keymap.len());
        Self { keymap, state }
    }

    /// Creates an engine with the default keymap and cursor class.
    pub fn with_defaults<H: EditorHost>(host: &H) -> Self {
        Self::new(host, Keymap::default(), DEFAULT_CURSOR_CLASS, None)
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn state(&self) -> &VimState {
        &self.state
    }

    /// Handles one key chord.
    ///
    /// Returns `Ok(true)` when the key was consumed and the host's default
    /// behavior must be skipped, `Ok(false)` when it was not handled.
    pub fn handle_key<H: EditorHost>(
        &mut self,
        host: &mut H,
        chord: &str,
    ) -> Result<bool, VimError> {
        let Some(binding) = self.keymap.get(chord) else {
            log::trace!("no binding for {:?}", chord);
            return Ok(false);
        };

        let mode = self.state.mode();
        if let Some(required) = binding.mode {
            if required != mode {
                log::trace!(
                    "{:?} requires {} mode, in {}",
                    chord,
                    required.name(),
                    mode.name()
                );
                return Ok(false);
            }
        }

        let mut cx = Context::new(&mut self.state, host);
        let handled = match &binding.command {
            Command::Motion { motion } => {
                if mode == Mode::Insert {
                    return Ok(false);
                }
                motion.run(&mut cx)?
            }
            Command::Action { action } => action.run(&mut cx, &binding.props)?,
            other => {
                log::debug!("{:?} is bound to unsupported {:?}", chord, other.kind());
                false
            }
        };

        log::debug!("{:?} handled={}", chord, handled);
        Ok(handled)
    }

    /// Returns true when a raw character keypress must be suppressed.
    ///
    /// Outside Insert mode no character reaches the document, whether or not
    /// a binding matched.
    pub fn suppresses_keypress(&self) -> bool {
        self.state.mode() != Mode::Insert
    }

    /// Recomputes derived state for a transaction committed by the host.
    pub fn apply_transaction(&mut self, tr: &Transaction, selection: Selection) {
        self.state.apply(tr, selection);
    }
}
