//! Derived modal state for one editor instance.
//!
//! `VimState` owns the current mode, the cursor decoration and the cursor
//! visibility flag. None of it is mutated directly: every change arrives
//! through [`VimState::apply`], which runs after each committed transaction,
//! whether the engine produced it or not.
//!
//! # Example
//!
//! ```
//! use vimirror::document::Selection;
//! use vimirror::editor::meta::TransactionMeta;
//! use vimirror::editor::mode::Mode;
//! use vimirror::editor::state::VimState;
//! use vimirror::editor::transaction::Transaction;
//!
//! let mut state = VimState::init(Selection::cursor(1), "vim-cursor", None);
//! assert_eq!(state.mode(), Mode::Normal);
//!
//! let tr = Transaction::new().set_meta(TransactionMeta::ChangeModeTo, Mode::Insert);
//! state.apply(&tr, Selection::cursor(2));
//!
//! assert_eq!(state.mode(), Mode::Insert);
//! assert_eq!(state.cursor().range(), 2..3);
//! assert_eq!(state.attributes()["mode"], "insert");
//! ```

use super::cursor::CursorDecoration;
use super::meta::TransactionMeta;
use super::mode::Mode;
use super::transaction::Transaction;
use crate::document::Selection;
use indexmap::IndexMap;
use std::fmt;

/// Called with the external mode name whenever the mode changes.
pub type ModeCallback = Box<dyn FnMut(&str)>;

pub struct VimState {
    mode: Mode,
    show_cursor: bool,
    cursor: CursorDecoration,
    cursor_class: String,
    on_mode_change: Option<ModeCallback>,
}

impl fmt::Debug for VimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VimState")
            .field("mode", &self.mode)
            .field("show_cursor", &self.show_cursor)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl VimState {
    /// Creates the state for a new editor instance in Normal mode.
    ///
    /// The callback, if any, is notified once with the initial mode.
    pub fn init(
        selection: Selection,
        cursor_class: &str,
        mut on_mode_change: Option<ModeCallback>,
    ) -> Self {
        let mode = Mode::default();
        if let Some(callback) = on_mode_change.as_mut() {
            callback(mode.name());
        }
        Self {
            mode,
            show_cursor: false,
            cursor: CursorDecoration::from_selection(selection, cursor_class),
            cursor_class: cursor_class.to_string(),
            on_mode_change,
        }
    }

    /// Recomputes derived state after a committed transaction.
    ///
    /// `selection` is the selection of the newly committed document state.
    pub fn apply(&mut self, tr: &Transaction, selection: Selection) {
        self.cursor = CursorDecoration::from_selection(selection, &self.cursor_class);

        match (tr.change_mode_to(), tr.get_meta(TransactionMeta::ChangeModeTo)) {
            (Some(mode), _) => {
                log::debug!("mode {} -> {}", self.mode.name(), mode.name());
                self.mode = mode;
                if let Some(callback) = self.on_mode_change.as_mut() {
                    callback(mode.name());
                }
            }
            (None, Some(value)) => {
                log::warn!("ignoring unrecognized mode change value {:?}", value)
            }
            (None, None) => {}
        }

        match (tr.show_cursor(), tr.get_meta(TransactionMeta::SetShowCursor)) {
            (Some(show), _) => self.show_cursor = show,
            (None, Some(value)) => {
                log::warn!("ignoring non-boolean cursor visibility {:?}", value)
            }
            (None, None) => {}
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn show_cursor(&self) -> bool {
        self.show_cursor
    }

    pub fn cursor(&self) -> &CursorDecoration {
        &self.cursor
    }

    /// The decorations to draw over the document.
    pub fn decorations(&self) -> Vec<CursorDecoration> {
        vec![self.cursor.clone()]
    }

    /// Presentation attributes for the editable surface.
    pub fn attributes(&self) -> IndexMap<&'static str, String> {
        let mut attrs = IndexMap::new();
        attrs.insert("vim-active", "true".to_string());
        attrs.insert("mode", self.mode.name().to_string());
        attrs.insert("show-cursor", self.show_cursor.to_string());
        attrs
    }
}
