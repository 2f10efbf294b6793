//! A concrete editor host over an in-memory [`BlockTree`].
//!
//! `Session` owns the document, the selection and the undo history, and
//! implements [`EditorHost`] so the modal engine can drive it. It also does
//! the native editing the engine leaves to its host: typing characters,
//! Backspace and Enter. Each native edit returns the transaction it
//! committed so the caller can report it to the engine.
//!
//! # Example
//!
//! ```
//! use vimirror::document::tree::{BlockTree, Node};
//! use vimirror::document::Selection;
//! use vimirror::editor::host::EditorHost;
//! use vimirror::session::Session;
//!
//! let tree = BlockTree::new(vec![Node::paragraph("ac")]);
//! let mut session = Session::new(tree, Selection::cursor(2));
//!
//! session.type_char('b');
//! assert_eq!(session.tree().get_node(&[0]).unwrap().text_content(), "abc");
//! assert_eq!(session.selection(), Selection::cursor(3));
//!
//! assert!(session.undo());
//! assert_eq!(session.tree().get_node(&[0]).unwrap().text_content(), "ac");
//! ```

pub mod history;

use crate::document::tree::BlockTree;
use crate::document::{Document, Selection};
use crate::editor::host::{EditorHost, FocusTarget};
use crate::editor::transaction::Transaction;
use history::{Snapshot, UndoTree};

pub struct Session {
    tree: BlockTree,
    selection: Selection,
    history: UndoTree,
    filename: Option<String>,
    dirty: bool,
    scroll_requested: bool,
}

impl Session {
    /// Creates a session; `selection` is clamped to the document.
    pub fn new(tree: BlockTree, selection: Selection) -> Self {
        let selection = selection.clamped(tree.size());
        let history = UndoTree::new(Snapshot {
            tree: tree.clone(),
            selection,
        });
        Self {
            tree,
            selection,
            history,
            filename: None,
            dirty: false,
            scroll_requested: false,
        }
    }

    /// Creates a session with the cursor at the start of the text.
    pub fn at_start(tree: BlockTree) -> Self {
        let start = tree.start_text_pos();
        Self::new(tree, Selection::cursor(start))
    }

    pub fn tree(&self) -> &BlockTree {
        &self.tree
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    /// Returns true if the document changed since it was loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns and clears a pending scroll-into-view request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    /// Inserts `c` at the cursor.
    pub fn type_char(&mut self, c: char) -> Option<Transaction> {
        let pos = self.selection.from();
        if !self.tree.insert_text(pos, &c.to_string()) {
            return None;
        }
        Some(self.finish_edit(pos + 1))
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) -> Option<Transaction> {
        let pos = self.selection.from();
        if !self.tree.delete_before(pos) {
            return None;
        }
        Some(self.finish_edit(pos - 1))
    }

    /// Splits the current block at the cursor.
    pub fn split_block(&mut self) -> Option<Transaction> {
        let pos = self.tree.split_block(self.selection.from())?;
        Some(self.finish_edit(pos))
    }

    fn finish_edit(&mut self, cursor: usize) -> Transaction {
        self.dirty = true;
        let tr = Transaction::new()
            .set_selection(Selection::cursor(cursor))
            .scroll_into_view();
        self.commit(&tr);
        self.history.add_checkpoint(Snapshot {
            tree: self.tree.clone(),
            selection: self.selection,
        });
        tr
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.tree = snapshot.tree;
        self.selection = snapshot.selection.clamped(self.tree.size());
        self.dirty = true;
        self.scroll_requested = true;
    }
}

impl EditorHost for Session {
    type Doc = BlockTree;

    fn doc(&self) -> &BlockTree {
        &self.tree
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn commit(&mut self, tr: &Transaction) {
        if let Some(selection) = tr.selection() {
            self.selection = selection.clamped(self.tree.size());
        }
        if tr.scrolls_into_view() {
            self.scroll_requested = true;
        }
    }

    fn focus(&mut self, target: FocusTarget) -> bool {
        let pos = match target {
            FocusTarget::Start => self.tree.start_text_pos(),
            FocusTarget::End => self.tree.end_text_pos(),
        };
        self.selection = Selection::cursor(pos);
        self.scroll_requested = true;
        true
    }

    fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }
}
