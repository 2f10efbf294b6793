//! Cursor decoration derived from the selection.
//!
//! The decoration is the visual block cursor drawn over the document. It is
//! never authoritative: it is recomputed from the latest selection every time
//! a transaction is committed.
//!
//! # Example
//!
//! ```
//! use vimirror::document::Selection;
//! use vimirror::editor::cursor::CursorDecoration;
//!
//! let deco = CursorDecoration::from_selection(Selection::cursor(3), "vim-cursor");
//! assert_eq!(deco.range(), 3..4);
//! assert!(deco.covers(3));
//! assert!(!deco.covers(4));
//! ```

use crate::document::Selection;
use std::ops::Range;

/// An inline decoration spanning `[from, to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorDecoration {
    from: usize,
    to: usize,
    class: String,
}

impl CursorDecoration {
    /// Covers `[selection.from, selection.to + 1)`.
    pub fn from_selection(selection: Selection, class: &str) -> Self {
        Self {
            from: selection.from(),
            to: selection.to() + 1,
            class: class.to_string(),
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    /// CSS-style class name attached to the decorated range.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns true if `pos` lies inside the decorated range.
    pub fn covers(&self, pos: usize) -> bool {
        self.range().contains(&pos)
    }
}
