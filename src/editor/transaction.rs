//! Transactions: a requested selection plus metadata, committed as a unit.
//!
//! # Example
//!
//! ```
//! use vimirror::document::Selection;
//! use vimirror::editor::meta::TransactionMeta;
//! use vimirror::editor::mode::Mode;
//! use vimirror::editor::transaction::Transaction;
//!
//! let tr = Transaction::new()
//!     .set_selection(Selection::cursor(4))
//!     .set_meta(TransactionMeta::ChangeModeTo, Mode::Insert);
//!
//! assert_eq!(tr.selection(), Some(Selection::cursor(4)));
//! assert_eq!(tr.change_mode_to(), Some(Mode::Insert));
//! ```

use super::meta::{MetaValue, TransactionMeta};
use super::mode::Mode;
use crate::document::Selection;
use indexmap::IndexMap;

/// A batch of changes handed to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    selection: Option<Selection>,
    scroll_into_view: bool,
    meta: IndexMap<TransactionMeta, MetaValue>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a new selection.
    pub fn set_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Asks the host to scroll the selection into view.
    pub fn scroll_into_view(mut self) -> Self {
        self.scroll_into_view = true;
        self
    }

    /// Attaches a metadata tag, replacing any earlier value for the same key.
    pub fn set_meta(mut self, key: TransactionMeta, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key, value.into());
        self
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn scrolls_into_view(&self) -> bool {
        self.scroll_into_view
    }

    pub fn get_meta(&self, key: TransactionMeta) -> Option<&MetaValue> {
        self.meta.get(&key)
    }

    /// The requested mode, when the tag is present and names a known mode.
    pub fn change_mode_to(&self) -> Option<Mode> {
        self.get_meta(TransactionMeta::ChangeModeTo)
            .and_then(MetaValue::as_mode)
    }

    /// The requested cursor visibility, when the tag is present and boolean.
    pub fn show_cursor(&self) -> Option<bool> {
        self.get_meta(TransactionMeta::SetShowCursor)
            .and_then(MetaValue::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_mode_value_is_none() {
        let tr = Transaction::new().set_meta(TransactionMeta::ChangeModeTo, "sideways");
        assert!(tr.get_meta(TransactionMeta::ChangeModeTo).is_some());
        assert_eq!(tr.change_mode_to(), None);
    }

    #[test]
    fn test_visibility_requires_bool() {
        let tr = Transaction::new().set_meta(TransactionMeta::SetShowCursor, "true");
        assert_eq!(tr.show_cursor(), None);

        let tr = Transaction::new().set_meta(TransactionMeta::SetShowCursor, false);
        assert_eq!(tr.show_cursor(), Some(false));
    }

    #[test]
    fn test_later_meta_overrides() {
        let tr = Transaction::new()
            .set_meta(TransactionMeta::ChangeModeTo, Mode::Insert)
            .set_meta(TransactionMeta::ChangeModeTo, Mode::Normal);
        assert_eq!(tr.change_mode_to(), Some(Mode::Normal));
    }
}
