//! The host editor the modal engine drives.
//!
//! A host owns the document, the selection and the undo history. The engine
//! reads the document, asks the host to commit transactions, and delegates
//! focus and history commands to it.

use super::transaction::Transaction;
use crate::document::{Document, Selection};

/// Which document boundary to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Start,
    End,
}

/// Collaborator contract for the editor hosting the engine.
pub trait EditorHost {
    /// The document type exposed by the host.
    type Doc: Document;

    fn doc(&self) -> &Self::Doc;

    /// The current selection.
    fn selection(&self) -> Selection;

    /// Applies the transaction's selection request and any other effects.
    fn commit(&mut self, tr: &Transaction);

    /// Moves the selection to the start or end of the document.
    fn focus(&mut self, target: FocusTarget) -> bool;

    fn undo(&mut self) -> bool;

    fn redo(&mut self) -> bool;
}
