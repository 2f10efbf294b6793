//! Error types for document access and key dispatch.
//!
//! Most commands that cannot apply simply report "not handled" as a plain
//! `bool`. The types here cover the cases that are contract violations
//! rather than ordinary no-ops.

use thiserror::Error;

/// Errors reported by a [`Document`](crate::document::Document) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The offset lies outside `[0, size]`.
    #[error("Position {pos} out of range (document size {size})")]
    OutOfRange { pos: usize, size: usize },
}

/// Errors raised while running a motion or action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VimError {
    /// A word jump was triggered from a block with no text content.
    #[error("Word jump '{motion}' triggered inside a block without text content")]
    EmptyBlock { motion: &'static str },

    /// No block encloses the cursor offset.
    #[error("No block contains position {pos}")]
    NoBlockAtCursor { pos: usize },

    /// The document collaborator rejected a position.
    #[error(transparent)]
    Document(#[from] DocumentError),
}
