//! Document and selection model consumed by the modal engine.
//!
//! The engine never owns or mutates a document. It reads one through the
//! [`Document`] trait and requests new selections through transactions. A
//! document is a tree of block and inline nodes addressed by integer offsets:
//! entering or leaving a non-text node costs one offset, each character of
//! text costs one offset.
//!
//! # Example
//!
//! ```
//! use vimirror::document::tree::{BlockTree, Node};
//! use vimirror::document::Document;
//!
//! let doc = BlockTree::new(vec![Node::paragraph("hi"), Node::paragraph("there")]);
//! assert_eq!(doc.size(), 11);
//!
//! let pos = doc.resolve(2).unwrap();
//! assert_eq!(pos.depth(), 1);
//! assert_eq!(pos.start(), 1);
//! ```

pub mod tree;

use crate::error::DocumentError;
use std::ops::ControlFlow;

/// A selected range `[from, to)` over document offsets.
///
/// Constructors keep `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    from: usize,
    to: usize,
}

impl Selection {
    /// Creates a selection, swapping the ends if they are given in reverse.
    pub fn new(from: usize, to: usize) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Creates a collapsed selection at `pos`.
    pub fn cursor(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns true when both ends coincide.
    pub fn is_collapsed(&self) -> bool {
        self.from == self.to
    }

    /// Clamps both ends into `[0, size]`.
    pub fn clamped(self, size: usize) -> Self {
        Self::new(self.from.min(size), self.to.min(size))
    }
}

/// An offset resolved against the document tree.
///
/// Depth 0 is the document node itself; each deeper level is the next
/// enclosing non-text node around the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPos {
    pos: usize,
    starts: Vec<usize>,
    node_sizes: Vec<usize>,
}

impl ResolvedPos {
    /// Builds a resolved position from per-depth content starts and node sizes.
    ///
    /// Both vectors are indexed by depth and must have the same, non-zero length.
    pub fn new(pos: usize, starts: Vec<usize>, node_sizes: Vec<usize>) -> Self {
        debug_assert_eq!(starts.len(), node_sizes.len());
        debug_assert!(!starts.is_empty());
        Self {
            pos,
            starts,
            node_sizes,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Depth of the innermost node enclosing the position.
    pub fn depth(&self) -> usize {
        self.starts.len() - 1
    }

    /// Content start of the innermost enclosing node.
    pub fn start(&self) -> usize {
        self.starts[self.depth()]
    }

    /// Node size of the innermost enclosing node.
    pub fn node_size(&self) -> usize {
        self.node_sizes[self.depth()]
    }

    /// End bound of the innermost block: content start plus its node size.
    pub fn block_end(&self) -> usize {
        self.start() + self.node_size()
    }
}

/// A snapshot of one node handed to a traversal visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub pos: usize,
    pub node_size: usize,
    pub is_block: bool,
    pub child_count: usize,
    pub text_content: String,
}

impl NodeInfo {
    /// Offset just after the node.
    pub fn end(&self) -> usize {
        self.pos + self.node_size
    }

    /// True when `pos` lies within `[self.pos, self.end()]`.
    pub fn contains(&self, pos: usize) -> bool {
        self.pos <= pos && pos <= self.end()
    }
}

/// What a traversal visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the node's children, then continue.
    Descend,
    /// Continue with the next sibling, skipping the children.
    Skip,
    /// End the traversal.
    Stop,
}

/// Read access to a block-structured document.
pub trait Document {
    /// Content size of the document in offsets.
    fn size(&self) -> usize;

    /// Resolves an offset, failing when it lies outside `[0, size]`.
    fn resolve(&self, pos: usize) -> Result<ResolvedPos, DocumentError>;

    /// Visits, in document order, every node overlapping `[from, to)`.
    ///
    /// Returns `ControlFlow::Break` when the visitor stopped the walk.
    fn nodes_between(
        &self,
        from: usize,
        to: usize,
        f: &mut dyn FnMut(&NodeInfo) -> Visit,
    ) -> ControlFlow<()>;

    /// Visits every node in the document.
    fn descendants(&self, f: &mut dyn FnMut(&NodeInfo) -> Visit) -> ControlFlow<()> {
        self.nodes_between(0, self.size(), f)
    }
}
