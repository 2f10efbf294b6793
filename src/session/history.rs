//! Undo/redo system with branching undo tree.
//!
//! This module implements vim-style undo/redo with a branching tree structure
//! that preserves all edit history. When you undo then make a new edit, the old
//! "future" is preserved as a branch; redo follows the newest branch.
//!
//! # Architecture
//!
//! - `Snapshot`: Captures document and selection at a point in time
//! - `UndoNode`: Tree node containing snapshot, parent, children, and sequence
//! - `UndoTree`: Manages the tree structure and navigation
//!
//! # Example
//!
//! ```text
//!     0 (initial)
//!     |
//!     1 (edit A)
//!    / \
//!   2   3 (branching: undo, then two different edits)
//! ```

use crate::document::tree::BlockTree;
use crate::document::Selection;

/// Document and selection at one point in the edit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tree: BlockTree,
    pub selection: Selection,
}

/// A node in the undo tree.
#[derive(Debug, Clone)]
pub struct UndoNode {
    pub snapshot: Snapshot,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub seq: u64,
}

impl UndoNode {
    pub fn new(snapshot: Snapshot, parent: Option<usize>, seq: u64) -> Self {
        Self {
            snapshot,
            parent,
            children: Vec::new(),
            seq,
        }
    }
}

/// Branching undo tree. The root is the state the session started with.
#[derive(Debug)]
pub struct UndoTree {
    nodes: Vec<UndoNode>,
    current: usize,
    next_seq: u64,
}

impl UndoTree {
    /// Creates a new undo tree with an initial snapshot.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            nodes: vec![UndoNode::new(initial, None, 0)],
            current: 0,
            next_seq: 1,
        }
    }

    /// Returns the current node index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a checkpoint as a child of the current node and moves to it.
    pub fn add_checkpoint(&mut self, snapshot: Snapshot) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let new_index = self.nodes.len();
        self.nodes[self.current].children.push(new_index);
        self.nodes.push(UndoNode::new(snapshot, Some(self.current), seq));
        self.current = new_index;
    }

    /// Moves to the parent node.
    ///
    /// Returns the snapshot to restore, or None if already at root.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let parent = self.nodes[self.current].parent?;
        self.current = parent;
        Some(self.nodes[parent].snapshot.clone())
    }

    /// Moves to the newest child node.
    ///
    /// Returns the snapshot to restore, or None if no children exist.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let newest = self.nodes[self.current]
            .children
            .iter()
            .copied()
            .max_by_key(|&child| self.nodes[child].seq)?;
        self.current = newest;
        Some(self.nodes[newest].snapshot.clone())
    }
}
