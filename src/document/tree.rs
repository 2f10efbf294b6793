//! In-memory block tree implementing [`Document`].
//!
//! `BlockTree` is the document model used by the terminal front end and the
//! test suite. Blocks nest (a quote holds paragraphs); text lives in leaf
//! blocks. Besides read access it offers the few edits the host needs to
//! support typing in Insert mode.
//!
//! # Example
//!
//! ```
//! use vimirror::document::tree::{BlockTree, Node};
//! use vimirror::document::Document;
//!
//! let tree = BlockTree::new(vec![
//!     Node::paragraph("first"),
//!     Node::block("blockquote", vec![Node::paragraph("quoted")]),
//! ]);
//!
//! // Navigate to the quoted paragraph by path
//! let node = tree.get_node(&[1, 0]).unwrap();
//! assert_eq!(node.text_content(), "quoted");
//! assert_eq!(tree.size(), 7 + 10);
//! ```

use super::{Document, NodeInfo, ResolvedPos, Visit};
use crate::error::DocumentError;
use std::ops::ControlFlow;

/// A node of the block tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A block with a type name and child nodes.
    Block { name: String, children: Vec<Node> },
    /// A run of inline text.
    Text(String),
}

impl Node {
    /// Creates a block node.
    pub fn block(name: &str, children: Vec<Node>) -> Self {
        Node::Block {
            name: name.to_string(),
            children,
        }
    }

    /// Creates a paragraph holding `text`. An empty string yields an empty paragraph.
    pub fn paragraph(text: &str) -> Self {
        let children = if text.is_empty() {
            vec![]
        } else {
            vec![Node::Text(text.to_string())]
        };
        Node::block("paragraph", children)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Returns true for a block whose children are all text.
    pub fn is_textblock(&self) -> bool {
        match self {
            Node::Block { children, .. } => children.iter().all(|c| !c.is_block()),
            Node::Text(_) => false,
        }
    }

    /// Size of the node's content in offsets.
    pub fn content_size(&self) -> usize {
        match self {
            Node::Block { children, .. } => children.iter().map(Node::node_size).sum(),
            Node::Text(text) => text.chars().count(),
        }
    }

    /// Size of the node including its opening and closing tokens.
    pub fn node_size(&self) -> usize {
        match self {
            Node::Block { .. } => self.content_size() + 2,
            Node::Text(_) => self.content_size(),
        }
    }

    /// All text contained in the node, concatenated.
    pub fn text_content(&self) -> String {
        match self {
            Node::Block { children, .. } => children.iter().map(Node::text_content).collect(),
            Node::Text(text) => text.clone(),
        }
    }

    fn info(&self, pos: usize) -> NodeInfo {
        NodeInfo {
            pos,
            node_size: self.node_size(),
            is_block: self.is_block(),
            child_count: self.children().len(),
            text_content: self.text_content(),
        }
    }
}

/// A complete document: the ordered top-level blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTree {
    children: Vec<Node>,
}

impl Default for BlockTree {
    fn default() -> Self {
        Self::new(vec![Node::paragraph("")])
    }
}

impl BlockTree {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Returns the top-level blocks.
    pub fn blocks(&self) -> &[Node] {
        &self.children
    }

    /// Gets the node at the given child-index path.
    ///
    /// Returns `None` if any index is out of bounds or the path runs into text.
    pub fn get_node(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut current = self.children.get(*first)?;
        for &index in rest {
            current = current.children().get(index)?;
        }
        Some(current)
    }

    fn get_node_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (first, rest) = path.split_first()?;
        let mut current = self.children.get_mut(*first)?;
        for &index in rest {
            current = match current {
                Node::Block { children, .. } => children.get_mut(index)?,
                Node::Text(_) => return None,
            };
        }
        Some(current)
    }

    /// Child-index path and content start of the innermost block around `pos`.
    fn block_path_at(&self, pos: usize) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        let mut path = Vec::new();
        let mut starts = vec![0];
        let mut sizes = vec![self.size() + 2];
        let mut children = self.children.as_slice();
        let mut child_pos = 0;

        'outer: loop {
            for (index, child) in children.iter().enumerate() {
                let end = child_pos + child.node_size();
                if child.is_block() && pos > child_pos && pos < end {
                    path.push(index);
                    starts.push(child_pos + 1);
                    sizes.push(child.node_size());
                    children = child.children();
                    child_pos += 1;
                    continue 'outer;
                }
                if end > pos {
                    break;
                }
                child_pos = end;
            }
            break;
        }

        (path, starts, sizes)
    }

    /// First offset inside text content, or 1 for an all-empty document.
    pub fn start_text_pos(&self) -> usize {
        let mut found = None;
        let _ = self.descendants(&mut |node| {
            if !node.is_block || node.child_count == 0 {
                found = Some(if node.is_block { node.pos + 1 } else { node.pos });
                return Visit::Stop;
            }
            Visit::Descend
        });
        found.unwrap_or(0).min(self.size())
    }

    /// Last offset inside text content.
    pub fn end_text_pos(&self) -> usize {
        let mut found = None;
        let _ = self.descendants(&mut |node| {
            if node.is_block && node.child_count == 0 {
                found = Some(node.pos + 1);
            } else if !node.is_block {
                found = Some(node.end());
            }
            Visit::Descend
        });
        found.unwrap_or(0).min(self.size())
    }

    /// Inserts `text` at `pos` inside a text block.
    ///
    /// Returns false when `pos` is not inside a text block.
    pub fn insert_text(&mut self, pos: usize, text: &str) -> bool {
        let (path, starts, _) = self.block_path_at(pos);
        let offset = pos - starts[starts.len() - 1];
        match self.get_node_mut(&path) {
            Some(node) if node.is_textblock() && !path.is_empty() => {
                let mut content: Vec<char> = node.text_content().chars().collect();
                let at = offset.min(content.len());
                content.splice(at..at, text.chars());
                set_text(node, content.into_iter().collect());
                true
            }
            _ => false,
        }
    }

    /// Deletes the character before `pos` within its text block.
    pub fn delete_before(&mut self, pos: usize) -> bool {
        let (path, starts, _) = self.block_path_at(pos);
        let offset = pos - starts[starts.len() - 1];
        match self.get_node_mut(&path) {
            Some(node) if node.is_textblock() && !path.is_empty() && offset > 0 => {
                let mut content: Vec<char> = node.text_content().chars().collect();
                if offset > content.len() {
                    return false;
                }
                content.remove(offset - 1);
                set_text(node, content.into_iter().collect());
                true
            }
            _ => false,
        }
    }

    /// Splits the text block around `pos` into two sibling blocks.
    ///
    /// Returns the offset at the start of the new second block.
    pub fn split_block(&mut self, pos: usize) -> Option<usize> {
        let (path, starts, _) = self.block_path_at(pos);
        let (index, parent_path) = path.split_last()?;
        let offset = pos - starts[starts.len() - 1];

        let node = self.get_node(&path)?;
        if !node.is_textblock() {
            return None;
        }
        let content: Vec<char> = node.text_content().chars().collect();
        let at = offset.min(content.len());
        let head: String = content[..at].iter().collect();
        let tail: String = content[at..].iter().collect();

        let mut second = node.clone();
        set_text(&mut second, tail);
        if let Some(first) = self.get_node_mut(&path) {
            set_text(first, head);
        }

        let siblings = if parent_path.is_empty() {
            &mut self.children
        } else {
            match self.get_node_mut(parent_path)? {
                Node::Block { children, .. } => children,
                Node::Text(_) => return None,
            }
        };
        siblings.insert(index + 1, second);

        // Closing token of the first half, then the opening token of the second.
        Some(pos + 2)
    }
}

fn set_text(node: &mut Node, text: String) {
    if let Node::Block { children, .. } = node {
        children.clear();
        if !text.is_empty() {
            children.push(Node::Text(text));
        }
    }
}

fn walk(
    nodes: &[Node],
    base: usize,
    from: usize,
    to: usize,
    f: &mut dyn FnMut(&NodeInfo) -> Visit,
) -> ControlFlow<()> {
    let mut pos = base;
    for node in nodes {
        if pos >= to {
            break;
        }
        let end = pos + node.node_size();
        if end > from {
            match f(&node.info(pos)) {
                Visit::Stop => return ControlFlow::Break(()),
                Visit::Skip => {}
                Visit::Descend => {
                    if !node.children().is_empty() {
                        walk(node.children(), pos + 1, from, to, f)?;
                    }
                }
            }
        }
        pos = end;
    }
    ControlFlow::Continue(())
}

impl Document for BlockTree {
    fn size(&self) -> usize {
        self.children.iter().map(Node::node_size).sum()
    }

    fn resolve(&self, pos: usize) -> Result<ResolvedPos, DocumentError> {
        let size = self.size();
        if pos > size {
            return Err(DocumentError::OutOfRange { pos, size });
        }
        let (_, starts, sizes) = self.block_path_at(pos);
        Ok(ResolvedPos::new(pos, starts, sizes))
    }

    fn nodes_between(
        &self,
        from: usize,
        to: usize,
        f: &mut dyn FnMut(&NodeInfo) -> Visit,
    ) -> ControlFlow<()> {
        walk(&self.children, 0, from, to, f)
    }
}
