//! Text file loading.
//!
//! Each line of input becomes one paragraph block; a blank line becomes an
//! empty paragraph. Consecutive lines starting with `>` are grouped into a
//! single `blockquote` block holding one paragraph per line.

use crate::document::tree::{BlockTree, Node};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Loads a text file from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use vimirror::file::loader::load_file;
///
/// let tree = load_file("notes.txt").unwrap();
/// assert!(!tree.blocks().is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as UTF-8.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<BlockTree> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    Ok(parse_text(&content))
}

/// Loads text from stdin.
pub fn load_from_stdin() -> Result<BlockTree> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(parse_text(&content))
}

/// Builds a block tree from text.
///
/// Empty input yields a document holding one empty paragraph.
///
/// # Examples
///
/// ```
/// use vimirror::file::loader::parse_text;
///
/// let tree = parse_text("one\n> quoted\n> more\n\ntwo");
/// assert_eq!(tree.blocks().len(), 4);
/// assert_eq!(tree.blocks()[1].children().len(), 2);
/// ```
pub fn parse_text(content: &str) -> BlockTree {
    let mut blocks = Vec::new();
    let mut quote: Vec<Node> = Vec::new();

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            let text = rest.strip_prefix(' ').unwrap_or(rest);
            quote.push(Node::paragraph(text));
            continue;
        }
        if !quote.is_empty() {
            blocks.push(Node::block("blockquote", std::mem::take(&mut quote)));
        }
        blocks.push(Node::paragraph(line));
    }
    if !quote.is_empty() {
        blocks.push(Node::block("blockquote", quote));
    }

    if blocks.is_empty() {
        BlockTree::default()
    } else {
        BlockTree::new(blocks)
    }
}
