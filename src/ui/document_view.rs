//! Document view: one screen line per text block, cursor decoration drawn in.
//!
//! This module provides:
//! - `DocumentLine`: A single displayable line (one text block)
//! - `document_lines`: Flattens a `BlockTree` into display lines
//! - `render_document_view`: Draws the lines with the cursor decoration

use crate::document::tree::{BlockTree, Node};
use crate::editor::mode::Mode;
use crate::editor::state::VimState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One text block laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLine {
    /// Nesting depth of the block (1 for top-level blocks)
    pub depth: usize,
    /// Offset of the first character of the block's content
    pub content_start: usize,
    /// The block's text
    pub text: Vec<char>,
}

impl DocumentLine {
    /// Offset just past the last character.
    pub fn content_end(&self) -> usize {
        self.content_start + self.text.len()
    }

    /// Returns true if `pos` falls on this line, including its end.
    pub fn contains(&self, pos: usize) -> bool {
        self.content_start <= pos && pos <= self.content_end()
    }
}

/// Flattens the tree into display lines, in document order.
///
/// # Example
///
/// ```
/// use vimirror::document::tree::{BlockTree, Node};
/// use vimirror::ui::document_view::document_lines;
///
/// let tree = BlockTree::new(vec![
///     Node::paragraph("ab"),
///     Node::block("blockquote", vec![Node::paragraph("cd")]),
/// ]);
/// let lines = document_lines(&tree);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].depth, 2);
/// assert_eq!(lines[1].content_start, 6);
/// ```
pub fn document_lines(tree: &BlockTree) -> Vec<DocumentLine> {
    let mut lines = Vec::new();
    collect(tree.blocks(), 0, 1, &mut lines);
    lines
}

fn collect(nodes: &[Node], base: usize, depth: usize, out: &mut Vec<DocumentLine>) {
    let mut pos = base;
    for node in nodes {
        if node.is_textblock() {
            out.push(DocumentLine {
                depth,
                content_start: pos + 1,
                text: node.text_content().chars().collect(),
            });
        } else if node.is_block() {
            collect(node.children(), pos + 1, depth + 1, out);
        }
        pos += node.node_size();
    }
}

/// Style for the cursor in the given mode.
fn cursor_style(mode: Mode) -> Style {
    match mode {
        Mode::Insert => Style::default().add_modifier(Modifier::UNDERLINED),
        _ => Style::default().add_modifier(Modifier::REVERSED),
    }
}

/// Renders the document with the cursor decoration.
pub fn render_document_view(
    f: &mut Frame,
    area: Rect,
    lines: &[DocumentLine],
    state: &VimState,
    show_line_numbers: bool,
    scroll_offset: usize,
) {
    let decoration = state.cursor();
    let highlight = cursor_style(state.mode());
    let number_width = lines.len().to_string().len();

    let rendered: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(area.height as usize)
        .map(|(index, line)| {
            let mut spans = Vec::new();
            if show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", index + 1, width = number_width),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if line.depth > 1 {
                spans.push(Span::styled(
                    "│ ".repeat(line.depth - 1),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            for (offset, c) in line.text.iter().enumerate() {
                let pos = line.content_start + offset;
                let style = if decoration.covers(pos) {
                    highlight
                } else {
                    Style::default()
                };
                spans.push(Span::styled(c.to_string(), style));
            }
            // Cursor sitting past the last character
            if decoration.covers(line.content_end()) {
                spans.push(Span::styled(" ", highlight));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(rendered), area);
}
