/// UI module for the vimirror terminal interface.
///
/// This module provides the main UI structure for rendering the terminal interface,
/// including layout management and widget composition.
pub mod document_view;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use crate::editor::dispatcher::Vim;
use crate::editor::host::EditorHost;
use crate::session::Session;
use document_view::{document_lines, DocumentLine};

const HINT: &str = "i/a/I/A insert  Esc normal  h/l/w/b/j/k move  u undo  Ctrl-q quit";

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three main areas:
/// - Main view area (top): Displays the document, one line per text block
/// - Status line (middle): Shows current mode, file info, and cursor position
/// - Message area (bottom): Displays the last error or a key hint
pub struct UI {
    show_line_numbers: bool,
    scroll_offset: usize,
}

impl UI {
    /// Creates a new UI instance.
    ///
    /// # Example
    ///
    /// ```
    /// use vimirror::ui::UI;
    ///
    /// let ui = UI::new(true);
    /// assert_eq!(ui.scroll_offset(), 0);
    /// ```
    pub fn new(show_line_numbers: bool) -> Self {
        Self {
            show_line_numbers,
            scroll_offset: 0,
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls so the line holding `pos` is inside a viewport of `height` lines.
    ///
    /// Only moves when the session asked for it or the cursor left the viewport.
    fn adjust_scroll(&mut self, lines: &[DocumentLine], pos: usize, height: usize, force: bool) {
        if height == 0 {
            return;
        }
        let Some(row) = lines.iter().position(|line| line.contains(pos)) else {
            return;
        };
        let visible = self.scroll_offset <= row && row < self.scroll_offset + height;
        if visible && !force {
            return;
        }
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + height {
            self.scroll_offset = row + 1 - height;
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        vim: &Vim,
        session: &mut Session,
        last_error: Option<&str>,
    ) -> Result<()> {
        let lines = document_lines(session.tree());
        let cursor = session.selection().from();
        let scroll_requested = session.take_scroll_request();

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            self.adjust_scroll(&lines, cursor, chunks[0].height as usize, scroll_requested);

            document_view::render_document_view(
                f,
                chunks[0],
                &lines,
                vim.state(),
                self.show_line_numbers,
                self.scroll_offset,
            );

            status_line::render_status_line(f, chunks[1], vim.state(), session);

            let message = match last_error {
                Some(err) => Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red)),
                None => Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
            };
            f.render_widget(message, chunks[2]);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::{BlockTree, Node};
    use ratatui::backend::TestBackend;

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area().width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }

    #[test]
    fn test_render_with_status_line() {
        let mut ui = UI::new(false);
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        let mut session = Session::at_start(BlockTree::new(vec![
            Node::paragraph("first"),
            Node::paragraph("second"),
        ]));
        let vim = Vim::with_defaults(&session);

        ui.render(&mut terminal, &vim, &mut session, None).unwrap();

        assert!(row_text(&terminal, 0).starts_with("first"));
        assert!(row_text(&terminal, 1).starts_with("second"));
        assert!(row_text(&terminal, 4).contains("NORMAL"));
        assert!(row_text(&terminal, 5).contains("Ctrl-q quit"));
    }

    #[test]
    fn test_error_replaces_hint() {
        let mut ui = UI::new(true);
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        let mut session = Session::at_start(BlockTree::default());
        let vim = Vim::with_defaults(&session);

        ui.render(&mut terminal, &vim, &mut session, Some("no text"))
            .unwrap();
        assert!(row_text(&terminal, 3).starts_with("no text"));
        assert!(row_text(&terminal, 0).starts_with("1 "));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut ui = UI::new(false);
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        let blocks = (0..10).map(|i| Node::paragraph(&format!("line {}", i))).collect();
        let mut session = Session::at_start(BlockTree::new(blocks));
        let mut vim = Vim::with_defaults(&session);

        session.focus(crate::editor::host::FocusTarget::End);
        vim.handle_key(&mut session, "k").unwrap();
        ui.render(&mut terminal, &vim, &mut session, None).unwrap();

        // Two document rows; the cursor sits on "line 8"
        assert_eq!(ui.scroll_offset(), 7);
        assert!(row_text(&terminal, 1).starts_with("line 8"));
    }
}
