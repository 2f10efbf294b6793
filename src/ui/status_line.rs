//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, INSERT, ...)
//! - Filename (or "[No Name]" if unsaved)
//! - Dirty indicator "[+]" for unsaved changes
//! - The editable surface's presentation attributes
//! - Cursor offset and document size
//!
//! Example status line: `NORMAL | notes.txt [+] vim-active mode=normal     7/42`

use crate::document::Document;
use crate::editor::host::EditorHost;
use crate::editor::state::VimState;
use crate::session::Session;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Formats the presentation attributes, e.g. `vim-active mode=normal`.
fn attribute_text(state: &VimState) -> String {
    state
        .attributes()
        .iter()
        .filter_map(|(key, value)| match value.as_str() {
            "true" => Some(key.to_string()),
            "false" => None,
            _ => Some(format!("{}={}", key, value)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the status line showing mode, filename, and dirty indicator.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &VimState, session: &Session) {
    let mode_and_file = format!(
        "{} | {}",
        state.mode(),
        session.filename().unwrap_or("[No Name]")
    );
    let dirty_indicator = if session.is_dirty() { " [+]" } else { "" };
    let attributes = format!(" {}", attribute_text(state));

    let selection = session.selection();
    let position = if selection.is_collapsed() {
        format!("{}/{}", selection.from(), session.doc().size())
    } else {
        format!(
            "{}-{}/{}",
            selection.from(),
            selection.to(),
            session.doc().size()
        )
    };

    let total_width = area.width as usize;
    let left_len = mode_and_file.chars().count()
        + dirty_indicator.len()
        + attributes.chars().count();
    let padding = if left_len + position.len() + 1 < total_width {
        total_width - left_len - position.len()
    } else {
        1
    };

    let default_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let attribute_style = default_style.add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(mode_and_file, default_style.add_modifier(Modifier::BOLD)),
        Span::styled(dirty_indicator, default_style),
        Span::styled(attributes, attribute_style),
        Span::styled(" ".repeat(padding), default_style),
        Span::styled(position, default_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::{BlockTree, Node};
    use crate::editor::dispatcher::Vim;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(vim: &Vim, session: &Session) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_status_line(f, f.area(), vim.state(), session))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn setup() -> (Vim, Session) {
        let session = Session::at_start(BlockTree::new(vec![Node::paragraph("abc")]));
        let vim = Vim::with_defaults(&session);
        (vim, session)
    }

    #[test]
    fn test_status_line_no_filename() {
        let (vim, session) = setup();
        let text = render(&vim, &session);
        assert!(
            text.contains("[No Name]"),
            "Status line should show [No Name]: {}",
            text
        );
        assert!(!text.contains("[+]"), "Clean session: {}", text);
    }

    #[test]
    fn test_status_line_mode_and_attributes() {
        let (vim, session) = setup();
        let text = render(&vim, &session);
        assert!(text.starts_with("NORMAL"), "Should show NORMAL mode: {}", text);
        assert!(text.contains("vim-active mode=normal"), "{}", text);
        assert!(text.trim_end().ends_with("1/5"), "{}", text);
    }

    #[test]
    fn test_status_line_dirty_insert() {
        let (mut vim, mut session) = setup();
        session.set_filename("notes.txt".to_string());
        vim.handle_key(&mut session, "i").unwrap();
        let tr = session.type_char('x').unwrap();
        vim.apply_transaction(&tr, session.selection());

        let text = render(&vim, &session);
        assert!(text.contains("INSERT | notes.txt [+]"), "{}", text);
        assert!(text.contains("mode=insert"), "{}", text);
    }
}
