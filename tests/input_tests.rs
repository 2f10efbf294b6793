use termion::event::{Event, Key};
use vimirror::document::tree::{BlockTree, Node};
use vimirror::document::Selection;
use vimirror::editor::dispatcher::Vim;
use vimirror::editor::host::EditorHost;
use vimirror::editor::mode::Mode;
use vimirror::file::loader::parse_text;
use vimirror::input::handler::{route_key, KeyOutcome};
use vimirror::input::keys::key_to_chord;
use vimirror::input::InputHandler;
use vimirror::session::Session;

fn setup(text: &str) -> (Vim, Session) {
    let session = Session::at_start(parse_text(text));
    let vim = Vim::with_defaults(&session);
    (vim, session)
}

fn type_keys(keys: &str, vim: &mut Vim, session: &mut Session) {
    for c in keys.chars() {
        route_key(Key::Char(c), vim, session);
    }
}

#[test]
fn test_chord_names() {
    assert_eq!(key_to_chord(Key::Char('j')).as_deref(), Some("j"));
    assert_eq!(key_to_chord(Key::Esc).as_deref(), Some("Escape"));
    assert_eq!(key_to_chord(Key::Ctrl('r')).as_deref(), Some("Ctrl-r"));
    assert_eq!(key_to_chord(Key::Char('\n')).as_deref(), Some("Enter"));
}

#[test]
fn test_normal_mode_swallows_characters() {
    let (mut vim, mut session) = setup("abc");

    type_keys("xyz", &mut vim, &mut session);
    assert_eq!(session.tree().get_node(&[0]).unwrap().text_content(), "abc");
    assert!(!session.is_dirty());
}

#[test]
fn test_insert_type_and_escape() {
    let (mut vim, mut session) = setup("world");

    type_keys("ihello ", &mut vim, &mut session);
    assert_eq!(vim.mode(), Mode::Insert);
    assert_eq!(
        session.tree().get_node(&[0]).unwrap().text_content(),
        "hello world"
    );
    assert_eq!(session.selection(), Selection::cursor(7));

    assert_eq!(
        route_key(Key::Esc, &mut vim, &mut session),
        KeyOutcome::Handled
    );
    assert_eq!(vim.mode(), Mode::Normal);
    assert_eq!(session.selection(), Selection::cursor(6));
}

#[test]
fn test_enter_splits_block_in_insert_mode() {
    let (mut vim, mut session) = setup("abcd");

    type_keys("ll", &mut vim, &mut session);
    assert_eq!(session.selection(), Selection::cursor(3));
    route_key(Key::Char('i'), &mut vim, &mut session);
    assert_eq!(
        route_key(Key::Char('\n'), &mut vim, &mut session),
        KeyOutcome::Edited
    );

    let blocks = session.tree().blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], Node::paragraph("ab"));
    assert_eq!(blocks[1], Node::paragraph("cd"));
    assert_eq!(vim.state().cursor().from(), session.selection().from());
}

#[test]
fn test_navigation_through_quote() {
    let (mut vim, mut session) = setup("top\n> quoted\nbottom");
    assert_eq!(session.selection(), Selection::cursor(1));

    route_key(Key::Char('j'), &mut vim, &mut session);
    // The blockquote itself is the next block
    assert_eq!(session.selection(), Selection::cursor(6));

    // From inside the quote the next block is the one after the quote
    route_key(Key::Char('j'), &mut vim, &mut session);
    assert_eq!(session.selection(), Selection::cursor(16));
}

#[test]
fn test_handler_quits_on_ctrl_q() {
    let mut handler = InputHandler::new();
    let (mut vim, mut session) = setup("abc");

    assert!(!handler
        .handle_event(Event::Key(Key::Char('l')), &mut vim, &mut session)
        .unwrap());
    assert!(handler
        .handle_event(Event::Key(Key::Ctrl('q')), &mut vim, &mut session)
        .unwrap());
}

#[test]
fn test_handler_reports_last_error() {
    let mut handler = InputHandler::new();
    let mut session = Session::at_start(BlockTree::new(vec![Node::paragraph("")]));
    let mut vim = Vim::with_defaults(&session);

    handler
        .handle_event(Event::Key(Key::Char('w')), &mut vim, &mut session)
        .unwrap();
    assert!(handler.last_error().is_some());

    handler
        .handle_event(Event::Key(Key::Char('l')), &mut vim, &mut session)
        .unwrap();
    assert!(handler.last_error().is_none());
}
