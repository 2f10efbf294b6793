use vimirror::document::tree::{BlockTree, Node};
use vimirror::document::Selection;
use vimirror::editor::actions::Action;
use vimirror::editor::dispatcher::{Vim, DEFAULT_CURSOR_CLASS};
use vimirror::editor::host::{EditorHost, FocusTarget};
use vimirror::editor::meta::TransactionMeta;
use vimirror::editor::mode::Mode;
use vimirror::editor::transaction::Transaction;
use vimirror::keymap::{default_keymap, KeyBinding, Keymap};
use vimirror::session::Session;

fn setup(blocks: Vec<Node>, cursor: usize) -> (Vim, Session) {
    let session = Session::new(BlockTree::new(blocks), Selection::cursor(cursor));
    let vim = Vim::with_defaults(&session);
    (vim, session)
}

/// Host that counts history calls and forwards everything else.
struct CountingHost {
    inner: Session,
    undos: usize,
    redos: usize,
}

impl EditorHost for CountingHost {
    type Doc = BlockTree;

    fn doc(&self) -> &BlockTree {
        self.inner.doc()
    }

    fn selection(&self) -> Selection {
        self.inner.selection()
    }

    fn commit(&mut self, tr: &Transaction) {
        self.inner.commit(tr)
    }

    fn focus(&mut self, target: FocusTarget) -> bool {
        self.inner.focus(target)
    }

    fn undo(&mut self) -> bool {
        self.undos += 1;
        self.inner.undo()
    }

    fn redo(&mut self) -> bool {
        self.redos += 1;
        self.inner.redo()
    }
}

#[test]
fn test_insert_after_current_shifts_selection() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("hello world")], 5);

    assert!(vim.handle_key(&mut session, "a").unwrap());
    assert_eq!(vim.mode(), Mode::Insert);
    assert_eq!(session.selection(), Selection::cursor(6));
    assert_eq!(vim.state().cursor().range(), 6..7);
}

#[test]
fn test_insert_before_current_keeps_selection() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("hello")], 3);

    assert!(vim.handle_key(&mut session, "i").unwrap());
    assert_eq!(vim.mode(), Mode::Insert);
    assert_eq!(session.selection(), Selection::cursor(3));
}

#[test]
fn test_block_start_then_escape_steps_back() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("ab"), Node::paragraph("cd")], 6);

    assert!(vim.handle_key(&mut session, "I").unwrap());
    assert_eq!(session.selection(), Selection::cursor(5));

    // Another participant shows the cursor while inserting
    let tr = Transaction::new().set_meta(TransactionMeta::SetShowCursor, true);
    session.commit(&tr);
    vim.apply_transaction(&tr, session.selection());
    assert!(vim.state().show_cursor());

    assert!(vim.handle_key(&mut session, "Escape").unwrap());
    assert_eq!(vim.mode(), Mode::Normal);
    assert_eq!(session.selection(), Selection::cursor(4));
    assert!(!vim.state().show_cursor());
}

#[test]
fn test_block_end_lands_after_last_char() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("ab"), Node::paragraph("cd")], 5);

    assert!(vim.handle_key(&mut session, "A").unwrap());
    assert_eq!(session.selection(), Selection::cursor(7));
}

#[test]
fn test_escape_never_moves_before_first_offset() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("ab")], 1);

    vim.handle_key(&mut session, "i").unwrap();
    vim.handle_key(&mut session, "Escape").unwrap();
    assert_eq!(session.selection(), Selection::cursor(1));
}

#[test]
fn test_escape_clamps_range_ends_separately() {
    let mut session = Session::new(
        BlockTree::new(vec![Node::paragraph("abcdef")]),
        Selection::new(1, 5),
    );
    let mut vim = Vim::with_defaults(&session);

    vim.handle_key(&mut session, "i").unwrap();
    assert_eq!(session.selection(), Selection::new(1, 5));

    vim.handle_key(&mut session, "Escape").unwrap();
    // The start stays on the first offset while the end steps back
    assert_eq!(session.selection(), Selection::new(1, 4));
    assert_eq!(vim.state().cursor().range(), 1..5);
}

#[test]
fn test_escape_in_normal_mode_keeps_selection() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("abc")], 3);

    assert!(vim.handle_key(&mut session, "Escape").unwrap());
    assert_eq!(vim.mode(), Mode::Normal);
    assert_eq!(session.selection(), Selection::cursor(3));
}

#[test]
fn test_insert_keys_are_mode_guarded() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("abc")], 2);

    vim.handle_key(&mut session, "a").unwrap();
    assert_eq!(session.selection(), Selection::cursor(3));

    // Already inserting: "a" is left to the host as a plain character
    assert!(!vim.handle_key(&mut session, "a").unwrap());
    assert_eq!(session.selection(), Selection::cursor(3));
}

#[test]
fn test_undo_and_redo_in_normal_mode() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("")], 1);

    vim.handle_key(&mut session, "i").unwrap();
    let tr = session.type_char('x').unwrap();
    vim.apply_transaction(&tr, session.selection());
    vim.handle_key(&mut session, "Escape").unwrap();

    assert!(vim.handle_key(&mut session, "u").unwrap());
    assert_eq!(session.tree().get_node(&[0]).unwrap().text_content(), "");
    assert_eq!(vim.state().cursor().range(), 1..2);

    assert!(vim.handle_key(&mut session, "Ctrl-r").unwrap());
    assert_eq!(session.tree().get_node(&[0]).unwrap().text_content(), "x");
}

#[test]
fn test_undo_without_history_is_unhandled() {
    let (mut vim, mut session) = setup(vec![Node::paragraph("ab")], 1);
    assert!(!vim.handle_key(&mut session, "u").unwrap());
}

#[test]
fn test_history_is_untouched_in_insert_mode() {
    let session = Session::new(
        BlockTree::new(vec![Node::paragraph("ab")]),
        Selection::cursor(1),
    );
    let mut host = CountingHost {
        inner: session,
        undos: 0,
        redos: 0,
    };
    // Undo bound without a mode guard, so only the action itself can refuse
    let keymap = Keymap::compile(
        default_keymap()
            .into_iter()
            .chain([KeyBinding::action("u", Action::Undo)]),
    );
    let mut vim = Vim::new(&host, keymap, DEFAULT_CURSOR_CLASS, None);

    vim.handle_key(&mut host, "i").unwrap();
    assert!(!vim.handle_key(&mut host, "u").unwrap());
    assert!(!vim.handle_key(&mut host, "Ctrl-r").unwrap());
    assert_eq!(host.undos, 0);
    assert_eq!(host.redos, 0);

    vim.handle_key(&mut host, "Escape").unwrap();
    vim.handle_key(&mut host, "u").unwrap();
    assert_eq!(host.undos, 1);
}
