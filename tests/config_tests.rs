use tempfile::TempDir;
use vimirror::config::Config;
use vimirror::document::tree::{BlockTree, Node};
use vimirror::document::Selection;
use vimirror::editor::actions::Action;
use vimirror::editor::dispatcher::Vim;
use vimirror::editor::host::EditorHost;
use vimirror::editor::mode::Mode;
use vimirror::editor::motions::Motion;
use vimirror::keymap::{Command, CommandKind, KeyBinding};
use vimirror::session::Session;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.cursor_class, "vim-cursor");
    assert!(config.show_line_numbers);
    assert!(config.keymap.is_empty());
}

#[test]
fn test_keymap_from_toml() {
    let toml_str = r#"
cursor_class = "block-cursor"

[[keymap]]
keys = "x"
type = "motion"
motion = "moveDown"

[[keymap]]
keys = "o"
type = "action"
action = "enterInsertMode"
mode = "normal"

[keymap.props]
cursorPosition = "blockEnd"
"#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.cursor_class, "block-cursor");
    assert_eq!(config.keymap.len(), 2);
    assert_eq!(
        config.keymap[0].command,
        Command::Motion {
            motion: Motion::MoveDown
        }
    );
    assert_eq!(config.keymap[1].mode, Some(Mode::Normal));
    assert_eq!(config.keymap[1].props["cursorPosition"], "blockEnd");
}

#[test]
fn test_configured_binding_drives_engine() {
    let config: Config = toml::from_str(
        r#"
[[keymap]]
keys = "x"
type = "motion"
motion = "moveDown"
"#,
    )
    .unwrap();

    let mut session = Session::new(
        BlockTree::new(vec![Node::paragraph("ab"), Node::paragraph("cd")]),
        Selection::cursor(2),
    );
    let mut vim = Vim::new(
        &session,
        config.compile_keymap(),
        &config.cursor_class,
        None,
    );

    assert!(vim.handle_key(&mut session, "x").unwrap());
    assert_eq!(session.selection(), Selection::cursor(5));
    // Defaults are still there
    assert!(vim.handle_key(&mut session, "k").unwrap());
    assert_eq!(session.selection(), Selection::cursor(1));
}

#[test]
fn test_later_binding_wins() {
    let config = Config {
        keymap: vec![
            KeyBinding::motion("j", Motion::MoveUp),
            KeyBinding::action("j", Action::Undo),
        ],
        ..Default::default()
    };
    let keymap = config.compile_keymap();

    assert_eq!(
        keymap.get("j").unwrap().command,
        Command::Action {
            action: Action::Undo
        }
    );
    // Overriding keeps the chord's first position
    assert_eq!(keymap.iter().position(|b| b.keys == "j"), Some(6));
}

#[test]
fn test_unsupported_kinds_are_unhandled() {
    let config: Config = toml::from_str(
        r#"
[[keymap]]
keys = "g"
type = "keyToKey"
toKeys = "gg"

[[keymap]]
keys = "/"
type = "search"
"#,
    )
    .unwrap();
    let keymap = config.compile_keymap();
    assert_eq!(keymap.get("g").unwrap().command.kind(), CommandKind::KeyToKey);

    let mut session = Session::at_start(BlockTree::new(vec![Node::paragraph("ab")]));
    let mut vim = Vim::new(&session, keymap, &config.cursor_class, None);
    assert!(!vim.handle_key(&mut session, "g").unwrap());
    assert!(!vim.handle_key(&mut session, "/").unwrap());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        cursor_class: "cc".to_string(),
        show_line_numbers: false,
        keymap: vec![KeyBinding::motion("n", Motion::WordJumpForward).in_mode(Mode::Normal)],
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "show_line_numbers = \"maybe\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        Config::load_from(&dir.path().join("absent.toml")),
        Config::default()
    );
}
