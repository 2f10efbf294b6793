//! vimirror: Vim-style modal navigation for block documents.
//!
//! The engine in [`editor`] sits on top of any host implementing
//! [`editor::host::EditorHost`]; [`session`] provides an in-memory one and the
//! binary wraps it in a terminal UI.

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod file;
pub mod input;
pub mod keymap;
pub mod session;
pub mod ui;
