//! Mode transitions and history commands.

use super::dispatcher::Context;
use super::host::EditorHost;
use super::meta::TransactionMeta;
use super::mode::Mode;
use super::transaction::Transaction;
use crate::document::{Document, Selection};
use crate::error::VimError;
use crate::keymap::Props;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Actions bindable to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    EnterInsertMode,
    EnterNormalMode,
    Undo,
    Redo,
}

/// Where `EnterInsertMode` places the cursor before switching modes.
///
/// Carried in a binding's props as a plain string, e.g. `"afterCurrent"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    BeforeCurrent,
    AfterCurrent,
    BlockStart,
    BlockEnd,
}

impl CursorPosition {
    /// The props key holding a cursor position.
    pub const PROP: &'static str = "cursorPosition";

    pub const ALL: [CursorPosition; 4] = [
        CursorPosition::BeforeCurrent,
        CursorPosition::AfterCurrent,
        CursorPosition::BlockStart,
        CursorPosition::BlockEnd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CursorPosition::BeforeCurrent => "beforeCurrent",
            CursorPosition::AfterCurrent => "afterCurrent",
            CursorPosition::BlockStart => "blockStart",
            CursorPosition::BlockEnd => "blockEnd",
        }
    }
}

impl FromStr for CursorPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CursorPosition::ALL
            .into_iter()
            .find(|position| position.name() == s)
            .ok_or_else(|| format!("Unknown cursor position '{}'", s))
    }
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::EnterInsertMode => "enterInsertMode",
            Action::EnterNormalMode => "enterNormalMode",
            Action::Undo => "undo",
            Action::Redo => "redo",
        }
    }

    /// Runs the action with the binding's props. Returns whether it was handled.
    pub fn run<H: EditorHost>(
        self,
        cx: &mut Context<'_, H>,
        props: &Props,
    ) -> Result<bool, VimError> {
        match self {
            Action::EnterInsertMode => enter_insert_mode(cx, props),
            Action::EnterNormalMode => Ok(enter_normal_mode(cx)),
            Action::Undo => Ok(cx.state.mode() != Mode::Insert && cx.undo()),
            Action::Redo => Ok(cx.state.mode() != Mode::Insert && cx.redo()),
        }
    }
}

fn enter_insert_mode<H: EditorHost>(
    cx: &mut Context<'_, H>,
    props: &Props,
) -> Result<bool, VimError> {
    let position = props.get(CursorPosition::PROP).and_then(|value| {
        value
            .parse::<CursorPosition>()
            .map_err(|err| log::warn!("{}", err))
            .ok()
    });

    let doc = cx.host.doc();
    let size = doc.size();
    let selection = cx.host.selection();
    let reposition = match position {
        None | Some(CursorPosition::BeforeCurrent) => None,
        Some(CursorPosition::AfterCurrent) => Some(Selection::new(
            (selection.from() + 1).min(size),
            (selection.to() + 1).min(size),
        )),
        Some(CursorPosition::BlockStart) => {
            let start = doc.resolve(selection.from())?.start();
            Some(Selection::cursor(start))
        }
        Some(CursorPosition::BlockEnd) => {
            let end = doc.resolve(selection.from())?.block_end().saturating_sub(2);
            Some(Selection::cursor(end.min(size)))
        }
    };

    let mut tr = Transaction::new();
    if let Some(selection) = reposition {
        tr = tr.set_selection(selection);
    }
    cx.dispatch(tr.set_meta(TransactionMeta::ChangeModeTo, Mode::Insert));
    Ok(true)
}

fn enter_normal_mode<H: EditorHost>(cx: &mut Context<'_, H>) -> bool {
    let leaving = cx.state.mode();
    let mut tr = Transaction::new()
        .set_meta(TransactionMeta::ChangeModeTo, Mode::Normal)
        .set_meta(TransactionMeta::SetShowCursor, false);

    // Typing leaves the cursor one past the last character.
    if leaving == Mode::Insert {
        let size = cx.host.doc().size();
        let selection = cx.host.selection();
        let back = |pos: usize| pos.saturating_sub(1).max(1).min(size);
        tr = tr.set_selection(Selection::new(back(selection.from()), back(selection.to())));
    }

    cx.dispatch(tr);
    true
}
