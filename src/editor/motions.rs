//! Cursor and view motions.
//!
//! Every motion is a no-op returning `Ok(false)` while the editor is in
//! Insert mode. Motions never touch the document; they only request a new
//! selection (or focus) from the host.

use super::dispatcher::Context;
use super::host::{EditorHost, FocusTarget};
use super::mode::Mode;
use super::transaction::Transaction;
use super::words;
use crate::document::{Document, NodeInfo, Selection, Visit};
use crate::error::VimError;
use serde::{Deserialize, Serialize};

/// Motions bindable to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Motion {
    MoveUp,
    MoveDown,
    MoveToRight,
    MoveToLeft,
    FocusStart,
    FocusEnd,
    WordJumpForward,
    WordJumpBackward,
}

impl Motion {
    pub fn name(&self) -> &'static str {
        match self {
            Motion::MoveUp => "moveUp",
            Motion::MoveDown => "moveDown",
            Motion::MoveToRight => "moveToRight",
            Motion::MoveToLeft => "moveToLeft",
            Motion::FocusStart => "focusStart",
            Motion::FocusEnd => "focusEnd",
            Motion::WordJumpForward => "wordJumpForward",
            Motion::WordJumpBackward => "wordJumpBackward",
        }
    }

    /// Runs the motion. Returns whether it was handled.
    pub fn run<H: EditorHost>(self, cx: &mut Context<'_, H>) -> Result<bool, VimError> {
        if cx.state.mode() == Mode::Insert {
            return Ok(false);
        }

        match self {
            Motion::MoveUp => move_up(cx),
            Motion::MoveDown => move_down(cx),
            Motion::MoveToRight => shift_selection(cx, 1),
            Motion::MoveToLeft => shift_selection(cx, -1),
            Motion::FocusStart => Ok(cx.focus(FocusTarget::Start)),
            Motion::FocusEnd => Ok(cx.focus(FocusTarget::End)),
            Motion::WordJumpForward => word_jump_forward(cx),
            Motion::WordJumpBackward => word_jump_backward(cx),
        }
    }
}

/// Shifts both ends of the selection by `delta`, clamped to the document.
fn shift_selection<H: EditorHost>(cx: &mut Context<'_, H>, delta: isize) -> Result<bool, VimError> {
    let size = cx.host.doc().size();
    let selection = cx.host.selection();
    let shift = |pos: usize| pos.saturating_add_signed(delta).min(size);

    let moved = Selection::new(shift(selection.from()), shift(selection.to()));
    cx.dispatch(Transaction::new().set_selection(moved));
    Ok(true)
}

/// Selects the nearest preceding block that has content.
fn move_up<H: EditorHost>(cx: &mut Context<'_, H>) -> Result<bool, VimError> {
    let doc = cx.host.doc();
    let block_start = doc.resolve(cx.host.selection().from())?.start();

    // Full scan; the last non-empty block seen wins.
    let mut previous = None;
    let _ = doc.nodes_between(0, block_start.saturating_sub(1), &mut |node| {
        if node.is_block && node.child_count > 0 {
            previous = Some(node.pos);
        }
        Visit::Descend
    });

    let Some(pos) = previous else {
        return Ok(false);
    };
    let target = (pos + 1).min(doc.size());
    cx.dispatch(
        Transaction::new()
            .set_selection(Selection::cursor(target))
            .scroll_into_view(),
    );
    Ok(true)
}

/// Selects the first block after the current one, empty or not.
fn move_down<H: EditorHost>(cx: &mut Context<'_, H>) -> Result<bool, VimError> {
    let doc = cx.host.doc();
    let size = doc.size();
    let block_end = doc.resolve(cx.host.selection().from())?.block_end();

    let mut next = None;
    let _ = doc.nodes_between(block_end, size, &mut |node| {
        if node.is_block {
            next = Some(node.pos);
            return Visit::Stop;
        }
        Visit::Descend
    });

    let Some(pos) = next else {
        return Ok(false);
    };
    cx.dispatch(
        Transaction::new()
            .set_selection(Selection::cursor((pos + 1).min(size)))
            .scroll_into_view(),
    );
    Ok(true)
}

/// First block, in document order, whose range contains `pos`.
fn block_at<D: Document>(doc: &D, pos: usize) -> Option<NodeInfo> {
    let mut found = None;
    let _ = doc.descendants(&mut |node| {
        if node.is_block && node.contains(pos) {
            found = Some(node.clone());
            return Visit::Stop;
        }
        Visit::Descend
    });
    found
}

/// The block and its text around a collapsed cursor, for word jumps.
fn word_context<H: EditorHost>(
    cx: &Context<'_, H>,
    motion: Motion,
) -> Result<Option<(NodeInfo, Vec<char>, usize)>, VimError> {
    let selection = cx.host.selection();
    if !selection.is_collapsed() {
        return Ok(None);
    }
    let from = selection.from();
    let block =
        block_at(cx.host.doc(), from).ok_or(VimError::NoBlockAtCursor { pos: from })?;
    let text: Vec<char> = block.text_content.chars().collect();
    if text.is_empty() {
        return Err(VimError::EmptyBlock {
            motion: motion.name(),
        });
    }
    let offset = from - block.pos;
    Ok(Some((block, text, offset)))
}

fn jump_to<H: EditorHost>(cx: &mut Context<'_, H>, pos: usize) {
    let target = pos.min(cx.host.doc().size());
    cx.dispatch(Transaction::new().set_selection(Selection::cursor(target)));
}

/// Jumps just past the next separator in the current block.
fn word_jump_forward<H: EditorHost>(cx: &mut Context<'_, H>) -> Result<bool, VimError> {
    let Some((block, text, offset)) = word_context(cx, Motion::WordJumpForward)? else {
        return Ok(false);
    };
    let Some(separator) = words::next_separator(&text, offset) else {
        return Ok(false);
    };
    jump_to(cx, block.pos + separator + 2);
    Ok(true)
}

/// Jumps to the start of the previous word in the current block.
fn word_jump_backward<H: EditorHost>(cx: &mut Context<'_, H>) -> Result<bool, VimError> {
    let Some((block, text, offset)) = word_context(cx, Motion::WordJumpBackward)? else {
        return Ok(false);
    };
    let Some(word_start) = words::previous_word_start(&text, offset as isize - 3) else {
        return Ok(false);
    };
    jump_to(cx, block.pos + word_start + 1);
    Ok(true)
}
