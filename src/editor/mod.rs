//! The modal editing engine.
//!
//! This module holds the core of vimirror: the mode state machine, the key
//! dispatcher, and the motion and action handlers it routes keys to. It
//! drives a host editor through the [`host::EditorHost`] contract and never
//! edits the document itself.
//!
//! # Modules
//!
//! - `mode`: Mode enumeration and external names
//! - `dispatcher`: Key routing and per-instance engine (`Vim`)
//! - `state`: Derived state (mode, cursor decoration, visibility)
//! - `motions` / `actions`: Command handlers
//! - `words`: Word separator classification
//!
//! # Example
//!
//! ```
//! use vimirror::editor::mode::Mode;
//!
//! // Editor starts in Normal mode
//! let mode = Mode::default();
//! assert_eq!(mode, Mode::Normal);
//! ```

pub mod actions;
pub mod cursor;
pub mod dispatcher;
pub mod host;
pub mod meta;
pub mod mode;
pub mod motions;
pub mod state;
pub mod transaction;
pub mod words;
