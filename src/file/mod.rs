//! File I/O for documents.
//!
//! This module loads plain text from disk or stdin into a `BlockTree`.

pub mod loader;
