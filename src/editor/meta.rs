//! Metadata tags carried by transactions.
//!
//! Two tags are recognized: a mode-change request and a cursor visibility
//! flag. Tag values are stored untyped so that a transaction produced by any
//! host can carry them; values outside the recognized set are ignored when
//! state is recomputed.

use super::mode::Mode;

/// Recognized metadata keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionMeta {
    ChangeModeTo,
    SetShowCursor,
}

impl TransactionMeta {
    pub fn key(&self) -> &'static str {
        match self {
            TransactionMeta::ChangeModeTo => "changeModeTo",
            TransactionMeta::SetShowCursor => "setShowCursor",
        }
    }
}

/// An untyped metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Str(String),
    Bool(bool),
}

impl MetaValue {
    /// Interprets the value as a mode name.
    pub fn as_mode(&self) -> Option<Mode> {
        match self {
            MetaValue::Str(name) => name.parse().ok(),
            MetaValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(value) => Some(*value),
            MetaValue::Str(_) => None,
        }
    }
}

impl From<Mode> for MetaValue {
    fn from(mode: Mode) -> Self {
        MetaValue::Str(mode.name().to_string())
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Str(value.to_string())
    }
}
