//! Value construction errors.

use thiserror::Error;

use crate::KeyKind;

/// Errors that can occur while building or mutating a value graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A key did not match the map's declared key kind.
    #[error("Key kind mismatch: map expects {expected} keys, got {found}")]
    KeyKindMismatch { expected: KeyKind, found: KeyKind },

    /// Attempted to write through a nil handle.
    #[error("Cannot write through a nil {0}")]
    NilHandle(&'static str),

    /// The handle is currently borrowed by a traversal or another writer.
    #[error("Handle is busy: {0}")]
    Busy(&'static str),
}
