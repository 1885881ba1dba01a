//! Flatwalk error types.

use thiserror::Error;

/// Errors that can occur while preparing a walk.
///
/// Walking itself never fails; only loading options can.
#[derive(Debug, Error)]
pub enum FlatwalkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlatwalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
