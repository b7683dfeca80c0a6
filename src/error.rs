//! Error taxonomy for command handling

use thiserror::Error;

/// Errors a command handler can report back to the prompt.
///
/// None of these are fatal: the loop prints the message (plus a usage hint
/// for `Usage`) and returns to the prompt without mutating state.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A supplied field failed validation (out of range, wrong type).
    #[error("{0}")]
    Validation(String),

    /// The command line itself was malformed.
    #[error("{0}")]
    Usage(String),

    /// A referenced entry id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Persistence or export failed. Save failures surface here and are
    /// reported; the in-memory document stays authoritative.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be encoded for writing.
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CommandError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CommandError::Validation(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        CommandError::Usage(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CommandError::NotFound(msg.into())
    }
}
