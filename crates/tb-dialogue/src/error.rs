//! Dialogue and conversation-store error types.
//!
//! User-facing problems (ambiguous turbine, missing slot, telemetry down)
//! are replies, not errors. Only infrastructure failures end up here.

use thiserror::Error;

/// Errors raised by a `ConversationStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored state is corrupt: {0}")]
    Corrupt(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that abort a turn.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("conversation store: {0}")]
    Store(#[from] StoreError),
}

/// Convenience alias for dialogue results.
pub type DialogueResult<T> = Result<T, DialogueError>;
