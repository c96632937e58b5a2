use thiserror::Error;

use crate::id::SessionId;

/// Errors produced by session storage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(SessionId),

    #[error("session store at capacity ({0} sessions)")]
    AtCapacity(usize),

    #[error("session store lock poisoned")]
    LockPoisoned,
}

pub type SessionResult<T> = Result<T, SessionError>;
