/// Errors from world-state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Keys must be non-empty strings.
    #[error("world-state key must be non-empty")]
    EmptyKey,

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the hosting ledger platform.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for world-state operations.
pub type StateResult<T> = Result<T, StateError>;
