use thiserror::Error;

/// Shorthand for store-call results used across the client implementations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure taxonomy for the record store. Screens convert these into
/// user-visible messages at the boundary; nothing propagates further.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Zero rows matched the requested id.
    #[error("no creator matches id {0}")]
    NotFound(i64),
    /// Transport or server failure while talking to the hosted table.
    #[error("creator store is unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this failure means the record does not exist, as opposed to
    /// the store being unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
