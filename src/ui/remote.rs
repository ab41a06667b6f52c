//! Shared shape for views backed by a remote fetch. Every screen that loads
//! data on activation holds one of these, so the loading/loaded/failed
//! progression and the store-error wording exist in exactly one place
//! instead of being repeated per screen.

use crate::store::{StoreError, StoreResult};

/// View state for data fetched from the record store.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteView<T> {
    /// The fetch has been issued but no result has been applied yet.
    Loading,
    /// The fetch succeeded and the screen can render the payload.
    Loaded(T),
    /// The fetch failed; the message is ready to show to the user.
    Failed(String),
}

impl<T> RemoteView<T> {
    /// Fold a store result into view state, converting errors into the
    /// user-facing message for the record being fetched.
    pub fn from_fetch(result: StoreResult<T>) -> Self {
        match result {
            Ok(value) => RemoteView::Loaded(value),
            Err(err) => RemoteView::Failed(failure_message(&err)),
        }
    }

    /// The payload, when the fetch has succeeded.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            RemoteView::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the payload, when the fetch has succeeded.
    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            RemoteView::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Message shown when a fetch or submit fails. Not-found is worded
/// separately so the user can tell a deleted record from a store outage.
pub(crate) fn failure_message(err: &StoreError) -> String {
    match err {
        StoreError::NotFound(_) => "Creator not found. It may have been deleted.".to_string(),
        StoreError::Unavailable(reason) => {
            format!("Failed to reach the creator store: {reason}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{failure_message, RemoteView};
    use crate::store::StoreError;

    #[test]
    fn successful_fetch_becomes_loaded() {
        let view = RemoteView::from_fetch(Ok(7));
        assert_eq!(view.loaded(), Some(&7));
    }

    #[test]
    fn not_found_is_distinguished_from_outage() {
        let missing = RemoteView::<i64>::from_fetch(Err(StoreError::NotFound(9)));
        let down = RemoteView::<i64>::from_fetch(Err(StoreError::Unavailable(
            "connection refused".to_string(),
        )));

        let RemoteView::Failed(missing_message) = missing else {
            panic!("expected failed view");
        };
        let RemoteView::Failed(down_message) = down else {
            panic!("expected failed view");
        };

        assert!(missing_message.contains("not found"));
        assert!(down_message.contains("connection refused"));
        assert_ne!(missing_message, down_message);
    }

    #[test]
    fn failure_message_mentions_the_reason() {
        let message = failure_message(&StoreError::Unavailable("HTTP 503".to_string()));
        assert!(message.contains("HTTP 503"));
    }
}
