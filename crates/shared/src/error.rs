//! Store-level error types.
//!
//! These are the errors a repository implementation may surface to the
//! business-logic layer. Absence of data is never an error here; repositories
//! model it with `Option` or an empty `Vec`.

use thiserror::Error;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a repository implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Optimistic-lock version mismatch on update.
    ///
    /// Surfaced to the caller as a retryable conflict; the store never
    /// retries or overwrites silently.
    #[error("Version conflict: expected {expected}, found {found}")]
    Conflict {
        /// Version the caller read before updating.
        expected: i64,
        /// Version currently persisted.
        found: i64,
    },

    /// Backend failure (connectivity, corruption, serialization).
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns true if the error is a retryable version conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
