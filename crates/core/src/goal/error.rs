//! Goal error types.

use rust_decimal::Decimal;
use thiserror::Error;

use fintrack_shared::StoreError;
use fintrack_shared::types::GoalId;

/// Goal-related errors.
#[derive(Debug, Error)]
pub enum GoalError {
    /// Target amount must be strictly positive.
    #[error("Goal target amount must be positive, got {0}")]
    NonPositiveTarget(Decimal),

    /// Duration must be at least one month.
    #[error("Goal duration must be at least one month")]
    ZeroDuration,

    /// Goal name must not be empty.
    #[error("Goal name must not be empty")]
    EmptyName,

    /// Goal name already exists for this user.
    #[error("Goal name already exists for this user: {0}")]
    DuplicateName(String),

    /// Goal not found or not owned by the user.
    #[error("Goal not found: {0}")]
    NotFound(GoalId),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
