//! Budget error types.

use rust_decimal::Decimal;
use thiserror::Error;

use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Monthly limit must be strictly positive.
    #[error("Budget limit must be positive, got {0}")]
    NonPositiveLimit(Decimal),

    /// No budget exists for the user.
    #[error("No budget found for user: {0}")]
    NotFound(UserId),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
