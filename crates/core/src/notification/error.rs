//! Notification error types.

use thiserror::Error;

use fintrack_shared::StoreError;

use crate::budget::BudgetError;
use crate::goal::GoalError;

/// Notification-related errors.
///
/// Message generation only fails when an underlying repository fails;
/// email dispatch is best-effort and never surfaces here.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Budget computation failure.
    #[error(transparent)]
    Budget(#[from] BudgetError),

    /// Goal computation failure.
    #[error(transparent)]
    Goal(#[from] GoalError),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
