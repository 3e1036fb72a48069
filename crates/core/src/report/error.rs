//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use fintrack_shared::StoreError;

/// Report-related errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Date range where `from` is after `to`.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange {
        /// Requested start date.
        from: NaiveDate,
        /// Requested end date.
        to: NaiveDate,
    },

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
