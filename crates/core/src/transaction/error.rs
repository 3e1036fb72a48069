//! Transaction error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Transaction-related errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Amount must not be negative.
    #[error("Transaction amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}
