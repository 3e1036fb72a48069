//! Report data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_shared::types::UserId;

/// Per-category expense totals, keyed by the category label as stored.
pub type CategoryTotals = BTreeMap<String, Decimal>;

/// A transient income/expense summary for one user.
///
/// Income and expense are summed independently, never netted before being
/// stored here; the balance is always derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Owning user ID.
    pub user_id: UserId,
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expense: Decimal,
}

impl Report {
    /// An all-zero report for a user with no matching transactions.
    #[must_use]
    pub const fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
        }
    }

    /// Income minus expense; derived, never independently settable.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}
