//! Transaction data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_shared::types::{TransactionId, UserId};

use super::error::TransactionError;

/// Transaction type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// A single income or expense record owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user ID.
    pub user_id: UserId,
    /// Monetary amount, always non-negative.
    pub amount: Decimal,
    /// Free-text category label.
    pub category: String,
    /// Calendar date (no time component).
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Income or expense.
    pub kind: TransactionType,
}

impl Transaction {
    /// Creates a new transaction with a generated ID.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError::NegativeAmount` if `amount` is negative.
    pub fn new(
        user_id: UserId,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        kind: TransactionType,
    ) -> Result<Self, TransactionError> {
        if amount.is_sign_negative() {
            return Err(TransactionError::NegativeAmount(amount));
        }

        Ok(Self {
            id: TransactionId::new(),
            user_id,
            amount,
            category: category.into(),
            date,
            description: description.into(),
            kind,
        })
    }

    /// Replaces the mutable fields of the transaction.
    ///
    /// Identity, owner, and type are fixed once created.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError::NegativeAmount` if `amount` is negative.
    pub fn update(
        &mut self,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<(), TransactionError> {
        if amount.is_sign_negative() {
            return Err(TransactionError::NegativeAmount(amount));
        }

        self.amount = amount;
        self.category = category.into();
        self.date = date;
        self.description = description.into();
        Ok(())
    }

    /// Returns true if this is an expense.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Filter for transaction queries.
///
/// All fields are optional; an empty filter matches everything for the user.
/// Date bounds are inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Earliest date to include.
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    pub to: Option<NaiveDate>,
    /// Exact (case-sensitive) category match.
    pub category: Option<String>,
    /// Transaction type to include.
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    /// Returns true if the transaction satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.from.is_some_and(|from| tx.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| tx.date > to) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| tx.category != category)
        {
            return false;
        }
        if self.kind.is_some_and(|kind| tx.kind != kind) {
            return false;
        }
        true
    }
}
