//! Report generation service.

use std::sync::Arc;

use chrono::NaiveDate;

use fintrack_shared::types::UserId;

use crate::transaction::{Transaction, TransactionFilter, TransactionRepository};

use super::error::ReportError;
use super::types::{CategoryTotals, Report};

/// Service for generating financial reports.
pub struct ReportService<T> {
    transactions: Arc<T>,
}

impl<T> ReportService<T>
where
    T: TransactionRepository,
{
    /// Creates a new report service.
    #[must_use]
    pub fn new(transactions: Arc<T>) -> Self {
        Self { transactions }
    }

    /// All-time income/expense summary for the user.
    ///
    /// An empty transaction history yields an all-zero report.
    pub async fn user_report(&self, user_id: UserId) -> Result<Report, ReportError> {
        let transactions = self.transactions.find_by_user(user_id).await?;
        Ok(summarize(user_id, &transactions))
    }

    /// Summary restricted to `[from, to]`, inclusive on both ends.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidRange` if `from` is after `to`.
    pub async fn report_for_range(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Report, ReportError> {
        let transactions = self.find_in_range(user_id, from, to).await?;
        Ok(summarize(user_id, &transactions))
    }

    /// Per-category expense totals within `[from, to]`.
    ///
    /// Categories with no matching transactions are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidRange` if `from` is after `to`.
    pub async fn expenses_by_category(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CategoryTotals, ReportError> {
        let transactions = self.find_in_range(user_id, from, to).await?;
        Ok(by_category(&transactions))
    }

    async fn find_in_range(
        &self,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>, ReportError> {
        if from > to {
            return Err(ReportError::InvalidRange { from, to });
        }

        let filter = TransactionFilter {
            from: Some(from),
            to: Some(to),
            category: None,
            kind: None,
        };
        Ok(self.transactions.find_filtered(user_id, &filter).await?)
    }
}

/// Sums transactions by type into a report; balance stays derived.
#[must_use]
pub fn summarize(user_id: UserId, transactions: &[Transaction]) -> Report {
    let mut report = Report::empty(user_id);
    for tx in transactions {
        if tx.is_expense() {
            report.total_expense += tx.amount;
        } else {
            report.total_income += tx.amount;
        }
    }
    report
}

/// Groups expense amounts by their exact category label.
///
/// Income records are skipped; a category only appears when at least one
/// expense carries it.
#[must_use]
pub fn by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        *totals.entry(tx.category.clone()).or_default() += tx.amount;
    }
    totals
}
