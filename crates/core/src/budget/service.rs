//! Budget service for limit management and monthly expense aggregation.

use std::sync::Arc;

use rust_decimal::Decimal;

use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

use crate::transaction::{Transaction, TransactionFilter, TransactionRepository, TransactionType};

use super::error::BudgetError;
use super::types::{Budget, BudgetData, Month};

/// Repository trait for budget persistence.
///
/// A user has at most one budget; `upsert` replaces any existing row.
pub trait BudgetRepository: Send + Sync {
    /// Finds the user's budget, if any.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<Budget>, StoreError>> + Send;

    /// Inserts or replaces the budget keyed by its user ID.
    fn upsert(
        &self,
        budget: Budget,
    ) -> impl std::future::Future<Output = Result<Budget, StoreError>> + Send;
}

/// Budget service for business logic.
pub struct BudgetService<B, T> {
    budgets: Arc<B>,
    transactions: Arc<T>,
}

impl<B, T> BudgetService<B, T>
where
    B: BudgetRepository,
    T: TransactionRepository,
{
    /// Creates a new budget service.
    #[must_use]
    pub fn new(budgets: Arc<B>, transactions: Arc<T>) -> Self {
        Self {
            budgets,
            transactions,
        }
    }

    /// Sets the user's monthly spending limit.
    ///
    /// Creates a budget with a zero expense cache if none exists, otherwise
    /// replaces the limit in place (upsert, never a duplicate).
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NonPositiveLimit` if `limit <= 0`.
    pub async fn set_monthly_budget(
        &self,
        user_id: UserId,
        limit: Decimal,
    ) -> Result<Budget, BudgetError> {
        if limit <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveLimit(limit));
        }

        let budget = match self.budgets.find_by_user(user_id).await? {
            Some(mut existing) => {
                // Replace the limit; expenses are recomputed on demand.
                existing.monthly_limit = limit;
                existing
            }
            None => Budget::new(user_id, limit),
        };

        Ok(self.budgets.upsert(budget).await?)
    }

    /// Returns the user's budget, if any.
    pub async fn find_budget(&self, user_id: UserId) -> Result<Option<Budget>, BudgetError> {
        Ok(self.budgets.find_by_user(user_id).await?)
    }

    /// Sums the user's expenses within the given calendar month.
    ///
    /// Recomputed from transactions every time; returns zero for no matches.
    pub async fn expenses_for_month(
        &self,
        user_id: UserId,
        month: Month,
    ) -> Result<Decimal, BudgetError> {
        let filter = TransactionFilter {
            from: Some(month.first_day()),
            to: Some(month.last_day()),
            kind: Some(TransactionType::Expense),
            category: None,
        };

        let matches = self.transactions.find_filtered(user_id, &filter).await?;
        Ok(sum_expenses(&matches))
    }

    /// Returns the budget joined with the current month's recomputed
    /// expenses and the remaining amount (may be negative).
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` if the user has no budget.
    pub async fn budget_data(&self, user_id: UserId) -> Result<BudgetData, BudgetError> {
        self.budget_data_for_month(user_id, Month::current()).await
    }

    /// Same as [`Self::budget_data`] for an explicit month.
    pub async fn budget_data_for_month(
        &self,
        user_id: UserId,
        month: Month,
    ) -> Result<BudgetData, BudgetError> {
        let budget = self
            .budgets
            .find_by_user(user_id)
            .await?
            .ok_or(BudgetError::NotFound(user_id))?;

        let expenses = self.expenses_for_month(user_id, month).await?;
        let remaining = budget.monthly_limit - expenses;
        tracing::debug!(%user_id, %month, %expenses, %remaining, "computed budget data");

        Ok(BudgetData {
            budget,
            month,
            expenses,
            remaining,
        })
    }
}

/// Sums the expense amounts in a slice of transactions.
///
/// Income records are ignored even if the caller forgot to filter them.
/// Decimal addition is exact, so the total is independent of ordering.
#[must_use]
pub fn sum_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .map(|tx| tx.amount)
        .sum()
}
