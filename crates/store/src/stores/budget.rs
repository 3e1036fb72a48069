//! Budget store for in-memory operations.

use dashmap::DashMap;

use fintrack_core::budget::{Budget, BudgetRepository};
use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

/// Budget store backed by a concurrent map keyed by user id.
///
/// The key choice enforces the one-budget-per-user rule: upserting a budget
/// for a user who already has one replaces the old row.
#[derive(Debug, Default)]
pub struct MemoryBudgetStore {
    rows: DashMap<UserId, Budget>,
}

impl MemoryBudgetStore {
    /// Creates an empty budget store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored budgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no budgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl BudgetRepository for MemoryBudgetStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Budget>, StoreError> {
        Ok(self.rows.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, budget: Budget) -> Result<Budget, StoreError> {
        self.rows.insert(budget.user_id, budget.clone());
        Ok(budget)
    }
}
