//! Transaction store for in-memory operations.

use dashmap::DashMap;

use fintrack_core::transaction::{Transaction, TransactionFilter, TransactionRepository};
use fintrack_shared::StoreError;
use fintrack_shared::types::{TransactionId, UserId};

/// Transaction store backed by a concurrent map.
///
/// Query results are sorted by date, then id, so output is deterministic
/// regardless of insertion or map iteration order.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    rows: DashMap<TransactionId, Transaction>,
}

impl MemoryTransactionStore {
    /// Creates an empty transaction store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a transaction keyed by its id.
    pub fn insert(&self, transaction: Transaction) -> Transaction {
        self.rows.insert(transaction.id, transaction.clone());
        transaction
    }

    /// Removes a transaction; returns the removed record, if any.
    pub fn remove(&self, transaction_id: TransactionId) -> Option<Transaction> {
        self.rows.remove(&transaction_id).map(|(_, tx)| tx)
    }

    /// Number of stored transactions, across all users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn collect_sorted<F>(&self, predicate: F) -> Vec<Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        let mut matches: Vec<Transaction> = self
            .rows
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        matches
    }
}

impl TransactionRepository for MemoryTransactionStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.collect_sorted(|tx| tx.user_id == user_id))
    }

    async fn find_filtered(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.collect_sorted(|tx| tx.user_id == user_id && filter.matches(tx)))
    }
}
