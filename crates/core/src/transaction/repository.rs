//! Transaction store contract.

use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

use super::types::{Transaction, TransactionFilter};

/// Repository trait for transaction persistence.
///
/// Implemented by the store crate; the core only reads transactions, it
/// never writes them (recording transactions belongs to the calling layer).
pub trait TransactionRepository: Send + Sync {
    /// Returns every transaction owned by the user.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Transaction>, StoreError>> + Send;

    /// Returns the user's transactions matching the filter.
    fn find_filtered(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Transaction>, StoreError>> + Send;
}
