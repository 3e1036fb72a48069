//! User store contract.

use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

use super::types::User;

/// Repository trait for user lookup.
///
/// The core only needs `find_by_id` (email resolution for notifications).
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    fn find_by_id(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, StoreError>> + Send;
}
