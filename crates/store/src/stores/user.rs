//! User store for in-memory operations.

use dashmap::DashMap;

use fintrack_core::user::{User, UserRepository};
use fintrack_shared::StoreError;
use fintrack_shared::types::UserId;

/// User store backed by a concurrent map keyed by user id.
///
/// Updates are optimistically locked on the `version` counter: an update
/// whose version does not match the stored row fails with
/// `StoreError::Conflict` and the caller decides whether to reload and
/// retry. The store never retries on its own.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    rows: DashMap<UserId, User>,
}

impl MemoryUserStore {
    /// Creates an empty user store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user keyed by its id.
    pub fn insert(&self, user: User) -> User {
        self.rows.insert(user.id, user.clone());
        user
    }

    /// Replaces a user row if `user.version` matches the stored version.
    ///
    /// On success the stored row carries `version + 1` and is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` when the versions differ, and
    /// `StoreError::Backend` when the user does not exist.
    pub fn update(&self, user: User) -> Result<User, StoreError> {
        let mut entry = self
            .rows
            .get_mut(&user.id)
            .ok_or_else(|| StoreError::Backend(format!("user {} not found", user.id)))?;

        if entry.version != user.version {
            tracing::debug!(
                user_id = %user.id,
                expected = user.version,
                found = entry.version,
                "stale user update rejected"
            );
            return Err(StoreError::Conflict {
                expected: user.version,
                found: entry.version,
            });
        }

        let mut next = user;
        next.version += 1;
        *entry = next.clone();
        Ok(next)
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl UserRepository for MemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.rows.get(&user_id).map(|entry| entry.value().clone()))
    }
}
