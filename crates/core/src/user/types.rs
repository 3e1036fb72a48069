//! User data types.

use serde::{Deserialize, Serialize};

use fintrack_shared::types::UserId;

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular account.
    User,
    /// Administrator, may manage other users.
    Admin,
}

/// A user record.
///
/// The password hash is opaque to the core; hashing and verification happen
/// in the (external) auth layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across users.
    pub email: String,
    /// Opaque password hash.
    pub password_hash: String,
    /// Whether the account is blocked.
    pub blocked: bool,
    /// Role.
    pub role: Role,
    /// Optimistic-lock version counter, incremented by the store on update.
    pub version: i64,
}

impl User {
    /// Creates a new unblocked user with version 0.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            blocked: false,
            role,
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_version_zero() {
        let user = User::new("Alice", "alice@example.com", "$argon2$...", Role::User);
        assert_eq!(user.version, 0);
        assert!(!user.blocked);
        assert_eq!(user.role, Role::User);
    }
}
