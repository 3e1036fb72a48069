//! Goal store for in-memory operations.

use dashmap::DashMap;

use fintrack_core::goal::{Goal, GoalRepository};
use fintrack_shared::StoreError;
use fintrack_shared::types::{GoalId, UserId};

/// Goal store backed by a concurrent map keyed by goal id.
///
/// Listing a user's goals returns them sorted by name, then id, so the
/// notification report reads in a stable order.
#[derive(Debug, Default)]
pub struct MemoryGoalStore {
    rows: DashMap<GoalId, Goal>,
}

impl MemoryGoalStore {
    /// Creates an empty goal store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored goals, across all users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no goals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl GoalRepository for MemoryGoalStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Goal>, StoreError> {
        let mut goals: Vec<Goal> = self
            .rows
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        goals.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(goals)
    }

    async fn find_by_id(&self, goal_id: GoalId) -> Result<Option<Goal>, StoreError> {
        Ok(self.rows.get(&goal_id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, goal: Goal) -> Result<Goal, StoreError> {
        self.rows.insert(goal.id, goal.clone());
        Ok(goal)
    }

    async fn update(&self, goal: &Goal) -> Result<bool, StoreError> {
        match self.rows.get_mut(&goal.id) {
            Some(mut entry) => {
                *entry = goal.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, goal_id: GoalId) -> Result<bool, StoreError> {
        Ok(self.rows.remove(&goal_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn goal(user: UserId, name: &str) -> Goal {
        Goal {
            id: GoalId::new(),
            user_id: user,
            name: name.to_string(),
            target_amount: dec!(1000),
            duration_months: 6,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_find_by_user_sorts_by_name() {
        let store = MemoryGoalStore::new();
        let user = UserId::new();

        store.insert(goal(user, "Vacation")).await.unwrap();
        store.insert(goal(user, "Car")).await.unwrap();
        store.insert(goal(UserId::new(), "Boat")).await.unwrap();

        let goals = store.find_by_user(user).await.unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].name, "Car");
        assert_eq!(goals[1].name, "Vacation");
    }

    #[tokio::test]
    async fn test_update_missing_goal_is_false() {
        let store = MemoryGoalStore::new();
        let orphan = goal(UserId::new(), "Orphan");
        assert!(!store.update(&orphan).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = MemoryGoalStore::new();
        let user = UserId::new();
        let mut stored = store.insert(goal(user, "Car")).await.unwrap();

        stored.target_amount = dec!(2500);
        assert!(store.update(&stored).await.unwrap());

        let found = store.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(found.target_amount, dec!(2500));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_false_after_removal() {
        let store = MemoryGoalStore::new();
        let stored = store.insert(goal(UserId::new(), "Car")).await.unwrap();

        assert!(store.delete(stored.id).await.unwrap());
        assert!(!store.delete(stored.id).await.unwrap());
        assert!(store.is_empty());
    }
}
