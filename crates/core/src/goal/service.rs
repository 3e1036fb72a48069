//! Goal service for lifecycle management and balance aggregation.

use std::sync::Arc;

use rust_decimal::Decimal;

use fintrack_shared::StoreError;
use fintrack_shared::types::{GoalId, UserId};

use crate::transaction::{Transaction, TransactionFilter, TransactionRepository};

use super::error::GoalError;
use super::progress::progress;
use super::types::{BalancePolicy, CreateGoalInput, Goal, UpdateGoalInput};

/// Repository trait for goal persistence.
pub trait GoalRepository: Send + Sync {
    /// Returns every goal owned by the user.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Goal>, StoreError>> + Send;

    /// Finds a goal by ID.
    fn find_by_id(
        &self,
        goal_id: GoalId,
    ) -> impl std::future::Future<Output = Result<Option<Goal>, StoreError>> + Send;

    /// Inserts a new goal.
    fn insert(
        &self,
        goal: Goal,
    ) -> impl std::future::Future<Output = Result<Goal, StoreError>> + Send;

    /// Replaces an existing goal; returns false if it does not exist.
    fn update(
        &self,
        goal: &Goal,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Deletes a goal; returns false if it does not exist.
    fn delete(
        &self,
        goal_id: GoalId,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;
}

/// Goal service for business logic.
pub struct GoalService<G, T> {
    goals: Arc<G>,
    transactions: Arc<T>,
    policy: BalancePolicy,
}

impl<G, T> GoalService<G, T>
where
    G: GoalRepository,
    T: TransactionRepository,
{
    /// Creates a new goal service with the given balance policy.
    #[must_use]
    pub fn new(goals: Arc<G>, transactions: Arc<T>, policy: BalancePolicy) -> Self {
        Self {
            goals,
            transactions,
            policy,
        }
    }

    /// Creates a goal starting today.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive target, zero duration,
    /// or empty name, and `GoalError::DuplicateName` if the user already has
    /// a goal with that name.
    pub async fn create_goal(
        &self,
        user_id: UserId,
        input: CreateGoalInput,
    ) -> Result<Goal, GoalError> {
        Self::validate(&input.name, input.target_amount, input.duration_months)?;

        let existing = self.goals.find_by_user(user_id).await?;
        if existing.iter().any(|goal| goal.name == input.name) {
            return Err(GoalError::DuplicateName(input.name));
        }

        Ok(self.goals.insert(input.into_goal(user_id)).await?)
    }

    /// Replaces the mutable fields of a goal owned by the user.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NotFound` if no goal with `goal_id` belongs to
    /// `user_id`; validation errors as for [`Self::create_goal`].
    pub async fn update_goal(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        input: UpdateGoalInput,
    ) -> Result<bool, GoalError> {
        Self::validate(&input.name, input.target_amount, input.duration_months)?;

        let mut goal = self
            .goals
            .find_by_id(goal_id)
            .await?
            .filter(|goal| goal.user_id == user_id)
            .ok_or(GoalError::NotFound(goal_id))?;

        goal.name = input.name;
        goal.target_amount = input.target_amount;
        goal.duration_months = input.duration_months;

        Ok(self.goals.update(&goal).await?)
    }

    /// Deletes a goal if it exists and belongs to the user.
    ///
    /// Returns false (not an error) when nothing matched.
    pub async fn delete_goal(&self, user_id: UserId, goal_id: GoalId) -> Result<bool, GoalError> {
        let owned = self
            .goals
            .find_by_id(goal_id)
            .await?
            .is_some_and(|goal| goal.user_id == user_id);

        if !owned {
            return Ok(false);
        }

        Ok(self.goals.delete(goal_id).await?)
    }

    /// Returns every goal owned by the user.
    pub async fn list_goals(&self, user_id: UserId) -> Result<Vec<Goal>, GoalError> {
        Ok(self.goals.find_by_user(user_id).await?)
    }

    /// Net balance (income - expense) counted toward the goal.
    ///
    /// With `BalancePolicy::AllTime` the goal only contributes its owner;
    /// the whole transaction history is aggregated. `GoalWindow` restricts
    /// the aggregation to the goal's own date window.
    pub async fn total_balance(&self, user_id: UserId, goal: &Goal) -> Result<Decimal, GoalError> {
        let transactions = match self.policy {
            BalancePolicy::AllTime => self.transactions.find_by_user(user_id).await?,
            BalancePolicy::GoalWindow => {
                let filter = TransactionFilter {
                    from: Some(goal.start_date),
                    to: Some(goal.end_date()),
                    category: None,
                    kind: None,
                };
                self.transactions.find_filtered(user_id, &filter).await?
            }
        };

        Ok(net_balance(&transactions))
    }

    /// Progress percentage for one goal, clamped to `[0, 100]`.
    pub async fn goal_progress(&self, user_id: UserId, goal: &Goal) -> Result<Decimal, GoalError> {
        let balance = self.total_balance(user_id, goal).await?;
        Ok(progress(balance, goal.target_amount))
    }

    fn validate(name: &str, target_amount: Decimal, duration_months: u32) -> Result<(), GoalError> {
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }
        if target_amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveTarget(target_amount));
        }
        if duration_months == 0 {
            return Err(GoalError::ZeroDuration);
        }
        Ok(())
    }
}

/// Net balance of a slice of transactions: income minus expense.
///
/// Exact decimal arithmetic; order-independent.
#[must_use]
pub fn net_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |acc, tx| {
        if tx.is_expense() {
            acc - tx.amount
        } else {
            acc + tx.amount
        }
    })
}
