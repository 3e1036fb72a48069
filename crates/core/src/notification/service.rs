//! Notification service composing budget/goal status messages.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use fintrack_shared::email::EmailSink;
use fintrack_shared::types::UserId;

use crate::budget::{BudgetError, BudgetRepository, BudgetService};
use crate::goal::{GoalRepository, GoalService, progress};
use crate::transaction::TransactionRepository;
use crate::user::UserRepository;

use super::error::NotificationError;

/// Message returned when the user has no budget.
pub const NO_BUDGET_MESSAGE: &str = "No budget set for user.";

/// Message returned when the user has no goals.
pub const NO_GOALS_MESSAGE: &str = "No goals set.";

const BUDGET_SUBJECT: &str = "Budget Notification";
const GOAL_SUBJECT: &str = "Goal Notification";

/// Notification service.
///
/// Composes human-readable status strings from the budget and goal engines
/// and dispatches them via the email sink. Dispatch is best-effort: a
/// missing user record, missing email, or SMTP failure is logged and
/// swallowed; the message is returned to the caller regardless.
pub struct NotificationService<B, G, T, U, M> {
    budgets: BudgetService<B, T>,
    goals: GoalService<G, T>,
    users: Arc<U>,
    mailer: Arc<M>,
}

impl<B, G, T, U, M> NotificationService<B, G, T, U, M>
where
    B: BudgetRepository,
    G: GoalRepository,
    T: TransactionRepository,
    U: UserRepository,
    M: EmailSink,
{
    /// Creates a new notification service.
    #[must_use]
    pub fn new(
        budgets: BudgetService<B, T>,
        goals: GoalService<G, T>,
        users: Arc<U>,
        mailer: Arc<M>,
    ) -> Self {
        Self {
            budgets,
            goals,
            users,
            mailer,
        }
    }

    /// Budget status for the current month, emailed when possible.
    ///
    /// Returns `"No budget set for user."` (and sends nothing) when the
    /// user has no budget.
    pub async fn budget_notification(&self, user_id: UserId) -> Result<String, NotificationError> {
        let data = match self.budgets.budget_data(user_id).await {
            Ok(data) => data,
            Err(BudgetError::NotFound(_)) => return Ok(NO_BUDGET_MESSAGE.to_string()),
            Err(e) => return Err(e.into()),
        };

        let message = if data.is_exceeded() {
            format!(
                "🚨 Budget exceeded! Limit: {}, Expenses: {}",
                data.budget.monthly_limit, data.expenses
            )
        } else {
            format!(
                "✅ Budget is under control. Remaining budget: {}",
                data.remaining
            )
        };

        self.dispatch(user_id, BUDGET_SUBJECT, &message).await;
        Ok(message)
    }

    /// One status line per goal, newline-joined, emailed when possible.
    ///
    /// Returns `"No goals set."` (and sends nothing) when the user has no
    /// goals.
    pub async fn goal_notification(&self, user_id: UserId) -> Result<String, NotificationError> {
        let goals = self.goals.list_goals(user_id).await?;
        if goals.is_empty() {
            return Ok(NO_GOALS_MESSAGE.to_string());
        }

        let mut lines = Vec::with_capacity(goals.len());
        for goal in &goals {
            let balance = self.goals.total_balance(user_id, goal).await?;
            let pct = progress(balance, goal.target_amount);

            if pct >= Decimal::ONE_HUNDRED {
                lines.push(format!(
                    "🎉 Goal achieved: '{}'! Target: {}, Balance: {}",
                    goal.name, goal.target_amount, balance
                ));
            } else {
                lines.push(format!("⏳ Goal '{}' progress: {:.2}%", goal.name, pct));
            }
        }

        let message = lines.join("\n").trim().to_string();
        self.dispatch(user_id, GOAL_SUBJECT, &message).await;
        Ok(message)
    }

    /// Best-effort email dispatch; failures are logged, never propagated.
    async fn dispatch(&self, user_id: UserId, subject: &str, body: &str) {
        let user = match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(%user_id, "user not found, skipping notification email");
                return;
            }
            Err(e) => {
                warn!(%user_id, error = %e, "user lookup failed, skipping notification email");
                return;
            }
        };

        if user.email.is_empty() {
            warn!(%user_id, "user has no email, skipping notification email");
            return;
        }

        if let Err(e) = self.mailer.send(&user.email, subject, body).await {
            warn!(%user_id, error = %e, "notification email dispatch failed");
        }
    }
}
