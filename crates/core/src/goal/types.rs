//! Goal data types.

use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_shared::types::{GoalId, UserId};

/// A per-user savings target.
///
/// Progress toward the target is derived from transactions, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID.
    pub id: GoalId,
    /// Owning user ID.
    pub user_id: UserId,
    /// Goal name, unique per user.
    pub name: String,
    /// Target amount, strictly positive.
    pub target_amount: Decimal,
    /// Duration in months, at least one.
    pub duration_months: u32,
    /// Start date; defaults to the creation day.
    pub start_date: NaiveDate,
}

impl Goal {
    /// Last day of the goal's window, inclusive.
    ///
    /// The window covers `duration_months` whole months from `start_date`.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_months(Months::new(self.duration_months))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

/// How a goal's balance is aggregated from transactions.
///
/// The observed product behavior treats balance toward a goal as the user's
/// overall net savings pool, not a goal-scoped ledger. That policy is kept
/// as the default and made explicit so callers can opt into window scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancePolicy {
    /// Net balance over the user's entire transaction history.
    #[default]
    AllTime,
    /// Net balance over `[start_date, end_date]` of the specific goal.
    GoalWindow,
}

/// Input for creating a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    /// Goal name, unique per user.
    pub name: String,
    /// Target amount, strictly positive.
    pub target_amount: Decimal,
    /// Duration in months, at least one.
    pub duration_months: u32,
}

impl CreateGoalInput {
    /// Builds the goal entity with a generated ID and today's start date.
    #[must_use]
    pub(crate) fn into_goal(self, user_id: UserId) -> Goal {
        Goal {
            id: GoalId::new(),
            user_id,
            name: self.name,
            target_amount: self.target_amount,
            duration_months: self.duration_months,
            start_date: Utc::now().date_naive(),
        }
    }
}

/// Input for updating a goal's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateGoalInput {
    /// New name.
    pub name: String,
    /// New target amount, strictly positive.
    pub target_amount: Decimal,
    /// New duration in months, at least one.
    pub duration_months: u32,
}
