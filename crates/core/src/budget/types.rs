//! Budget data types.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_shared::types::UserId;

/// A per-user monthly spending ceiling.
///
/// Each user has at most one budget; setting a new limit replaces the old
/// one. `current_expenses` is a display cache only - the authoritative
/// expense total is always recomputed from transactions at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Owning user ID (one budget per user).
    pub user_id: UserId,
    /// Monthly spending limit, strictly positive.
    pub monthly_limit: Decimal,
    /// Cached expense total for display; never trusted by the engines.
    pub current_expenses: Decimal,
}

impl Budget {
    /// Creates a fresh budget with a zero expense cache.
    #[must_use]
    pub const fn new(user_id: UserId, monthly_limit: Decimal) -> Self {
        Self {
            user_id,
            monthly_limit,
            current_expenses: Decimal::ZERO,
        }
    }
}

/// A calendar month (year + month number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month; `month` must be in `1..=12`.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month (UTC).
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Utc::now().date_naive())
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    ///
    /// Years outside chrono's supported range clamp to `NaiveDate::MIN`.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };

        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if the date falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A budget joined with the recomputed expense total for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetData {
    /// The stored budget.
    pub budget: Budget,
    /// Month the expenses were aggregated over.
    pub month: Month,
    /// Expense total recomputed from transactions.
    pub expenses: Decimal,
    /// `monthly_limit - expenses`; negative when the budget is exceeded.
    pub remaining: Decimal,
}

impl BudgetData {
    /// Returns true if expenses exceed the monthly limit.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}
