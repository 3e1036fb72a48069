//! In-memory fakes for service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack_shared::StoreError;
use fintrack_shared::email::{EmailError, EmailSink};
use fintrack_shared::types::{GoalId, UserId};

use crate::budget::{Budget, BudgetRepository};
use crate::goal::{Goal, GoalRepository};
use crate::transaction::{Transaction, TransactionFilter, TransactionRepository, TransactionType};
use crate::user::{User, UserRepository};

/// Budget store backed by a mutex-guarded map.
#[derive(Default)]
pub struct FakeBudgetRepo {
    rows: Mutex<HashMap<UserId, Budget>>,
}

impl FakeBudgetRepo {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl BudgetRepository for FakeBudgetRepo {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Budget>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert(&self, budget: Budget) -> Result<Budget, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert(budget.user_id, budget.clone());
        Ok(budget)
    }
}

/// Transaction store backed by a mutex-guarded vec.
#[derive(Default)]
pub struct FakeTransactionRepo {
    rows: Mutex<Vec<Transaction>>,
}

impl FakeTransactionRepo {
    pub fn seed(&self, tx: Transaction) {
        self.rows.lock().unwrap().push(tx);
    }

    pub fn seed_expense(&self, user_id: UserId, amount: Decimal, date: NaiveDate) {
        self.seed(
            Transaction::new(user_id, amount, "Misc", date, "", TransactionType::Expense).unwrap(),
        );
    }

    pub fn seed_income(&self, user_id: UserId, amount: Decimal, date: NaiveDate) {
        self.seed(
            Transaction::new(user_id, amount, "Salary", date, "", TransactionType::Income).unwrap(),
        );
    }
}

impl TransactionRepository for FakeTransactionRepo {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_filtered(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| tx.user_id == user_id && filter.matches(tx))
            .cloned()
            .collect())
    }
}

/// Goal store backed by a mutex-guarded map.
#[derive(Default)]
pub struct FakeGoalRepo {
    rows: Mutex<HashMap<GoalId, Goal>>,
}

impl GoalRepository for FakeGoalRepo {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Goal>, StoreError> {
        let mut goals: Vec<Goal> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(goals)
    }

    async fn find_by_id(&self, goal_id: GoalId) -> Result<Option<Goal>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&goal_id).cloned())
    }

    async fn insert(&self, goal: Goal) -> Result<Goal, StoreError> {
        self.rows.lock().unwrap().insert(goal.id, goal.clone());
        Ok(goal)
    }

    async fn update(&self, goal: &Goal) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&goal.id) {
            rows.insert(goal.id, goal.clone());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete(&self, goal_id: GoalId) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().remove(&goal_id).is_some())
    }
}

/// User store backed by a mutex-guarded map.
#[derive(Default)]
pub struct FakeUserRepo {
    rows: Mutex<HashMap<UserId, User>>,
}

impl FakeUserRepo {
    pub fn seed(&self, user: User) {
        self.rows.lock().unwrap().insert(user.id, user);
    }
}

impl UserRepository for FakeUserRepo {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&user_id).cloned())
    }
}

/// A sent email captured by `RecordingMailer`.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Email sink that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentEmail>>,
    fail: Mutex<bool>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Makes every subsequent send fail, for best-effort dispatch tests.
    pub fn fail_next_sends(&self) {
        *self.fail.lock().unwrap() = true;
    }
}

impl EmailSink for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        if *self.fail.lock().unwrap() {
            return Err(EmailError::SendError("forced failure".into()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
