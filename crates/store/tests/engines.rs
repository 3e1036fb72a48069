//! Engine flows wired over the in-memory stores.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use fintrack_core::budget::{BudgetError, BudgetService, Month};
use fintrack_core::goal::{BalancePolicy, CreateGoalInput, GoalService, UpdateGoalInput};
use fintrack_core::report::{ReportError, ReportService};
use fintrack_core::transaction::{Transaction, TransactionType};
use fintrack_shared::types::UserId;
use fintrack_store::{MemoryBudgetStore, MemoryGoalStore, MemoryTransactionStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(
    store: &MemoryTransactionStore,
    user: UserId,
    amount: rust_decimal::Decimal,
    category: &str,
    day: NaiveDate,
) {
    store.insert(
        Transaction::new(user, amount, category, day, "", TransactionType::Expense).unwrap(),
    );
}

fn income(
    store: &MemoryTransactionStore,
    user: UserId,
    amount: rust_decimal::Decimal,
    day: NaiveDate,
) {
    store.insert(
        Transaction::new(user, amount, "Salary", day, "", TransactionType::Income).unwrap(),
    );
}

#[tokio::test]
async fn test_budget_flow_set_overspend_report() {
    let budgets = Arc::new(MemoryBudgetStore::new());
    let transactions = Arc::new(MemoryTransactionStore::new());
    let svc = BudgetService::new(Arc::clone(&budgets), Arc::clone(&transactions));
    let user = UserId::new();

    svc.set_monthly_budget(user, dec!(500)).await.unwrap();
    svc.set_monthly_budget(user, dec!(400)).await.unwrap();
    assert_eq!(budgets.len(), 1);

    expense(&transactions, user, dec!(250), "Rent", date(2026, 4, 1));
    expense(&transactions, user, dec!(200), "Groceries", date(2026, 4, 20));
    expense(&transactions, user, dec!(999), "Rent", date(2026, 5, 1));
    income(&transactions, user, dec!(5000), date(2026, 4, 2));

    let month = Month::new(2026, 4).unwrap();
    let data = svc.budget_data_for_month(user, month).await.unwrap();
    assert_eq!(data.expenses, dec!(450));
    assert_eq!(data.remaining, dec!(-50));
    assert!(data.is_exceeded());
}

#[tokio::test]
async fn test_budget_data_without_budget_is_not_found() {
    let svc = BudgetService::new(
        Arc::new(MemoryBudgetStore::new()),
        Arc::new(MemoryTransactionStore::new()),
    );
    let result = svc.budget_data(UserId::new()).await;
    assert!(matches!(result, Err(BudgetError::NotFound(_))));
}

#[tokio::test]
async fn test_goal_lifecycle_with_window_policy() {
    let goals = Arc::new(MemoryGoalStore::new());
    let transactions = Arc::new(MemoryTransactionStore::new());
    let svc = GoalService::new(
        Arc::clone(&goals),
        Arc::clone(&transactions),
        BalancePolicy::GoalWindow,
    );
    let user = UserId::new();

    let goal = svc
        .create_goal(
            user,
            CreateGoalInput {
                name: "Vacation".to_string(),
                target_amount: dec!(3000),
                duration_months: 6,
            },
        )
        .await
        .unwrap();

    // Inside the window (goal starts today).
    income(&transactions, user, dec!(1500), goal.start_date);
    // Outside the window.
    income(&transactions, user, dec!(9999), date(1999, 1, 1));

    let pct = svc.goal_progress(user, &goal).await.unwrap();
    assert_eq!(pct, dec!(50.00));

    let renamed = svc
        .update_goal(
            user,
            goal.id,
            UpdateGoalInput {
                name: "Trip".to_string(),
                target_amount: dec!(1500),
                duration_months: 6,
            },
        )
        .await
        .unwrap();
    assert!(renamed);

    let listed = svc.list_goals(user).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Trip");

    let reloaded = &listed[0];
    let pct = svc.goal_progress(user, reloaded).await.unwrap();
    assert_eq!(pct, dec!(100.00));

    assert!(svc.delete_goal(user, goal.id).await.unwrap());
    assert!(svc.list_goals(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_report_flow_totals_and_categories() {
    let transactions = Arc::new(MemoryTransactionStore::new());
    let svc = ReportService::new(Arc::clone(&transactions));
    let user = UserId::new();

    income(&transactions, user, dec!(5000), date(2026, 4, 1));
    expense(&transactions, user, dec!(1200), "Rent", date(2026, 4, 2));
    expense(&transactions, user, dec!(300.50), "Groceries", date(2026, 4, 10));
    expense(&transactions, user, dec!(99.50), "Groceries", date(2026, 4, 25));

    let report = svc.user_report(user).await.unwrap();
    assert_eq!(report.total_income, dec!(5000));
    assert_eq!(report.total_expense, dec!(1600.00));
    assert_eq!(report.balance(), dec!(3400.00));

    let totals = svc
        .expenses_by_category(user, date(2026, 4, 1), date(2026, 4, 30))
        .await
        .unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["Rent"], dec!(1200));
    assert_eq!(totals["Groceries"], dec!(400.00));
}

#[tokio::test]
async fn test_report_range_is_inclusive_and_validated() {
    let transactions = Arc::new(MemoryTransactionStore::new());
    let svc = ReportService::new(Arc::clone(&transactions));
    let user = UserId::new();

    expense(&transactions, user, dec!(10), "Misc", date(2026, 4, 1));
    expense(&transactions, user, dec!(20), "Misc", date(2026, 4, 30));
    expense(&transactions, user, dec!(40), "Misc", date(2026, 5, 1));

    let report = svc
        .report_for_range(user, date(2026, 4, 1), date(2026, 4, 30))
        .await
        .unwrap();
    assert_eq!(report.total_expense, dec!(30));

    let inverted = svc
        .report_for_range(user, date(2026, 4, 30), date(2026, 4, 1))
        .await;
    assert!(matches!(inverted, Err(ReportError::InvalidRange { .. })));
}

#[tokio::test]
async fn test_empty_user_yields_zero_report() {
    let svc = ReportService::new(Arc::new(MemoryTransactionStore::new()));
    let report = svc.user_report(UserId::new()).await.unwrap();
    assert_eq!(report.total_income, dec!(0));
    assert_eq!(report.total_expense, dec!(0));
    assert_eq!(report.balance(), dec!(0));
}
