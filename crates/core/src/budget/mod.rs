//! Monthly budget limits and expense aggregation.

pub mod error;
pub mod service;
pub mod types;


pub use error::BudgetError;
pub use service::{BudgetRepository, BudgetService, sum_expenses};
pub use types::{Budget, BudgetData, Month};
