//! Savings goals and progress calculation.

pub mod error;
pub mod progress;
pub mod service;
pub mod types;


pub use error::GoalError;
pub use progress::progress;
pub use service::{GoalRepository, GoalService, net_balance};
pub use types::{BalancePolicy, CreateGoalInput, Goal, UpdateGoalInput};
