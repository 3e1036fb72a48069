//! Store implementations backed by concurrent in-memory maps.
//!
//! Each store implements the matching repository trait from the core crate,
//! hiding the map layout from the rest of the application.

pub mod budget;
pub mod goal;
pub mod mailer;
pub mod transaction;
pub mod user;

pub use budget::MemoryBudgetStore;
pub use goal::MemoryGoalStore;
pub use mailer::{MemoryMailer, OutboundEmail};
pub use transaction::MemoryTransactionStore;
pub use user::MemoryUserStore;
