//! Budget/goal status messages and email dispatch.

pub mod error;
pub mod service;


pub use error::NotificationError;
pub use service::{NO_BUDGET_MESSAGE, NO_GOALS_MESSAGE, NotificationService};
