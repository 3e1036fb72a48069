//! Income and expense transaction records.

pub mod error;
pub mod repository;
pub mod types;

pub use error::TransactionError;
pub use repository::TransactionRepository;
pub use types::{Transaction, TransactionFilter, TransactionType};
