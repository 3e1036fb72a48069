//! Income/expense/balance reporting and category analysis.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::{ReportService, by_category, summarize};
pub use types::{CategoryTotals, Report};
