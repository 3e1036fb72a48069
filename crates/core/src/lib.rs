//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here; persistence and email delivery are reached through trait seams.
//!
//! # Modules
//!
//! - `transaction` - Income/expense records and the transaction store contract
//! - `budget` - Monthly budget limits and expense aggregation
//! - `goal` - Savings goals and progress calculation
//! - `report` - Income/expense/balance reporting and category analysis
//! - `notification` - Budget/goal status messages and email dispatch
//! - `user` - User identity as seen by the core (email lookup only)

pub mod budget;
pub mod goal;
pub mod notification;
pub mod report;
pub mod transaction;
pub mod user;

#[cfg(test)]
pub(crate) mod testutil;
