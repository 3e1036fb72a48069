//! In-memory store implementations of the core repository traits.
//!
//! This crate provides:
//! - Concurrent map-backed stores for transactions, budgets, goals and users
//! - A recording email sink for assertions and offline runs
//!
//! Results are deterministically ordered (date, then id) so callers and
//! tests never depend on map iteration order.

pub mod stores;

pub use stores::{
    MemoryBudgetStore, MemoryGoalStore, MemoryMailer, MemoryTransactionStore, MemoryUserStore,
    OutboundEmail,
};
