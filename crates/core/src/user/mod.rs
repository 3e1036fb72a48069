//! User identity as seen by the core.
//!
//! The core never mutates users; it only reads identity and email for
//! notification dispatch. Account management lives outside this crate.

pub mod repository;
pub mod types;

pub use repository::UserRepository;
pub use types::{Role, User};
