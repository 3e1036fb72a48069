//! Shared types, errors, and configuration for Fintrack.
//!
//! This crate provides common building blocks used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Store-level error types (backend failures, optimistic-lock conflicts)
//! - Configuration management
//! - The email sink contract and its SMTP implementation

pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use email::{EmailError, EmailSink, SmtpMailer};
pub use error::{StoreError, StoreResult};
