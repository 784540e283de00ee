//! Creation-time validation of candidate tasks.
//!
//! Individual checks live in [`rules`] as pure functions. [`TaskValidator`]
//! applies them in a fixed order and stops at the first failure, so the
//! user sees one actionable message at a time.

pub mod config;
pub mod rules;
pub mod service;

pub use config::ValidationConfig;
pub use service::{TaskValidator, validate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, crate::task::domain::ValidationError>;
