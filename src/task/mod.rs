//! Deadline-aware task list.
//!
//! Users create tasks with an optional deadline, complete and delete them,
//! and view them ordered by creation date, completion, or time left. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Creation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
