//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces the task list service
//! consumes: where the list is stored, where it is shown, and who confirms
//! deletions.

pub mod persistence;
pub mod view;

pub use persistence::{PersistenceError, PersistenceResult, TaskPersistence};
pub use view::{DeletionConfirmation, TaskListItem, TaskView};
