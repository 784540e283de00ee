//! Presentation port and the values it consumes.

use crate::task::domain::{CreatedAt, Task, describe_time_left};
use serde::Serialize;

/// Read-only view of one task, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListItem {
    /// Task description.
    pub description: String,
    /// Whether the task is shown as completed.
    pub completed: bool,
    /// Key attached to the delete and complete actions.
    pub key: CreatedAt,
    /// Time-left label, empty for tasks without a deadline.
    pub time_left: String,
}

impl TaskListItem {
    /// Builds the view item for `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            description: task.description().to_owned(),
            completed: task.completed(),
            key: task.created_at(),
            time_left: describe_time_left(task.time_left()),
        }
    }
}

/// Presentation contract: shows the current list.
#[cfg_attr(test, mockall::automock)]
pub trait TaskView: Send + Sync {
    /// Replaces the displayed list with `items`.
    fn render(&self, items: &[TaskListItem]);
}

/// Capability asked before a task is deleted.
///
/// Closures `Fn(CreatedAt) -> bool` implement this trait.
pub trait DeletionConfirmation {
    /// Returns `true` when the user confirms deleting the task keyed `key`.
    fn confirm(&self, key: CreatedAt) -> bool;
}

impl<F> DeletionConfirmation for F
where
    F: Fn(CreatedAt) -> bool,
{
    fn confirm(&self, key: CreatedAt) -> bool {
        self(key)
    }
}
