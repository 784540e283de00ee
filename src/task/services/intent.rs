//! User intents reported by the presentation layer.

use crate::task::domain::CreatedAt;

use super::RemovalOutcome;

/// An action requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    /// Create a task from the raw form values.
    Add {
        /// Description field value.
        description: String,
        /// Deadline field value; blank means no deadline.
        deadline: String,
    },
    /// Delete the task with this key, subject to confirmation.
    Delete(CreatedAt),
    /// Mark the task with this key as completed.
    Complete(CreatedAt),
    /// Order newest first.
    SortByDate,
    /// Order completed tasks first.
    SortByCompleted,
    /// Order by least time left, tasks without a deadline last.
    SortByTimeLeft,
}

impl TaskIntent {
    /// Creates an add intent from form values.
    #[must_use]
    pub fn add(description: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self::Add {
            description: description.into(),
            deadline: deadline.into(),
        }
    }
}

/// Result of a dispatched intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A task was added under this key.
    Added(CreatedAt),
    /// A delete intent finished with this outcome.
    Removed(RemovalOutcome),
    /// A complete intent was applied.
    Completed,
    /// The list was reordered.
    Sorted,
}
