//! Task entity.

use super::{CreatedAt, Deadline, TaskRecord, TimeLeft};

/// A single to-do item with an optional deadline.
///
/// Tasks are values: every change produces a modified copy, and the owning
/// list is replaced wholesale. Time left is derived from the deadline and an
/// explicit "now"; it is recomputed on every rehydration and never read from
/// storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    created_at: CreatedAt,
    deadline: Deadline,
    time_left: TimeLeft,
    completed: bool,
}

impl Task {
    /// Creates an incomplete task.
    ///
    /// Time left starts relative to the creation instant; the store
    /// refreshes it against the wall clock when it reloads the list.
    #[must_use]
    pub fn new(description: impl Into<String>, created_at: CreatedAt, deadline: Deadline) -> Self {
        Self {
            description: description.into(),
            created_at,
            deadline,
            time_left: deadline.time_left_at(created_at.millis()),
            completed: false,
        }
    }

    /// Rehydrates a task from its persisted record.
    #[must_use]
    pub fn from_record(record: TaskRecord, now_millis: i64) -> Self {
        Self {
            description: record.description,
            created_at: record.created_at,
            deadline: record.deadline,
            time_left: record.deadline.time_left_at(now_millis),
            completed: record.completed,
        }
    }

    /// Returns the persisted shape of this task.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            description: self.description.clone(),
            created_at: self.created_at,
            deadline: self.deadline,
            completed: self.completed,
        }
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation instant, which is also the task key.
    #[must_use]
    pub const fn created_at(&self) -> CreatedAt {
        self.created_at
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns the time left as of the last refresh.
    #[must_use]
    pub const fn time_left(&self) -> TimeLeft {
        self.time_left
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns a completed copy of this task.
    ///
    /// Completion is one-way: marking an already completed task again
    /// yields an equal value.
    #[must_use]
    pub fn marked_complete(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }

    /// Returns a copy with time left recomputed against `now_millis`.
    #[must_use]
    pub fn refreshed(&self, now_millis: i64) -> Self {
        Self {
            time_left: self.deadline.time_left_at(now_millis),
            ..self.clone()
        }
    }
}
