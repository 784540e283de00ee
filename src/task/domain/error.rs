//! Error types for task input validation.

use super::CreatedAt;
use thiserror::Error;

/// Errors returned when a candidate task violates the creation rules.
///
/// All variants are recoverable: the user corrects the input and retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The description is empty.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The description exceeds the configured length limit.
    #[error("task description is {actual} characters long, the limit is {max}")]
    DescriptionTooLong {
        /// Configured maximum length.
        max: usize,
        /// Length of the rejected description.
        actual: usize,
    },

    /// The deadline lies before the task creation instant.
    #[error("deadline {deadline} is earlier than task creation time {created_at}")]
    DeadlineInPast {
        /// Rejected deadline in milliseconds since the Unix epoch.
        deadline: i64,
        /// Creation instant of the candidate task.
        created_at: CreatedAt,
    },

    /// The raw deadline input could not be parsed as a date or date-time.
    #[error("unrecognised deadline input: {0:?}")]
    InvalidDeadline(String),
}

impl ValidationError {
    /// Returns the short message shown to the user next to the input form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyDescription => "Task can't be empty!".to_owned(),
            Self::DescriptionTooLong { max, .. } => {
                format!("Task can't be longer than {max} symbols")
            }
            Self::DeadlineInPast { .. } => "Deadline can't be set for past time".to_owned(),
            Self::InvalidDeadline(_) => "Deadline is not a valid date".to_owned(),
        }
    }
}
