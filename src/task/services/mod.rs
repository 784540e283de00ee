//! Application services for the task list.

mod intent;
mod task_list;

pub use intent::{IntentOutcome, TaskIntent};
pub use task_list::{RemovalOutcome, TaskListError, TaskListResult, TaskListService};
