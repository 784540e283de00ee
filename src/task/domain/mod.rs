//! Domain model for the deadline task list.
//!
//! The domain holds the task entity, its millisecond time scalars, the wire
//! record used by persistence, and the time-left label rules. Nothing here
//! performs I/O or reads the wall clock; callers pass "now" in explicitly.

mod error;
mod record;
mod task;
mod time;
mod time_left;

pub use error::ValidationError;
pub use record::TaskRecord;
pub use task::Task;
pub use time::{CreatedAt, Deadline, TimeLeft};
pub use time_left::{describe_time_left, format_time_left};
