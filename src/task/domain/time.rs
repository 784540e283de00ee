//! Millisecond time scalars: task keys, deadlines, and remaining time.

use super::ValidationError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser `datetime-local` shapes, interpreted in the host zone.
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Creation instant of a task in milliseconds since the Unix epoch.
///
/// The creation instant doubles as the task's identity key: removal and
/// completion address tasks by this value, and it is unique within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedAt(i64);

impl CreatedAt {
    /// Creates a key from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates a key from a UTC timestamp, truncated to milliseconds.
    #[must_use]
    pub fn from_datetime(timestamp: &DateTime<Utc>) -> Self {
        Self(timestamp.timestamp_millis())
    }

    /// Returns the wrapped millisecond value.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Returns the first key at or after this one that `is_taken` rejects.
    ///
    /// Returns `None` when every key up to `i64::MAX` is taken.
    #[must_use]
    pub fn first_free(self, is_taken: impl Fn(Self) -> bool) -> Option<Self> {
        let mut key = self;
        while is_taken(key) {
            key = Self(key.0.checked_add(1)?);
        }
        Some(key)
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Due instant of a task, or the "no deadline" sentinel.
///
/// [`Deadline::Never`] behaves as positive infinity: it never expires and
/// sorts after every concrete deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deadline {
    /// The task is never due.
    #[default]
    Never,
    /// The task is due at the given milliseconds since the Unix epoch.
    At(i64),
}

impl Deadline {
    /// Creates a concrete deadline from a UTC timestamp.
    #[must_use]
    pub fn from_datetime(timestamp: &DateTime<Utc>) -> Self {
        Self::At(timestamp.timestamp_millis())
    }

    /// Returns the due instant in milliseconds, or `None` for the sentinel.
    #[must_use]
    pub const fn millis(self) -> Option<i64> {
        match self {
            Self::Never => None,
            Self::At(millis) => Some(millis),
        }
    }

    /// Returns `true` for the "no deadline" sentinel.
    #[must_use]
    pub const fn is_never(self) -> bool {
        matches!(self, Self::Never)
    }

    /// Computes the time left until this deadline as seen at `now_millis`.
    ///
    /// The result is negative once the deadline has passed.
    #[must_use]
    pub const fn time_left_at(self, now_millis: i64) -> TimeLeft {
        match self {
            Self::Never => TimeLeft::Unbounded,
            Self::At(millis) => TimeLeft::Remaining(millis.saturating_sub(now_millis)),
        }
    }

    /// Parses the raw value of a deadline input field.
    ///
    /// Blank input yields [`Deadline::Never`]. Accepted shapes are RFC 3339
    /// timestamps with an offset, `YYYY-MM-DDTHH:MM[:SS]` in the host's
    /// local zone, and bare `YYYY-MM-DD` dates taken as UTC midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDeadline`] when the input matches
    /// none of the accepted shapes.
    pub fn parse_input(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Never);
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::At(timestamp.timestamp_millis()));
        }

        let local = LOCAL_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .map(|timestamp| timestamp.timestamp_millis());
        if let Some(millis) = local {
            return Ok(Self::At(millis));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::At(naive.and_utc().timestamp_millis()))
            .ok_or_else(|| ValidationError::InvalidDeadline(raw.to_owned()))
    }
}

impl From<Option<i64>> for Deadline {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Never, Self::At)
    }
}

impl From<DateTime<Utc>> for Deadline {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(&value)
    }
}

/// Derived time remaining until a task's deadline.
///
/// Ordering places every [`TimeLeft::Remaining`] value before
/// [`TimeLeft::Unbounded`], so tasks without a deadline sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeLeft {
    /// Milliseconds until the deadline; negative when overdue.
    Remaining(i64),
    /// The task has no deadline.
    Unbounded,
}

impl TimeLeft {
    /// Returns the remaining milliseconds, or `None` when unbounded.
    #[must_use]
    pub const fn millis(self) -> Option<i64> {
        match self {
            Self::Remaining(millis) => Some(millis),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` when the task has no deadline.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}
