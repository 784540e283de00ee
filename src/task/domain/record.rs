//! Wire record exchanged with the persistence port.

use super::{CreatedAt, Deadline};
use serde::{Deserialize, Serialize};

/// Persisted shape of a task.
///
/// Serialises as
/// `{"description", "dateTaskCreated", "deadline", "completed"}`. The
/// "no deadline" sentinel is written as `null`. Time left is derived and is
/// never part of the record; a stray `timeLeft` field in stored payloads is
/// ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task description.
    pub description: String,
    /// Creation instant and identity key.
    #[serde(rename = "dateTaskCreated")]
    pub created_at: CreatedAt,
    /// Due instant or the sentinel.
    #[serde(default, with = "deadline_wire")]
    pub deadline: Deadline,
    /// Completion flag.
    #[serde(default, deserialize_with = "completed_wire::deserialize")]
    pub completed: bool,
}

/// Deadline encoding: a millisecond number, with `null` for the sentinel.
///
/// Reading also accepts the string `"Infinity"` and fractional numbers.
mod deadline_wire {
    use super::Deadline;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireDeadline {
        Millis(i64),
        Fractional(f64),
        Text(String),
    }

    pub fn serialize<S>(deadline: &Deadline, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match deadline {
            Deadline::Never => serializer.serialize_none(),
            Deadline::At(millis) => serializer.serialize_i64(*millis),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Deadline, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<WireDeadline>::deserialize(deserializer)? {
            None => Ok(Deadline::Never),
            Some(WireDeadline::Millis(millis)) => Ok(Deadline::At(millis)),
            Some(WireDeadline::Fractional(value)) => Ok(round_fractional(value)),
            Some(WireDeadline::Text(text)) if text == "Infinity" => Ok(Deadline::Never),
            Some(WireDeadline::Text(text)) => Err(D::Error::custom(format!(
                "unrecognised deadline value {text:?}"
            ))),
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "finite millisecond timestamps are far inside the i64 range; `as` saturates otherwise"
    )]
    fn round_fractional(value: f64) -> Deadline {
        if value.is_finite() {
            Deadline::At(value.round() as i64)
        } else {
            Deadline::Never
        }
    }
}

/// Completion flag encoding: a boolean, or the legacy `0`/`1` integers.
mod completed_wire {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireCompleted {
        Flag(bool),
        Number(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<WireCompleted>::deserialize(deserializer)? {
            None => false,
            Some(WireCompleted::Flag(flag)) => flag,
            Some(WireCompleted::Number(number)) => number != 0,
        })
    }
}
