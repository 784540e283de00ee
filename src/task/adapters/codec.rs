//! JSON encoding of the persisted task list.

use crate::task::{
    domain::TaskRecord,
    ports::{PersistenceError, PersistenceResult},
};
use tracing::warn;

/// Encodes `records` as a JSON array.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if serialisation fails.
pub fn encode(records: &[TaskRecord]) -> PersistenceResult<String> {
    serde_json::to_string(records).map_err(PersistenceError::encode)
}

/// Decodes a stored payload.
///
/// A JSON `null` and a payload that fails to parse both decode to `None`;
/// the latter is logged since it means the stored value was corrupted.
#[must_use]
pub fn decode(payload: &str) -> Option<Vec<TaskRecord>> {
    match serde_json::from_str::<Option<Vec<TaskRecord>>>(payload) {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "ignoring malformed task list payload");
            None
        }
    }
}
