//! Individual validation rule implementations.
//!
//! Each rule is a pure function returning `Ok(())` on success or the
//! specific [`ValidationError`] on failure.

use super::{ValidationConfig, ValidationResult};
use crate::task::domain::{CreatedAt, Deadline, ValidationError};

/// Measures a description the way a browser text field does.
///
/// Length is counted in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
#[must_use]
pub fn description_length(description: &str) -> usize {
    description.encode_utf16().count()
}

/// Validates that the description is not empty.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDescription`] for an empty string.
pub fn validate_description_not_empty(description: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

/// Validates that the description fits the configured limit.
///
/// # Errors
///
/// Returns [`ValidationError::DescriptionTooLong`] when the description is
/// longer than `config.max_description_length`.
pub fn validate_description_length(
    description: &str,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    let actual = description_length(description);
    if actual > config.max_description_length {
        return Err(ValidationError::DescriptionTooLong {
            max: config.max_description_length,
            actual,
        });
    }
    Ok(())
}

/// Validates that a concrete deadline is not before the creation instant.
///
/// A deadline equal to the creation instant is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::DeadlineInPast`] when the deadline precedes
/// `created_at`.
pub fn validate_deadline_not_past(deadline: Deadline, created_at: CreatedAt) -> ValidationResult<()> {
    match deadline {
        Deadline::At(millis) if millis < created_at.millis() => {
            Err(ValidationError::DeadlineInPast {
                deadline: millis,
                created_at,
            })
        }
        Deadline::At(_) | Deadline::Never => Ok(()),
    }
}
