//! Validator applying the task creation rules.

use super::{ValidationConfig, ValidationResult, rules};
use crate::task::domain::{CreatedAt, Deadline};

/// Validator for candidate tasks.
///
/// Rules run in order (empty description, description length, deadline)
/// and the first failure is returned.
///
/// # Examples
///
/// ```
/// use tasklist::task::domain::{CreatedAt, Deadline, ValidationError};
/// use tasklist::task::validation::TaskValidator;
///
/// let validator = TaskValidator::new();
/// let created_at = CreatedAt::from_millis(1_000);
///
/// assert!(validator.validate("Buy milk", Deadline::Never, created_at).is_ok());
/// assert_eq!(
///     validator.validate("", Deadline::Never, created_at),
///     Err(ValidationError::EmptyDescription)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskValidator {
    config: ValidationConfig,
}

impl TaskValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a candidate task.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::task::domain::ValidationError`] raised by
    /// the rules.
    pub fn validate(
        &self,
        description: &str,
        deadline: Deadline,
        created_at: CreatedAt,
    ) -> ValidationResult<()> {
        rules::validate_description_not_empty(description)?;
        rules::validate_description_length(description, &self.config)?;
        rules::validate_deadline_not_past(deadline, created_at)
    }
}

/// Validates a candidate task against the default configuration.
///
/// # Errors
///
/// Returns the first [`crate::task::domain::ValidationError`] raised by the
/// rules.
pub fn validate(description: &str, deadline: Deadline, created_at: CreatedAt) -> ValidationResult<()> {
    TaskValidator::new().validate(description, deadline, created_at)
}
