//! Store-level configuration.

use crate::task::validation::ValidationConfig;

/// Storage namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "tasks";

/// Configuration shared by the task list service and its adapters.
///
/// # Examples
///
/// ```
/// use tasklist::task::config::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.namespace, "tasks");
/// assert_eq!(config.validation.max_description_length, 160);
///
/// let scratch = StoreConfig::default().with_namespace("scratch");
/// assert_eq!(scratch.namespace, "scratch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key under which the whole list is persisted.
    pub namespace: String,
    /// Creation-time validation limits.
    pub validation: ValidationConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            validation: ValidationConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Sets the persistence namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the validation limits.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }
}
