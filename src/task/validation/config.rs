//! Configuration for task validation rules.

/// Default upper bound on description length.
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 160;

/// Limits applied when a task is created.
///
/// # Examples
///
/// ```
/// use tasklist::task::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_description_length, 160);
///
/// let short = ValidationConfig::with_max_description_length(40);
/// assert_eq!(short.max_description_length, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum description length in UTF-16 code units.
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with a custom description limit.
    #[must_use]
    pub const fn with_max_description_length(max_description_length: usize) -> Self {
        Self {
            max_description_length,
        }
    }
}
