use cohort_core::error::CoreError;

/// Service-level error type.
///
/// Wraps [`CoreError`] for domain errors and adds the failures of loading
/// configuration and seed data.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain-level error from `cohort_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed data that is not a JSON array of student drafts.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    /// Seed file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for registry return values.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// The domain error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            ServiceError::Core(core) => Some(core),
            _ => None,
        }
    }
}
