use crate::types::DbId;
use crate::validation::rules::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid input: {0}")]
    InputFormat(String),
}

impl CoreError {
    /// A validation error for a value that must be unique but is taken.
    pub fn duplicate(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation(ValidationErrors::duplicate(field, message))
    }
}
