//! Service layer orchestrating repositories for the HTTP handlers.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod profiles;
pub mod projects;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    /// User-facing message describing invalid input.
    #[error("{0}")]
    Form(String),

    /// User-facing message describing a rejected state change.
    #[error("{0}")]
    Conflict(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => {
                log::warn!("Rejected write: {message}");
                ServiceError::Conflict("The change conflicts with existing data.".to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        let message = match err {
            FormError::Validation(_) => "Please check the form fields.".to_string(),
            FormError::InvalidOwnerId => "Unknown profile.".to_string(),
            FormError::InvalidTitle => "A project needs a title.".to_string(),
            FormError::InvalidUrl => "Links must be valid URLs.".to_string(),
            FormError::InvalidTag => "Unknown tag selected.".to_string(),
            FormError::InvalidVote => "Vote must be up or down.".to_string(),
            FormError::Malformed(_) => "The submitted form could not be read.".to_string(),
        };
        ServiceError::Form(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violation_hides_database_text() {
        let err = ServiceError::from(RepositoryError::ConstraintViolation(
            "Foreign key constraint violation: FOREIGN KEY constraint failed".to_string(),
        ));

        match err {
            ServiceError::Conflict(message) => {
                assert!(!message.contains("FOREIGN KEY"));
                assert_eq!(message, "The change conflicts with existing data.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_row_is_not_found() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
    }
}
