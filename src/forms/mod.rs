//! Form definitions backing the devsearch routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod projects;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid owner id")]
    InvalidOwnerId,

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid url")]
    InvalidUrl,

    #[error("invalid tag")]
    InvalidTag,

    #[error("invalid vote")]
    InvalidVote,

    #[error("malformed form body: {0}")]
    Malformed(String),
}
