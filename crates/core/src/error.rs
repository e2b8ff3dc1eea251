use crate::types::DbId;

/// Domain-level failure kinds.
///
/// The HTTP layer maps each variant to a status code by matching on the
/// variant, never by comparing messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The resource exists but belongs to someone else.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Username or email collides with an existing user.
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// Unknown email and wrong password collapse into this one variant.
    #[error("Email or password is incorrect.")]
    InvalidCredentials,

    #[error("Bearer token not found")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Internal error: {0}")]
    Internal(String),
}
