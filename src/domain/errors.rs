use thiserror::Error;

/// Domain-level error taxonomy shared by services, repositories, and handlers.
///
/// HTTP-agnostic: the API layer owns the mapping to status codes. Every
/// variant carries enough text to tell the caller what to correct; none of
/// them are retried internally.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A league, team, player, or other entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The league is in the wrong status for the requested operation.
    #[error("{0}")]
    InvalidState(String),

    /// The request lost to existing state: player already drafted, turn
    /// mismatch, team full, duplicate week, and similar.
    #[error("{0}")]
    Conflict(String),

    /// The caller is authenticated but not allowed to act here.
    #[error("{0}")]
    Forbidden(String),

    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DomainError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(detail.into())
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
