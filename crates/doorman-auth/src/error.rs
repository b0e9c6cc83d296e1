//! Error types for the auth crate.

use thiserror::Error;

/// Errors that can occur in account and session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The resource already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown username or wrong password. Deliberately indistinct.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed internally.
    #[error("crypto error: {0}")]
    Crypto(String),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
