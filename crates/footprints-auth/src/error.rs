//! Error types for credential verification

use thiserror::Error;

/// Result type for verifier operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while verifying a credential
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credential validation failed
    #[error("Credential validation failed: {0}")]
    ValidationFailed(String),

    /// Credential has expired
    #[error("Credential expired")]
    Expired,

    /// Credential not yet valid
    #[error("Credential not yet valid")]
    NotYetValid,

    /// Invalid credential format
    #[error("Invalid credential format: {0}")]
    InvalidFormat(String),

    /// Invalid signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Missing required claim
    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::ImmatureSignature => AuthError::NotYetValid,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature(err.to_string()),
            ErrorKind::InvalidToken => AuthError::InvalidFormat(err.to_string()),
            _ => AuthError::ValidationFailed(err.to_string()),
        }
    }
}
