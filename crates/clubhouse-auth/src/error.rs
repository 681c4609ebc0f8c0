//! Authentication error types
//!
//! Failure kinds are deliberately coarse on the credential path: callers must
//! not be able to tell an unknown email from a wrong password.

use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login attempt with an unknown email or a wrong password
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Malformed, mis-signed, expired, or orphaned token
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Identity resolved but the account is deactivated
    #[error("Inactive user")]
    InactiveAccount,

    /// Password does not meet requirements
    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    /// Password hashing failed
    #[error("Password hashing failed")]
    PasswordHashingFailed,

    /// Stored hash could not be parsed (not the same as a mismatch)
    #[error("Stored password hash is malformed")]
    InvalidPasswordHash,

    /// Credential store failure (connectivity etc.) - a server fault,
    /// never surfaced as a credential problem
    #[error("Credential store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Token codec failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The embedded expiry is in the past
    #[error("Token has expired")]
    Expired,

    /// The signature does not verify against the configured key
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token cannot be parsed into the expected claim shape
    #[error("Malformed token")]
    Malformed,
}

impl From<TokenError> for AuthError {
    fn from(_: TokenError) -> Self {
        // Callers never learn which codec check failed
        Self::InvalidToken
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_failures_collapse_to_invalid_token() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::InvalidSignature),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::Malformed),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn test_credential_message_is_generic() {
        // The user-visible message must not hint at which field was wrong.
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("email"));
        assert!(!message.to_lowercase().contains("hash"));
    }
}
