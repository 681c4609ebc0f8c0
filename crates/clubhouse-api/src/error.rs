//! API error handling
//!
//! Maps core failures onto HTTP. Credential and token failures carry generic
//! messages and a `WWW-Authenticate: Bearer` challenge; server faults never
//! leak internals to the client.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use clubhouse_auth::AuthError;
use clubhouse_db::DbError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error with HTTP status mapping
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Inactive user")]
    InactiveAccount,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InactiveAccount => StatusCode::FORBIDDEN,
            Self::EmailAlreadyRegistered
            | Self::WeakPassword(_)
            | Self::ValidationError(_)
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InactiveAccount => "INACTIVE_ACCOUNT",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Safe message for the client (no internal details)
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse::from(&self));
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

/// Error response body for API clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub code: String,
    /// Error message (human-readable)
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(error: &ApiError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.client_message(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::InvalidToken => Self::InvalidToken,
            AuthError::InactiveAccount => Self::InactiveAccount,
            AuthError::WeakPassword(reason) => Self::WeakPassword(reason),
            AuthError::Store(detail) => Self::Database(detail),
            AuthError::PasswordHashingFailed
            | AuthError::InvalidPasswordHash
            | AuthError::Config(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(error: DbError) -> Self {
        match error {
            DbError::NotFound(detail) => Self::NotFound(detail),
            DbError::Duplicate(_) => Self::EmailAlreadyRegistered,
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InactiveAccount.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::EmailAlreadyRegistered.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_internal_details() {
        let err = ApiError::Database("connection string with password".to_string());
        assert!(!err.client_message().contains("password"));
        assert_eq!(err.client_message(), "An internal error occurred");
    }

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let api: ApiError = DbError::Duplicate("email taken".into()).into();
        assert!(matches!(api, ApiError::EmailAlreadyRegistered));
    }
}
