//! Custom Axum Extractors
//!
//! Request extractors for authentication, pagination, and validation.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
    Json,
};
use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::state::AppState;

pub use clubhouse_auth::Identity;

// =============================================================================
// Current User Extractor
// =============================================================================

/// Authenticated identity resolved from the bearer token on the request.
///
/// Rejects with 401 when the header is missing, the token fails validation,
/// or the subject no longer exists; 403 when the account is inactive.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::InvalidToken)?;

        let identity = state
            .auth
            .sessions
            .resolve_active(token, Utc::now())
            .await?;

        Ok(CurrentUser(identity))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

// =============================================================================
// Validated JSON Extractor
// =============================================================================

/// JSON extractor with validation
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> axum::extract::FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = ApiError;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

// =============================================================================
// Pagination Extractor
// =============================================================================

/// Pagination parameters
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    100
}

impl PaginationParams {
    /// Get offset for database query
    ///
    /// Widened before multiplying: `page` and `limit` are both `u32`, so the
    /// product can exceed `u32::MAX` for large page numbers.
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1)) as i64 * self.limit as i64
    }

    /// Get limit clamped to maximum
    pub fn limit(&self, max: u32) -> i64 {
        self.limit.min(max) as i64
    }
}

/// Pagination extractor
pub struct Pagination(pub PaginationParams);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        if params.page == 0 {
            return Err(ApiError::BadRequest("Page must be >= 1".to_string()));
        }
        if params.limit == 0 || params.limit > 1000 {
            return Err(ApiError::BadRequest(
                "Limit must be between 1 and 1000".to_string(),
            ));
        }

        Ok(Pagination(params))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Format validation errors into a readable string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: validation failed", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset() {
        let params = PaginationParams { page: 1, limit: 50 };
        assert_eq!(params.offset(), 0);

        let params = PaginationParams { page: 2, limit: 50 };
        assert_eq!(params.offset(), 50);

        let params = PaginationParams { page: 3, limit: 20 };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_pagination_offset_does_not_overflow() {
        // page * limit exceeds u32::MAX; the offset must widen, not wrap
        let params = PaginationParams {
            page: 4_294_970,
            limit: 1000,
        };
        assert_eq!(params.offset(), 4_294_969_000);
    }

    #[test]
    fn test_pagination_limit_clamped() {
        let params = PaginationParams {
            page: 1,
            limit: 500,
        };
        assert_eq!(params.limit(100), 100);

        let params = PaginationParams { page: 1, limit: 50 };
        assert_eq!(params.limit(100), 50);
    }

    #[test]
    fn test_bearer_token_parsing() {
        let req = axum::http::Request::builder()
            .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();
        assert_eq!(bearer_token(&parts), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let req = axum::http::Request::builder()
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();
        assert_eq!(bearer_token(&parts), None);
    }
}
