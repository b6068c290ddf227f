//! API error taxonomy and translation to HTTP responses.
//!
//! Every failure below the handler layer is converted into an `ApiError`
//! at the service/repository boundary. Raw storage error text never reaches
//! the client; unexpected failures are logged server-side and reported as a
//! generic message.

use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::constants::{ERR_INTERNAL, ERR_INVALID_CREDENTIALS};

/// Error response body.
///
/// All endpoints share this shape: an `error` message, plus the full list
/// of violations for validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Recipe not found")]
    pub error: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Every violated field, collected (400)
    ValidationError(Vec<String>),
    /// Duplicate username or email (400)
    Conflict(String),
    /// Login failure; deliberately vague so the response does not reveal
    /// whether the email exists (400)
    InvalidCredentials,
    /// Missing, malformed, or expired bearer token (401)
    Unauthorized(String),
    /// Resource absent, or present but not owned by the caller (404)
    NotFound(String),
    /// Unexpected failure; detail is logged, the client sees a generic
    /// message (500)
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            }),
            ApiError::Conflict(msg) => HttpResponse::BadRequest().json(ErrorResponse {
                error: msg.clone(),
                errors: None,
            }),
            ApiError::InvalidCredentials => HttpResponse::BadRequest().json(ErrorResponse {
                error: ERR_INVALID_CREDENTIALS.to_string(),
                errors: None,
            }),
            ApiError::Unauthorized(msg) => HttpResponse::Unauthorized().json(ErrorResponse {
                error: msg.clone(),
                errors: None,
            }),
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse {
                error: msg.clone(),
                errors: None,
            }),
            ApiError::InternalServerError(msg) => {
                error!("Internal server error: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: ERR_INTERNAL.to_string(),
                    errors: None,
                })
            }
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

// Token generation failures only; verification errors are mapped to
// Unauthorized where the token is actually checked.
impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::ValidationError(vec!["x".to_string()]),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Conflict("dup".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (
                ApiError::Unauthorized("no".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::NotFound("gone".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::InternalServerError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.error_response().status(), expected, "{}", err);
        }
    }

    #[actix_web::test]
    async fn test_validation_error_lists_all_violations() {
        let err = ApiError::ValidationError(vec![
            "Title must be at least 3 characters long".to_string(),
            "Servings must be at least 1".to_string(),
        ]);

        let resp = err.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let err = ApiError::InternalServerError("connection pool exhausted".to_string());

        let resp = err.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], ERR_INTERNAL);
    }

    #[actix_web::test]
    async fn test_invalid_credentials_is_vague() {
        let resp = ApiError::InvalidCredentials.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], ERR_INVALID_CREDENTIALS);
    }
}
