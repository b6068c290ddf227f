//! Authentication request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_username_format;

/// Request payload for user registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username (3-50 characters, letters, numbers, underscores, hyphens only)
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username must be between 3 and 50 characters"
        ),
        custom(function = "validate_username_format")
    )]
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Request payload for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let req = RegisterRequest {
            username: "johndoe".to_string(),
            email: "user@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_request_collects_all_violations() {
        let req = RegisterRequest {
            username: "ab".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("username"));
        assert!(errs.field_errors().contains_key("email"));
        assert!(errs.field_errors().contains_key("password"));
    }

    #[test]
    fn test_register_request_rejects_bad_username_chars() {
        let req = RegisterRequest {
            username: "john doe!".to_string(),
            email: "user@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
