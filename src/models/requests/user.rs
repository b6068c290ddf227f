//! User profile request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_username_format;

/// Request payload for updating the authenticated user's profile.
///
/// Only username, bio, phoneNumber, and address are updatable through this
/// path; email and password are immutable here. Absent fields are left
/// unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New username (3-50 characters, letters, numbers, underscores, hyphens only)
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username must be between 3 and 50 characters"
        ),
        custom(function = "validate_username_format")
    )]
    #[schema(example = "newusername")]
    pub username: Option<String>,
    /// User bio (max 500 characters)
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    #[schema(example = "Home cook collecting noodle recipes")]
    pub bio: Option<String>,
    /// Phone number (max 20 characters)
    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    #[schema(example = "+1234567890")]
    pub phone_number: Option<String>,
    /// Address (max 200 characters)
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    #[schema(example = "221B Baker Street, London")]
    pub address: Option<String>,
}
