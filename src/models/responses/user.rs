//! User-related response models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses (never includes the password hash).
#[derive(Debug, Serialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's username
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's phone number
    #[schema(example = "+1234567890")]
    pub phone_number: String,
    /// User's address
    pub address: String,
    /// URL to the user's profile picture
    pub profile_picture: String,
    /// User's bio
    pub bio: String,
    /// Hex ids of recipes the user saved
    pub saved_recipes: Vec<String>,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            address: user.address,
            profile_picture: user.profile_picture,
            bio: user.bio,
            saved_recipes: user.saved_recipes.iter().map(|id| id.to_hex()).collect(),
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(user.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// Response for successful registration or login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// JWT bearer token, valid for seven days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// The authenticated user
    pub user: UserResponse,
}
