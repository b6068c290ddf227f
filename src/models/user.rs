//! User document model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// Field names are camelCase on the wire and in the database. The `password`
/// field holds the bcrypt hash; it is never exposed through the API
/// (responses use [`crate::models::UserResponse`], which omits it).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// Stored lower-cased; uniqueness is enforced by a database index.
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub bio: String,
    /// Recipes the user bookmarked client-side. No endpoint mutates this
    /// list yet; it is carried so existing documents round-trip intact.
    #[serde(default)]
    pub saved_recipes: Vec<ObjectId>,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}
