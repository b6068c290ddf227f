//! User repository for all MongoDB operations related to users.
//!
//! This repository encapsulates all database access logic for the users
//! collection, providing a clean interface for the service layer.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_USERS, ERR_EMAIL_EXISTS, ERR_USERNAME_EXISTS};
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for the users collection.
    ///
    /// Called once during application startup. Unique indexes on `email`
    /// and `username` back the global uniqueness invariant.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("User indexes created successfully");
        Ok(())
    }

    /// Insert a new user into the database.
    ///
    /// The service checks for duplicates first, but a concurrent insert can
    /// still slip between the check and this write; the unique index then
    /// rejects it here, and that rejection must stay a conflict rather than
    /// an internal error.
    pub async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(|e| match duplicate_key_message(&e) {
                Some(msg) => ApiError::Conflict(msg.to_string()),
                None => e.into(),
            })?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted id was not an ObjectId".into()))
    }

    /// Find a user by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    /// Find all users whose id is in the given list.
    ///
    /// Used to batch-resolve author summaries for recipe responses.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, ApiError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        debug!("Repository: Finding {} users by id", ids.len());
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply a `$set` update to a user document.
    pub async fn update(
        &self,
        id: ObjectId,
        update: Document,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?)
    }
}

/// Translate a duplicate-key (E11000) write error into the message for the
/// index that rejected the insert. Returns `None` for any other error.
fn duplicate_key_message(err: &mongodb::error::Error) -> Option<&'static str> {
    if let mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(we)) =
        &*err.kind
    {
        if we.code == 11000 {
            return Some(conflict_message_for(&we.message));
        }
    }
    None
}

fn conflict_message_for(message: &str) -> &'static str {
    if message.contains("username_1") {
        ERR_USERNAME_EXISTS
    } else {
        ERR_EMAIL_EXISTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_identifies_violated_index() {
        let username_err = "E11000 duplicate key error collection: recipeshare.users \
                            index: username_1 dup key: { username: \"johndoe\" }";
        assert_eq!(conflict_message_for(username_err), ERR_USERNAME_EXISTS);

        let email_err = "E11000 duplicate key error collection: recipeshare.users \
                         index: email_1 dup key: { email: \"user@example.com\" }";
        assert_eq!(conflict_message_for(email_err), ERR_EMAIL_EXISTS);
    }

    #[test]
    fn test_duplicate_conflicts_stay_client_errors() {
        // A conflict from the unique index must answer 400, not 500.
        let err = ApiError::Conflict(ERR_EMAIL_EXISTS.to_string());
        assert_eq!(
            actix_web::ResponseError::error_response(&err).status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
