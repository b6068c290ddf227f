//! User service for registration and profile management.

use log::{info, warn};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{
    ERR_EMAIL_EXISTS, ERR_FAILED_FETCH_USER, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{RegisterRequest, UpdateProfileRequest, User};
use crate::repositories::UserRepository;
use crate::services::auth_service::hash_password;
use crate::utils::{mask_email, mask_username};

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Get the underlying repository (for index creation at startup).
    pub fn repository(&self) -> Arc<UserRepository> {
        Arc::clone(&self.repository)
    }

    /// Register a new user account.
    ///
    /// The email is stored lower-cased; the password is bcrypt-hashed before
    /// it ever touches the database.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, ApiError> {
        if self.repository.find_by_email(&req.email).await?.is_some() {
            warn!(
                "Registration failed: email {} already registered",
                mask_email(&req.email)
            );
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        if self
            .repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        let password = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            username: req.username,
            email: req.email.to_lowercase(),
            password,
            phone_number: String::new(),
            address: String::new(),
            profile_picture: String::new(),
            bio: String::new(),
            saved_recipes: vec![],
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&user).await?;
        info!("Registered new user: {}", id);

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    /// Fetch a user by id.
    pub async fn get_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        self.repository.find_by_id(id).await
    }

    /// Update the authenticated user's profile.
    ///
    /// Only username, bio, phoneNumber, and address are applied; anything
    /// else on the account (email, password) is immutable through this path.
    /// Fields absent from the request are left unchanged.
    pub async fn update_profile(
        &self,
        user_id: ObjectId,
        req: UpdateProfileRequest,
    ) -> Result<User, ApiError> {
        let existing_user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!("Profile update failed: user not found with id: {}", user_id);
                ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
            })?;

        let mut update_doc = doc! {};

        if let Some(ref new_username) = req.username {
            if *new_username != existing_user.username {
                // A different account holding the username is a conflict;
                // re-submitting the current name is not.
                if let Some(other_user) = self.repository.find_by_username(new_username).await? {
                    if other_user.id != existing_user.id {
                        warn!(
                            "Profile update failed: username {} already taken",
                            mask_username(new_username)
                        );
                        return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
                    }
                }
                update_doc.insert("username", new_username.clone());
            }
        }

        if let Some(ref bio) = req.bio {
            update_doc.insert("bio", bio.clone());
        }

        if let Some(ref phone_number) = req.phone_number {
            update_doc.insert("phoneNumber", phone_number.clone());
        }

        if let Some(ref address) = req.address {
            update_doc.insert("address", address.clone());
        }

        if update_doc.is_empty() {
            return Ok(existing_user);
        }

        update_doc.insert("updatedAt", mongodb::bson::DateTime::now());
        self.repository.update(user_id, update_doc).await?;

        info!("Updated profile for user: {}", user_id);

        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_USER.to_string()))
    }
}
