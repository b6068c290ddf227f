//! Authentication service for login, token generation, and password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::ERR_INVALID_TOKEN;
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, User};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Authenticate a user and return the account plus a fresh JWT token.
    ///
    /// Both failure modes (unknown email, wrong password) produce the same
    /// vague error so the response does not reveal whether the email exists.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify_password(&req.password, &user.password)? {
            debug!("Failed login attempt for {}", mask_email(&req.email));
            return Err(ApiError::InvalidCredentials);
        }

        let user_id = user
            .id
            .ok_or_else(|| ApiError::InternalServerError("Stored user has no id".to_string()))?;
        let token = generate_token(user_id)?;

        Ok((user, token))
    }
}

/// Hash a password using bcrypt. The plaintext is never persisted or logged.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Issue a signed JWT for a user, expiring after the configured window
/// (seven days by default). Tokens are stateless; there is no server-side
/// session table.
pub fn generate_token(user_id: ObjectId) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_days as usize * 24 * 3600);

    let claims = Claims {
        sub: user_id.to_hex(),
        iat: now,
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify a JWT and return its claims.
///
/// Malformed tokens, bad signatures, and expired tokens all map to the same
/// Unauthorized error.
pub fn decode_token(token: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()))?;

    Ok(token_data.claims)
}
