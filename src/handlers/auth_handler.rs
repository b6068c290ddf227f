//! Authentication handlers for registration and login.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services::auth_service::generate_token;
use crate::services::{AuthService, UserService};
use crate::validators::validation_errors_to_api_error;

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation error or duplicate email/username", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    user_service: web::Data<UserService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service.register(body.into_inner()).await?;
    let user_id = user
        .id
        .ok_or_else(|| ApiError::InternalServerError("Stored user has no id".to_string()))?;
    let token = generate_token(user_id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Authenticate with email and password, returning a JWT
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let (user, token) = auth_service.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: user.into(),
    }))
}
