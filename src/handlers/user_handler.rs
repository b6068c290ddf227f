//! Profile handlers for the authenticated user.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::ERR_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::middleware::AuthUser;
use crate::models::{UpdateProfileRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "Users",
    responses(
        (status = 200, description = "Profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    auth: AuthUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service
        .get_by_id(auth.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Update the authenticated user's profile
#[utoipa::path(
    patch,
    path = "/api/users/profile",
    tag = "Users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 400, description = "Validation error or username taken", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile(
    auth: AuthUser,
    user_service: web::Data<UserService>,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service
        .update_profile(auth.id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
