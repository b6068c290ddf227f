//! Recipe handlers: listing, detail, CRUD, likes, and comments.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::constants::MSG_RECIPE_DELETED;
use crate::errors::ApiError;
use crate::middleware::AuthUser;
use crate::models::{
    CommentRequest, CreateRecipeRequest, MessageResponse, RecipeResponse, UpdateRecipeRequest,
};
use crate::services::RecipeService;
use crate::validators::validation_errors_to_api_error;

/// Query parameters accepted by the recipe listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesQuery {
    /// Case-insensitive match against title, description, or cuisine.
    pub search: Option<String>,
    /// Exact difficulty filter (Easy, Medium, Hard).
    pub difficulty: Option<String>,
    /// Exact cuisine filter.
    pub cuisine: Option<String>,
}

/// List recipes, newest first, optionally filtered
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "Recipes",
    params(ListRecipesQuery),
    responses(
        (status = 200, description = "Recipes with author summaries", body = [RecipeResponse])
    )
)]
pub async fn list_recipes(
    recipe_service: web::Data<RecipeService>,
    query: web::Query<ListRecipesQuery>,
) -> Result<HttpResponse, ApiError> {
    let recipes = recipe_service
        .list(
            query.search.as_deref(),
            query.difficulty.as_deref(),
            query.cuisine.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// Get a single recipe by id
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe with author summaries", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_recipe(
    recipe_service: web::Data<RecipeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let recipe = recipe_service.get(&path).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// Create a recipe owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "Recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Created recipe", body = RecipeResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_recipe(
    auth: AuthUser,
    recipe_service: web::Data<RecipeService>,
    body: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let recipe = recipe_service.create(auth.id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(recipe))
}

/// Update a recipe the authenticated user owns
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Recipe not found or not owned by caller", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_recipe(
    auth: AuthUser,
    recipe_service: web::Data<RecipeService>,
    path: web::Path<String>,
    body: web::Json<UpdateRecipeRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let recipe = recipe_service
        .update(&path, auth.id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// Delete a recipe the authenticated user owns
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Recipe not found or not owned by caller", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_recipe(
    auth: AuthUser,
    recipe_service: web::Data<RecipeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    recipe_service.delete(&path, auth.id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_RECIPE_DELETED)))
}

/// Toggle the authenticated user's like on a recipe
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/like",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe with like toggled", body = RecipeResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_like(
    auth: AuthUser,
    recipe_service: web::Data<RecipeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let recipe = recipe_service.toggle_like(&path, auth.id).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// Add a comment to a recipe
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/comments",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Recipe with the new comment appended", body = RecipeResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_comment(
    auth: AuthUser,
    recipe_service: web::Data<RecipeService>,
    path: web::Path<String>,
    body: web::Json<CommentRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let recipe = recipe_service
        .add_comment(&path, auth.id, &body.text)
        .await?;
    Ok(HttpResponse::Ok().json(recipe))
}
