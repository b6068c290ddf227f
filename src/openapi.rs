use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    AuthResponse, AuthorSummary, CommentRequest, CommentResponse, CreateRecipeRequest, Difficulty,
    LoginRequest, MessageResponse, RecipeResponse, RegisterRequest, UpdateProfileRequest,
    UpdateRecipeRequest, UserResponse,
};

/// OpenAPI documentation for the recipe sharing API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeShare API",
        version = "1.0.0",
        description = "REST API for sharing recipes: accounts, profiles, recipe CRUD, likes, and comments.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3002", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Profile management for the authenticated user"),
        (name = "Recipes", description = "Recipe CRUD, search, likes, and comments")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::get_profile,
        crate::handlers::update_profile,
        crate::handlers::list_recipes,
        crate::handlers::get_recipe,
        crate::handlers::create_recipe,
        crate::handlers::update_recipe,
        crate::handlers::delete_recipe,
        crate::handlers::toggle_like,
        crate::handlers::add_comment,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            CreateRecipeRequest,
            UpdateRecipeRequest,
            CommentRequest,
            Difficulty,
            UserResponse,
            AuthResponse,
            AuthorSummary,
            CommentResponse,
            RecipeResponse,
            MessageResponse,
            ErrorResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/users/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_statuses(doc: &serde_json::Value, path: &str, method: &str) -> Vec<String> {
        doc["paths"][path][method]["responses"]
            .as_object()
            .unwrap()
            .keys()
            .filter(|code| code.starts_with('2'))
            .cloned()
            .collect()
    }

    #[test]
    fn test_documented_success_statuses() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        // Only creation of a new top-level resource answers 201; appending
        // a comment returns the updated recipe with 200.
        assert_eq!(
            success_statuses(&doc, "/api/users/register", "post"),
            vec!["201"]
        );
        assert_eq!(success_statuses(&doc, "/api/recipes", "post"), vec!["201"]);
        assert_eq!(
            success_statuses(&doc, "/api/recipes/{id}/comments", "post"),
            vec!["200"]
        );
        assert_eq!(
            success_statuses(&doc, "/api/recipes/{id}/like", "post"),
            vec!["200"]
        );
        assert_eq!(success_statuses(&doc, "/api/users/login", "post"), vec!["200"]);
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
