//! Services organized by domain concern.

pub mod auth_service;
pub mod recipe_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use recipe_service::RecipeService;
pub use user_service::UserService;
