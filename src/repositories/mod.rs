//! Repositories encapsulating all MongoDB access.

pub mod recipe_repository;
pub mod user_repository;

pub use recipe_repository::RecipeRepository;
pub use user_repository::UserRepository;
