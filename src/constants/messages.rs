//! Success message constants used throughout the application.

pub const MSG_RECIPE_DELETED: &str = "Recipe deleted successfully";
