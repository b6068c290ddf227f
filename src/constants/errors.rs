//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";
pub const ERR_FAILED_FETCH_USER: &str = "Failed to fetch updated user";

// Recipe errors
pub const ERR_RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED: &str = "Recipe not found or unauthorized";
pub const ERR_FAILED_FETCH_RECIPE: &str = "Failed to fetch updated recipe";

// Validation errors
pub const ERR_COMMENT_TEXT_REQUIRED: &str = "Comment text is required";
pub const ERR_INVALID_DIFFICULTY: &str = "Difficulty must be one of: Easy, Medium, Hard";
pub const ERR_INVALID_USERNAME_FORMAT: &str =
    "Username can only contain letters, numbers, underscores, and hyphens";

// Generic errors
pub const ERR_INTERNAL: &str = "Internal server error";
