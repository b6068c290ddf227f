//! HTTP handlers organized by resource.

pub mod auth_handler;
pub mod recipe_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use recipe_handler::*;
pub use user_handler::*;
