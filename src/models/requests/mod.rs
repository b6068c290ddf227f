//! Request payload models.

pub mod auth;
pub mod recipe;
pub mod user;

pub use auth::*;
pub use recipe::*;
pub use user::*;
