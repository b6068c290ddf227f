//! Response models returned by the API.

pub mod api;
pub mod recipe;
pub mod user;

pub use api::*;
pub use recipe::*;
pub use user::*;
