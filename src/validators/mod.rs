//! Input validation helpers and custom validators.

pub mod common;
pub mod recipe;
pub mod user;

pub use common::*;
pub use recipe::*;
pub use user::*;
