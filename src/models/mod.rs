//! Data models organized by type.

pub mod claims;
pub mod recipe;
pub mod requests;
pub mod responses;
pub mod user;

pub use claims::*;
pub use recipe::*;
pub use requests::*;
pub use responses::*;
pub use user::*;
