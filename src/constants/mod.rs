//! Application constants module.
//!
//! This module centralizes all constant strings used throughout the application,
//! including error messages, success messages, and collection names.

pub mod collections;
pub mod errors;
pub mod messages;

pub use collections::*;
pub use errors::*;
pub use messages::*;
