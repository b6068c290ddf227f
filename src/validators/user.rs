//! User-related custom validators.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::constants::ERR_INVALID_USERNAME_FORMAT;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Custom validator for the username format.
/// Usernames may contain letters, numbers, underscores, and hyphens only.
pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_username_format");
    error.message = Some(ERR_INVALID_USERNAME_FORMAT.into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_format() {
        assert!(validate_username_format("johndoe").is_ok());
        assert!(validate_username_format("john_doe-99").is_ok());
        assert!(validate_username_format("john doe").is_err());
        assert!(validate_username_format("john!").is_err());
        assert!(validate_username_format("").is_err());
    }
}
