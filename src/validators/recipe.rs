//! Recipe-related custom validators.

use validator::ValidationError;

use crate::constants::{ERR_COMMENT_TEXT_REQUIRED, ERR_INVALID_DIFFICULTY};
use crate::models::Difficulty;

/// Custom validator for the difficulty field.
/// The value must be exactly one of: Easy, Medium, Hard.
pub fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    match Difficulty::from_str(value) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("invalid_difficulty");
            error.message = Some(ERR_INVALID_DIFFICULTY.into());
            Err(error)
        }
    }
}

/// Custom validator for comment text.
/// Rejects empty and whitespace-only comments.
pub fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut error = ValidationError::new("comment_text_required");
        error.message = Some(ERR_COMMENT_TEXT_REQUIRED.into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty("Easy").is_ok());
        assert!(validate_difficulty("Medium").is_ok());
        assert!(validate_difficulty("Hard").is_ok());
        assert!(validate_difficulty("medium").is_err());
        assert!(validate_difficulty("").is_err());
        assert!(validate_difficulty("Extreme").is_err());
    }

    #[test]
    fn test_validate_comment_text() {
        assert!(validate_comment_text("Looks tasty").is_ok());
        assert!(validate_comment_text("").is_err());
        assert!(validate_comment_text("  \t ").is_err());
    }
}
