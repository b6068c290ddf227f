//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts every violation message from ValidationErrors so the response
/// lists the full set of problems, not just the first one.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateRecipeRequest;
    use validator::Validate;

    #[test]
    fn test_every_violation_message_is_collected() {
        let req: CreateRecipeRequest = serde_json::from_str("{}").unwrap();
        let err = validation_errors_to_api_error(req.validate().unwrap_err());

        let ApiError::ValidationError(messages) = err else {
            panic!("expected validation error");
        };

        assert_eq!(messages.len(), 8);
        assert!(messages
            .iter()
            .any(|m| m == "Title must be at least 3 characters long"));
        assert!(messages.iter().any(|m| m == "Servings must be at least 1"));
        assert!(messages
            .iter()
            .any(|m| m == "At least one ingredient is required"));
    }
}
