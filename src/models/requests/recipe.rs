//! Recipe request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_comment_text, validate_difficulty};

/// Request payload for creating a recipe.
///
/// Every field defaults when absent so that a missing field surfaces as a
/// validation violation alongside the others, instead of a bare
/// deserialization error that reports only the first problem.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRecipeRequest {
    /// Recipe title (at least 3 characters)
    #[validate(length(min = 3, message = "Title must be at least 3 characters long"))]
    #[schema(example = "Pad Thai")]
    pub title: String,
    /// Recipe description (at least 10 characters)
    #[validate(length(min = 10, message = "Description must be at least 10 characters long"))]
    #[schema(example = "A classic Thai noodle dish")]
    pub description: String,
    /// Ordered list of ingredients (at least one)
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    #[schema(example = json!(["200g rice noodles", "2 eggs"]))]
    pub ingredients: Vec<String>,
    /// Ordered list of instruction steps (at least one)
    #[validate(length(min = 1, message = "At least one instruction step is required"))]
    #[schema(example = json!(["Soak noodles", "Stir fry"]))]
    pub instructions: Vec<String>,
    /// Optional image URL
    #[schema(example = "https://example.com/padthai.jpg")]
    pub image: String,
    /// Cooking time in minutes (at least 1)
    #[validate(range(min = 1, message = "Cooking time must be at least 1 minute"))]
    #[schema(example = 20)]
    pub cooking_time: u32,
    /// Number of servings (at least 1)
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    #[schema(example = 2)]
    pub servings: u32,
    /// Difficulty level: Easy, Medium, or Hard
    #[validate(custom(function = "validate_difficulty"))]
    #[schema(example = "Medium")]
    pub difficulty: String,
    /// Cuisine type
    #[validate(length(min = 1, message = "Cuisine type is required"))]
    #[schema(example = "Thai")]
    pub cuisine: String,
}

/// Request payload for updating a recipe.
///
/// Only the mutable fields appear here; `author`, likes, and comments cannot
/// be touched through this path. Absent fields are left unchanged, provided
/// fields are re-validated.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    /// Recipe title (at least 3 characters)
    #[validate(length(min = 3, message = "Title must be at least 3 characters long"))]
    pub title: Option<String>,
    /// Recipe description (at least 10 characters)
    #[validate(length(min = 10, message = "Description must be at least 10 characters long"))]
    pub description: Option<String>,
    /// Ordered list of ingredients (at least one)
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Option<Vec<String>>,
    /// Ordered list of instruction steps (at least one)
    #[validate(length(min = 1, message = "At least one instruction step is required"))]
    pub instructions: Option<Vec<String>>,
    /// Image URL
    pub image: Option<String>,
    /// Cooking time in minutes (at least 1)
    #[validate(range(min = 1, message = "Cooking time must be at least 1 minute"))]
    pub cooking_time: Option<u32>,
    /// Number of servings (at least 1)
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: Option<u32>,
    /// Difficulty level: Easy, Medium, or Hard
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    /// Cuisine type
    #[validate(length(min = 1, message = "Cuisine type is required"))]
    pub cuisine: Option<String>,
}

/// Request payload for adding a comment to a recipe.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    /// Comment text (must not be empty)
    #[validate(custom(function = "validate_comment_text"))]
    #[schema(example = "Turned out great, thanks!")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_thai() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: "Pad Thai".to_string(),
            description: "A classic Thai noodle dish".to_string(),
            ingredients: vec!["200g rice noodles".to_string(), "2 eggs".to_string()],
            instructions: vec!["Soak noodles".to_string(), "Stir fry".to_string()],
            image: String::new(),
            cooking_time: 20,
            servings: 2,
            difficulty: "Medium".to_string(),
            cuisine: "Thai".to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(pad_thai().validate().is_ok());
    }

    #[test]
    fn test_empty_payload_lists_every_violation() {
        // {} deserializes via the serde defaults, so validation sees every
        // missing field at once.
        let req: CreateRecipeRequest = serde_json::from_str("{}").unwrap();
        let errs = req.validate().unwrap_err();
        let fields = errs.field_errors();

        for field in [
            "title",
            "description",
            "ingredients",
            "instructions",
            "cooking_time",
            "servings",
            "difficulty",
            "cuisine",
        ] {
            assert!(fields.contains_key(field), "missing violation for {}", field);
        }
        // image is optional and must not be flagged
        assert!(!fields.contains_key("image"));
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        let mut req = pad_thai();
        req.difficulty = "Impossible".to_string();
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("difficulty"));
    }

    #[test]
    fn test_create_request_uses_camel_case_keys() {
        let req: CreateRecipeRequest = serde_json::from_str(
            r#"{
                "title": "Pad Thai",
                "description": "A classic Thai noodle dish",
                "ingredients": ["200g rice noodles", "2 eggs"],
                "instructions": ["Soak noodles", "Stir fry"],
                "cookingTime": 20,
                "servings": 2,
                "difficulty": "Medium",
                "cuisine": "Thai"
            }"#,
        )
        .unwrap();
        assert_eq!(req.cooking_time, 20);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_partial_fields_validate() {
        let req: UpdateRecipeRequest =
            serde_json::from_str(r#"{"servings": 4, "cuisine": "Thai"}"#).unwrap();
        assert!(req.validate().is_ok());

        let bad: UpdateRecipeRequest = serde_json::from_str(r#"{"servings": 0}"#).unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_comment_text_must_not_be_blank() {
        let blank = CommentRequest {
            text: "   ".to_string(),
        };
        assert!(blank.validate().is_err());

        let ok = CommentRequest {
            text: "Delicious".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
