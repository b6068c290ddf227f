//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Simple message response (e.g. after deleting a recipe).
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Status message
    #[schema(example = "Recipe deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
