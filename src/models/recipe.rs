//! Recipe document model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Recipe difficulty level.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Parse a difficulty from its wire representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Comment embedded in a recipe document.
///
/// Comments are an ordered list; new comments are appended with `$push`, so
/// insertion order is preserved under concurrent writes.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: ObjectId,
    pub text: String,
    pub created_at: mongodb::bson::DateTime,
}

/// Recipe document stored in MongoDB.
///
/// The recipe is an aggregate: `likes` and `comments` are embedded and every
/// mutation of them goes through a single atomic update on the document.
/// `author` is set at creation and immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: String,
    /// Minutes, >= 1.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub author: ObjectId,
    /// Set semantics: each user appears at most once.
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("easy"), None);
        assert_eq!(Difficulty::from_str(""), None);
    }

    #[test]
    fn test_difficulty_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"Medium\""
        );
    }

    #[test]
    fn test_recipe_document_round_trip_uses_camel_case() {
        let now = mongodb::bson::DateTime::now();
        let recipe = Recipe {
            id: None,
            title: "Pad Thai".to_string(),
            description: "A classic Thai noodle dish".to_string(),
            ingredients: vec!["200g rice noodles".to_string(), "2 eggs".to_string()],
            instructions: vec!["Soak noodles".to_string(), "Stir fry".to_string()],
            image: String::new(),
            cooking_time: 20,
            servings: 2,
            difficulty: Difficulty::Medium,
            cuisine: "Thai".to_string(),
            author: ObjectId::new(),
            likes: vec![],
            comments: vec![],
            created_at: now,
            updated_at: now,
        };

        let doc = mongodb::bson::to_document(&recipe).unwrap();
        assert!(doc.contains_key("cookingTime"));
        assert!(doc.contains_key("createdAt"));
        assert_eq!(doc.get_str("difficulty").unwrap(), "Medium");

        let back: Recipe = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back.title, recipe.title);
        assert_eq!(back.cooking_time, 20);
    }
}
