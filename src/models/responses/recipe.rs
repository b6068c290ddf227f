//! Recipe-related response models.
//!
//! Recipes go out with author identity summaries attached, the way the
//! storage layer's references get populated for the client: the recipe
//! author and every comment author are resolved to `{id, username,
//! profilePicture}` via a single batched user lookup.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::models::{Difficulty, Recipe, User};

/// Author identity summary attached to recipes and comments.
#[derive(Debug, Serialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's username
    #[schema(example = "johndoe")]
    pub username: String,
    /// URL to the user's profile picture
    pub profile_picture: String,
}

impl AuthorSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }

    /// Placeholder for authors whose account no longer exists.
    pub fn unknown(id: ObjectId) -> Self {
        Self {
            id: id.to_hex(),
            username: "unknown".to_string(),
            profile_picture: String::new(),
        }
    }
}

/// Comment returned in API responses, author populated.
#[derive(Debug, Serialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Comment author
    pub author: AuthorSummary,
    /// Comment text
    pub text: String,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Recipe returned in API responses, author and comment authors populated.
#[derive(Debug, Serialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    /// Recipe's unique identifier
    #[schema(example = "507f191e810c19729de860ea")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    /// Recipe author
    pub author: AuthorSummary,
    /// Hex ids of users who liked the recipe
    pub likes: Vec<String>,
    /// Comments in insertion order
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeResponse {
    /// Build a response from a recipe document and a map of already-fetched
    /// author summaries. Authors missing from the map (deleted accounts)
    /// fall back to a placeholder summary.
    pub fn from_recipe(recipe: Recipe, authors: &HashMap<ObjectId, AuthorSummary>) -> Self {
        let author = authors
            .get(&recipe.author)
            .cloned()
            .unwrap_or_else(|| AuthorSummary::unknown(recipe.author));

        let comments = recipe
            .comments
            .into_iter()
            .map(|c| CommentResponse {
                author: authors
                    .get(&c.author)
                    .cloned()
                    .unwrap_or_else(|| AuthorSummary::unknown(c.author)),
                text: c.text,
                created_at: DateTime::from_timestamp_millis(c.created_at.timestamp_millis())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            cuisine: recipe.cuisine,
            author,
            likes: recipe.likes.iter().map(|id| id.to_hex()).collect(),
            comments,
            created_at: DateTime::from_timestamp_millis(recipe.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(recipe.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;

    fn sample_recipe(author: ObjectId) -> Recipe {
        let now = mongodb::bson::DateTime::now();
        Recipe {
            id: Some(ObjectId::new()),
            title: "Pad Thai".to_string(),
            description: "A classic Thai noodle dish".to_string(),
            ingredients: vec!["200g rice noodles".to_string(), "2 eggs".to_string()],
            instructions: vec!["Soak noodles".to_string(), "Stir fry".to_string()],
            image: String::new(),
            cooking_time: 20,
            servings: 2,
            difficulty: Difficulty::Medium,
            cuisine: "Thai".to_string(),
            author,
            likes: vec![],
            comments: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_author_summary_attached_from_map() {
        let author_id = ObjectId::new();
        let mut authors = HashMap::new();
        authors.insert(
            author_id,
            AuthorSummary {
                id: author_id.to_hex(),
                username: "thaicook".to_string(),
                profile_picture: String::new(),
            },
        );

        let resp = RecipeResponse::from_recipe(sample_recipe(author_id), &authors);
        assert_eq!(resp.author.username, "thaicook");
        assert!(resp.likes.is_empty());
        assert!(resp.comments.is_empty());
    }

    #[test]
    fn test_missing_author_falls_back_to_placeholder() {
        let author_id = ObjectId::new();
        let resp = RecipeResponse::from_recipe(sample_recipe(author_id), &HashMap::new());
        assert_eq!(resp.author.username, "unknown");
        assert_eq!(resp.author.id, author_id.to_hex());
    }

    #[test]
    fn test_comment_authors_populated_in_order() {
        let author_id = ObjectId::new();
        let commenter = ObjectId::new();
        let mut recipe = sample_recipe(author_id);
        let now = mongodb::bson::DateTime::now();
        recipe.comments = vec![
            Comment {
                author: commenter,
                text: "first".to_string(),
                created_at: now,
            },
            Comment {
                author: commenter,
                text: "second".to_string(),
                created_at: now,
            },
        ];

        let resp = RecipeResponse::from_recipe(recipe, &HashMap::new());
        assert_eq!(resp.comments.len(), 2);
        assert_eq!(resp.comments[0].text, "first");
        assert_eq!(resp.comments[1].text, "second");
    }

    #[test]
    fn test_likes_serialized_as_hex_ids() {
        let author_id = ObjectId::new();
        let liker = ObjectId::new();
        let mut recipe = sample_recipe(author_id);
        recipe.likes = vec![liker];

        let resp = RecipeResponse::from_recipe(recipe, &HashMap::new());
        assert_eq!(resp.likes, vec![liker.to_hex()]);

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("cookingTime").is_some());
        assert_eq!(json["difficulty"], "Medium");
    }
}
