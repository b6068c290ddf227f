//! Recipe service for CRUD, search, likes, and comments.

use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::{
    ERR_FAILED_FETCH_RECIPE, ERR_INVALID_DIFFICULTY, ERR_RECIPE_NOT_FOUND,
    ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED,
};
use crate::errors::ApiError;
use crate::models::{
    AuthorSummary, CreateRecipeRequest, Difficulty, Recipe, RecipeResponse, UpdateRecipeRequest,
};
use crate::repositories::{RecipeRepository, UserRepository};

pub struct RecipeService {
    recipes: Arc<RecipeRepository>,
    users: Arc<UserRepository>,
}

impl RecipeService {
    pub fn new(db: &Database) -> Self {
        Self {
            recipes: Arc::new(RecipeRepository::new(db)),
            users: Arc::new(UserRepository::new(db)),
        }
    }

    /// Get the underlying recipe repository (for index creation at startup).
    pub fn repository(&self) -> Arc<RecipeRepository> {
        Arc::clone(&self.recipes)
    }

    /// List recipes, newest-created first, with author summaries attached.
    pub async fn list(
        &self,
        search: Option<&str>,
        difficulty: Option<&str>,
        cuisine: Option<&str>,
    ) -> Result<Vec<RecipeResponse>, ApiError> {
        let filter = build_list_filter(search, difficulty, cuisine);
        debug!("Listing recipes with filter: {:?}", filter);

        let recipes = self.recipes.find_with_filter(filter).await?;
        let authors = self.author_map(&recipes).await?;

        Ok(recipes
            .into_iter()
            .map(|r| RecipeResponse::from_recipe(r, &authors))
            .collect())
    }

    /// Fetch one recipe with author and comment-author summaries attached.
    pub async fn get(&self, id: &str) -> Result<RecipeResponse, ApiError> {
        let object_id = parse_recipe_id(id, ERR_RECIPE_NOT_FOUND)?;

        let recipe = self
            .recipes
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_RECIPE_NOT_FOUND.to_string()))?;

        self.populate(recipe).await
    }

    /// Create a recipe owned by the given author.
    pub async fn create(
        &self,
        author: ObjectId,
        req: CreateRecipeRequest,
    ) -> Result<RecipeResponse, ApiError> {
        let difficulty = Difficulty::from_str(&req.difficulty)
            .ok_or_else(|| ApiError::ValidationError(vec![ERR_INVALID_DIFFICULTY.to_string()]))?;

        let now = mongodb::bson::DateTime::now();
        let recipe = Recipe {
            id: None,
            title: req.title,
            description: req.description,
            ingredients: req.ingredients,
            instructions: req.instructions,
            image: req.image,
            cooking_time: req.cooking_time,
            servings: req.servings,
            difficulty,
            cuisine: req.cuisine,
            author,
            likes: vec![],
            comments: vec![],
            created_at: now,
            updated_at: now,
        };

        let id = self.recipes.insert(&recipe).await?;
        info!("Created recipe {} for author {}", id, author);

        self.populate(Recipe {
            id: Some(id),
            ..recipe
        })
        .await
    }

    /// Update a recipe's mutable fields, gated on ownership.
    ///
    /// Absent or not owned by the caller are deliberately the same error,
    /// so a non-author learns nothing about the recipe's existence.
    pub async fn update(
        &self,
        id: &str,
        author: ObjectId,
        req: UpdateRecipeRequest,
    ) -> Result<RecipeResponse, ApiError> {
        let object_id = parse_recipe_id(id, ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED)?;

        let mut update_doc = doc! {};

        if let Some(ref title) = req.title {
            update_doc.insert("title", title.clone());
        }
        if let Some(ref description) = req.description {
            update_doc.insert("description", description.clone());
        }
        if let Some(ref ingredients) = req.ingredients {
            update_doc.insert("ingredients", ingredients.clone());
        }
        if let Some(ref instructions) = req.instructions {
            update_doc.insert("instructions", instructions.clone());
        }
        if let Some(ref image) = req.image {
            update_doc.insert("image", image.clone());
        }
        if let Some(cooking_time) = req.cooking_time {
            update_doc.insert("cookingTime", cooking_time);
        }
        if let Some(servings) = req.servings {
            update_doc.insert("servings", servings);
        }
        if let Some(ref difficulty) = req.difficulty {
            let difficulty = Difficulty::from_str(difficulty).ok_or_else(|| {
                ApiError::ValidationError(vec![ERR_INVALID_DIFFICULTY.to_string()])
            })?;
            update_doc.insert("difficulty", difficulty.to_string());
        }
        if let Some(ref cuisine) = req.cuisine {
            update_doc.insert("cuisine", cuisine.clone());
        }

        if update_doc.is_empty() {
            // Nothing to change, but the ownership contract still applies.
            let recipe = self
                .recipes
                .find_by_id_and_author(object_id, author)
                .await?
                .ok_or_else(|| {
                    ApiError::NotFound(ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED.to_string())
                })?;
            return self.populate(recipe).await;
        }

        update_doc.insert("updatedAt", mongodb::bson::DateTime::now());

        let result = self
            .recipes
            .update_by_author(object_id, author, update_doc)
            .await?;

        if result.matched_count == 0 {
            warn!(
                "Update rejected for recipe {}: absent or not owned by {}",
                object_id, author
            );
            return Err(ApiError::NotFound(
                ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED.to_string(),
            ));
        }

        info!("Updated recipe {} by author {}", object_id, author);
        self.fetch_populated(object_id).await
    }

    /// Delete a recipe (with its embedded likes and comments), gated on
    /// ownership.
    pub async fn delete(&self, id: &str, author: ObjectId) -> Result<(), ApiError> {
        let object_id = parse_recipe_id(id, ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED)?;

        self.recipes
            .delete_by_author(object_id, author)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_RECIPE_NOT_FOUND_OR_UNAUTHORIZED.to_string()))?;

        info!("Deleted recipe {} by author {}", object_id, author);
        Ok(())
    }

    /// Toggle the user's like on a recipe and return the updated recipe.
    pub async fn toggle_like(&self, id: &str, user_id: ObjectId) -> Result<RecipeResponse, ApiError> {
        let object_id = parse_recipe_id(id, ERR_RECIPE_NOT_FOUND)?;

        let result = self.recipes.toggle_like(object_id, user_id).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_RECIPE_NOT_FOUND.to_string()));
        }

        debug!("Toggled like on recipe {} for user {}", object_id, user_id);
        self.fetch_populated(object_id).await
    }

    /// Append a comment and return the updated recipe.
    pub async fn add_comment(
        &self,
        id: &str,
        user_id: ObjectId,
        text: &str,
    ) -> Result<RecipeResponse, ApiError> {
        let object_id = parse_recipe_id(id, ERR_RECIPE_NOT_FOUND)?;

        let result = self.recipes.push_comment(object_id, user_id, text).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_RECIPE_NOT_FOUND.to_string()));
        }

        debug!("Added comment on recipe {} by user {}", object_id, user_id);
        self.fetch_populated(object_id).await
    }

    /// Batch-resolve author summaries for a set of recipes (recipe authors
    /// plus every comment author) in one query.
    async fn author_map(
        &self,
        recipes: &[Recipe],
    ) -> Result<HashMap<ObjectId, AuthorSummary>, ApiError> {
        let mut ids: Vec<ObjectId> = Vec::new();
        for recipe in recipes {
            ids.push(recipe.author);
            ids.extend(recipe.comments.iter().map(|c| c.author));
        }
        ids.sort_unstable();
        ids.dedup();

        let users = self.users.find_by_ids(&ids).await?;
        Ok(users
            .iter()
            .filter_map(|u| u.id.map(|id| (id, AuthorSummary::from_user(u))))
            .collect())
    }

    async fn populate(&self, recipe: Recipe) -> Result<RecipeResponse, ApiError> {
        let authors = self.author_map(std::slice::from_ref(&recipe)).await?;
        Ok(RecipeResponse::from_recipe(recipe, &authors))
    }

    async fn fetch_populated(&self, id: ObjectId) -> Result<RecipeResponse, ApiError> {
        let recipe = self
            .recipes
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_RECIPE.to_string()))?;
        self.populate(recipe).await
    }
}

/// Parse a recipe id from its hex path segment.
///
/// An unparseable id can never match a stored recipe, so it maps to the
/// same error as an absent one.
fn parse_recipe_id(id: &str, not_found_msg: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::NotFound(not_found_msg.to_string()))
}

/// Build the listing filter: optional case-insensitive search over title,
/// description, and cuisine, plus exact-match difficulty and cuisine.
fn build_list_filter(
    search: Option<&str>,
    difficulty: Option<&str>,
    cuisine: Option<&str>,
) -> Document {
    let mut filter = doc! {};

    if let Some(difficulty) = difficulty {
        if !difficulty.trim().is_empty() {
            filter.insert("difficulty", difficulty);
        }
    }

    if let Some(cuisine) = cuisine {
        if !cuisine.trim().is_empty() {
            filter.insert("cuisine", cuisine);
        }
    }

    if let Some(search) = search {
        if !search.trim().is_empty() {
            let search_pattern = regex::escape(search.trim());
            let search_regex = mongodb::bson::Regex {
                pattern: search_pattern,
                options: "i".to_string(),
            };
            filter.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": search_regex.clone() } },
                    doc! { "description": { "$regex": search_regex.clone() } },
                    doc! { "cuisine": { "$regex": search_regex } },
                ],
            );
        }
    }

    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_builds_empty_filter() {
        assert!(build_list_filter(None, None, None).is_empty());
        assert!(build_list_filter(Some("  "), Some(""), None).is_empty());
    }

    #[test]
    fn test_exact_match_filters() {
        let filter = build_list_filter(None, Some("Medium"), Some("Thai"));
        assert_eq!(filter.get_str("difficulty").unwrap(), "Medium");
        assert_eq!(filter.get_str("cuisine").unwrap(), "Thai");
        assert!(!filter.contains_key("$or"));
    }

    #[test]
    fn test_search_spans_title_description_cuisine() {
        let filter = build_list_filter(Some("Thai"), None, None);
        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 3);
    }

    #[test]
    fn test_search_term_is_regex_escaped() {
        let filter = build_list_filter(Some("pad (thai)"), None, None);
        let or = filter.get_array("$or").unwrap();
        let first = or[0].as_document().unwrap();
        let regex = first.get_document("title").unwrap();
        match regex.get("$regex").unwrap() {
            mongodb::bson::Bson::RegularExpression(re) => {
                assert!(re.pattern.contains("\\(thai\\)"));
                assert_eq!(re.options, "i");
            }
            other => panic!("expected a regex, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_recipe_id_rejects_garbage_as_not_found() {
        assert!(parse_recipe_id(&ObjectId::new().to_hex(), ERR_RECIPE_NOT_FOUND).is_ok());
        assert!(matches!(
            parse_recipe_id("nope", ERR_RECIPE_NOT_FOUND),
            Err(ApiError::NotFound(_))
        ));
    }
}
