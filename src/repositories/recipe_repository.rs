//! Recipe repository for all MongoDB operations related to recipes.
//!
//! The recipe document is an aggregate: likes and comments are embedded,
//! and every mutation of them is a single server-side update so concurrent
//! toggles and comments cannot drop each other's writes.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_RECIPES;
use crate::errors::ApiError;
use crate::models::Recipe;

/// Repository for recipe-related database operations.
pub struct RecipeRepository {
    collection: Collection<Recipe>,
}

impl RecipeRepository {
    /// Create a new RecipeRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_RECIPES),
        }
    }

    /// Create database indexes for the recipes collection.
    ///
    /// Listing sorts by creation time and ownership checks filter on the
    /// author, so both get an index.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for recipes collection...");

        let indexes = vec![
            IndexModel::builder().keys(doc! { "author": 1 }).build(),
            IndexModel::builder().keys(doc! { "createdAt": -1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Recipe indexes created successfully");
        Ok(())
    }

    /// Insert a new recipe into the database.
    pub async fn insert(&self, recipe: &Recipe) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(recipe).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::InternalServerError("Inserted id was not an ObjectId".into()))
    }

    /// Find a recipe by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Recipe>, ApiError> {
        debug!("Repository: Finding recipe by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a recipe only if it is owned by the given author.
    pub async fn find_by_id_and_author(
        &self,
        id: ObjectId,
        author: ObjectId,
    ) -> Result<Option<Recipe>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "author": author })
            .await?)
    }

    /// Find all recipes matching a filter, newest-created first.
    pub async fn find_with_filter(&self, filter: Document) -> Result<Vec<Recipe>, ApiError> {
        debug!("Repository: Finding recipes with filter: {:?}", filter);
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply a `$set` update to a recipe, gated on ownership.
    ///
    /// Matches zero documents when the recipe is absent OR owned by someone
    /// else; callers translate that into a single indistinguishable error.
    pub async fn update_by_author(
        &self,
        id: ObjectId,
        author: ObjectId,
        update: Document,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id, "author": author }, doc! { "$set": update })
            .await?)
    }

    /// Delete a recipe, gated on ownership. Returns the deleted document.
    pub async fn delete_by_author(
        &self,
        id: ObjectId,
        author: ObjectId,
    ) -> Result<Option<Recipe>, ApiError> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id, "author": author })
            .await?)
    }

    /// Toggle a user's like on a recipe in one atomic update.
    ///
    /// Uses an aggregation-pipeline update so the membership test and the
    /// add/remove happen server-side in a single read-modify-write;
    /// concurrent toggles on the same recipe cannot lose updates.
    pub async fn toggle_like(
        &self,
        id: ObjectId,
        user_id: ObjectId,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        let pipeline = vec![doc! {
            "$set": {
                "likes": {
                    "$cond": [
                        { "$in": [user_id, "$likes"] },
                        { "$setDifference": ["$likes", [user_id]] },
                        { "$concatArrays": ["$likes", [user_id]] },
                    ]
                },
                "updatedAt": mongodb::bson::DateTime::now(),
            }
        }];

        Ok(self
            .collection
            .update_one(doc! { "_id": id }, pipeline)
            .await?)
    }

    /// Append a comment to a recipe's comment list atomically.
    ///
    /// `$push` preserves insertion order under concurrent writers.
    pub async fn push_comment(
        &self,
        id: ObjectId,
        author: ObjectId,
        text: &str,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        let now = mongodb::bson::DateTime::now();
        Ok(self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$push": {
                        "comments": {
                            "author": author,
                            "text": text,
                            "createdAt": now,
                        }
                    },
                    "$set": { "updatedAt": now },
                },
            )
            .await?)
    }
}
