//! Core traits for Recipe Book
//!
//! [`RecipeApi`] is the seam between the views and the network. The HTTP
//! client implements it; tests drive the workflows with an in-memory double.

use crate::error::RecipeResult;
use crate::types::{ImageUpload, Recipe, RecipeId, RecipePayload};

// ============================================================================
// RecipeApi Trait
// ============================================================================

/// Operations offered by the recipe REST API
///
/// Futures are not required to be `Send`; in the browser everything runs on
/// one thread.
///
/// # Example
///
/// ```rust,ignore
/// use recipe_core::{RecipeApi, RecipeId};
///
/// async fn titles(api: &impl RecipeApi) -> Vec<String> {
///     match api.list_recipes().await {
///         Ok(recipes) => recipes.into_iter().map(|r| r.title).collect(),
///         Err(_) => vec![],
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait RecipeApi {
    /// `GET /recipes`
    async fn list_recipes(&self) -> RecipeResult<Vec<Recipe>>;

    /// `GET /recipes/{id}`
    async fn get_recipe(&self, id: &RecipeId) -> RecipeResult<Recipe>;

    /// `POST /recipes`, returning the new id; the rest of the response is ignored
    async fn create_recipe(&self, payload: &RecipePayload) -> RecipeResult<RecipeId>;

    /// `PUT /recipes/{id}`, replacing title, description and ingredients
    async fn update_recipe(&self, id: &RecipeId, payload: &RecipePayload)
    -> RecipeResult<Recipe>;

    /// `DELETE /recipes/{id}`
    async fn delete_recipe(&self, id: &RecipeId) -> RecipeResult<()>;

    /// `POST /recipes/{id}/rating` with `{score}`; the response body is ignored
    async fn rate_recipe(&self, id: &RecipeId, score: i64) -> RecipeResult<()>;

    /// `POST /recipes/{id}/images` as multipart; the response body is ignored
    async fn upload_image(&self, id: &RecipeId, image: &ImageUpload) -> RecipeResult<()>;
}
