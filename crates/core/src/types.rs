//! Recipe data model
//!
//! The recipe API owns and persists every recipe. Views only ever hold
//! transient copies of these types, so none of them carry identity rules
//! beyond treating [`RecipeId`] as opaque.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SaveError;

// ============================================================================
// Recipe Id
// ============================================================================

/// Server-issued recipe identifier
///
/// The API may hand out numbers or strings; both are kept as text and never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de;

        struct RecipeIdVisitor;

        impl de::Visitor<'_> for RecipeIdVisitor {
            type Value = RecipeId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer recipe id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecipeId, E> {
                Ok(RecipeId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RecipeId, E> {
                Ok(RecipeId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecipeId, E> {
                Ok(RecipeId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecipeId, E> {
                Ok(RecipeId(v.to_string()))
            }
        }

        deserializer.deserialize_any(RecipeIdVisitor)
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// A recipe as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// The API stores a nullable description; `null` reads as empty text
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Stored image filenames, resolved through `ClientConfig::image_url`
    #[serde(default)]
    pub images: Vec<String>,
    /// Individual scores, nominally 1 to 5
    #[serde(default)]
    pub ratings: Vec<f64>,
}

impl Recipe {
    /// Mean of all scores, 0 when unrated
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.ratings)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sum of ratings divided by their count, or 0 for an empty slice
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().sum::<f64>() / ratings.len() as f64
}

/// Recipes whose title contains `query`, ignoring case, in original order
///
/// An empty query keeps every recipe.
pub fn filter_by_title(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Split comma-separated text into trimmed ingredient names
///
/// Empty segments are kept, so `""` parses to `[""]`.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Inverse of [`parse_ingredients`] for seeding the edit form
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}

// ============================================================================
// Request payloads
// ============================================================================

/// Body of the create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Body of the rating request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPayload {
    pub score: i64,
}

/// Editable state of the recipe form
///
/// Ingredients are held as the raw comma-separated text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
}

impl RecipeDraft {
    /// Seed the form from an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: join_ingredients(&recipe.ingredients),
        }
    }

    pub fn to_payload(&self) -> RecipePayload {
        RecipePayload {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: parse_ingredients(&self.ingredients),
        }
    }
}

/// Whether the form creates a new recipe or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecipeId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Mode for the next submit after `err`
    ///
    /// A recipe that was written before the failure is edited from then on,
    /// so submitting again never creates it twice.
    pub fn after_failure(&self, err: &SaveError) -> FormMode {
        match err.saved_recipe() {
            Some(id) => FormMode::Edit(id.clone()),
            None => self.clone(),
        }
    }
}

impl From<Option<String>> for FormMode {
    fn from(id: Option<String>) -> Self {
        match id {
            Some(id) => FormMode::Edit(RecipeId::from(id)),
            None => FormMode::Create,
        }
    }
}

// ============================================================================
// Image upload
// ============================================================================

/// An image file picked in the form, ready to be sent as multipart data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageUpload {
    /// Multipart field name expected by the images endpoint
    pub const FIELD_NAME: &'static str = "image";

    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            bytes,
            content_type,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// Tests
// ============================================================================
