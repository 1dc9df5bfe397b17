//! # Recipe Core
//!
//! Core types, traits, and error handling for Recipe Book.
//!
//! This crate holds everything the views need that does not touch the DOM:
//!
//! - **Types**: `Recipe`, request payloads, the form draft, image uploads
//! - **Derived values**: average rating, title filter, ingredient parsing
//! - **Errors**: `RequestError` for single requests, `SaveError` for the save flow
//! - **View state**: the `ViewState` fetch lifecycle
//! - **Workflows**: save-with-image and rate-then-refresh over any `RecipeApi`
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod view_state;
pub mod workflow;

// Re-export commonly used items at crate root
pub use config::ClientConfig;
pub use error::{RecipeResult, RequestError, SaveError};
pub use traits::RecipeApi;
pub use types::{
    FormMode, ImageUpload, RatingPayload, Recipe, RecipeDraft, RecipeId, RecipePayload,
    average_rating, filter_by_title, join_ingredients, parse_ingredients,
};
pub use view_state::ViewState;
pub use workflow::{rate_and_refresh, save_recipe};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
