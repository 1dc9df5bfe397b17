//! Page components, one per route
//!
//! - **Home**: recipe listing with title search
//! - **RecipeDetail**: one recipe, its images, rating and actions
//! - **RecipeForm**: create / edit form (mounted as `NewRecipe` and `EditRecipe`)

pub mod home;
pub mod recipe_detail;
pub mod recipe_form;

pub use home::Home;
pub use recipe_detail::RecipeDetail;
pub use recipe_form::{EditRecipe, NewRecipe, RecipeForm};
