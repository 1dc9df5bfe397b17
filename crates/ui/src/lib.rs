//! # Recipe UI
//!
//! Dioxus front-end for Recipe Book.
//!
//! ## Features
//!
//! - Recipe listing with live title search
//! - Detail page with images, average rating and rating submission
//! - Create / edit form with optional image upload
//!
//! Builds for the browser with the `web` feature and as a native window
//! with `desktop`.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use recipe_client;
pub use recipe_core;

pub use app::{App, Route, Shell};
pub use components::{
    ErrorBanner, ImageInput, LoadingIndicator, NumberInput, RatingStars, TextArea, TextInput,
};
pub use hooks::{UseFetch, use_fetch};
pub use pages::{EditRecipe, Home, NewRecipe, RecipeDetail, RecipeForm};
pub use state::{use_api, use_api_provider, use_client_config};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Recipe Book";

/// Application display title
pub const TITLE: &str = "Recipe Book";

/// CSS styles for the application, embedded at build time
pub(crate) const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Recipe Book application on the platform picked by cargo features
///
/// ```rust,ignore
/// fn main() {
///     recipe_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 600.0)),
                )
                .with_menu(None),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

// ============================================================================
// Tests
// ============================================================================
