//! Root component and route table
//!
//! The whole route table lives in [`Route`]. Every page is rendered inside
//! [`Shell`], which carries the navigation links.

use dioxus::prelude::*;
use recipe_core::ClientConfig;

use crate::pages::{EditRecipe, Home, NewRecipe, RecipeDetail};
use crate::state::use_api_provider;
use crate::{STYLES, TITLE};

// ============================================================================
// Routes
// ============================================================================

/// Every path the application answers to
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/recipes/:id")]
        RecipeDetail { id: String },

        #[route("/new")]
        NewRecipe {},

        #[route("/edit/:id")]
        EditRecipe { id: String },
}

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_api_provider(ClientConfig::from_env);

    use_effect(|| {
        tracing::info!("Recipe Book UI initialized");
    });

    rsx! {
        document::Title { "{TITLE}" }
        style { {STYLES} }
        Router::<Route> {}
    }
}

// ============================================================================
// Shell
// ============================================================================

/// Layout shared by all pages: navigation bar plus the routed page
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "container",

            nav {
                class: "nav",
                Link { class: "nav-link", to: Route::Home {}, "Home" }
                Link { class: "nav-link", to: Route::NewRecipe {}, "Add Recipe" }
            }

            main {
                Outlet::<Route> {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
