//! Recipe listing page
//!
//! Loads the whole collection once on mount and filters it locally by
//! title on every keystroke.

use dioxus::prelude::*;
use recipe_core::{Recipe, RecipeApi, ViewState, filter_by_title};

use crate::app::Route;
use crate::components::{ErrorBanner, LoadingIndicator, RatingStars, TextInput};
use crate::hooks::use_fetch;
use crate::state::use_api;

/// Listing of all recipes with a title search box
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let mut recipes = use_fetch::<Vec<Recipe>>();
    let mut search_query = use_signal(String::new);

    let load = move || {
        let api = api.clone();
        recipes.start(async move { api.list_recipes().await });
    };

    use_effect({
        let mut load = load.clone();
        move || load()
    });

    let query = search_query.read().clone();

    rsx! {
        div {
            class: "page",

            TextInput {
                value: query.clone(),
                placeholder: Some("Search...".to_string()),
                on_change: move |v: String| search_query.set(v),
            }

            match recipes.current() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    LoadingIndicator { label: "Loading recipes...".to_string() }
                },
                ViewState::Failed(err) => rsx! {
                    ErrorBanner {
                        message: err.user_message(),
                        on_retry: {
                            let mut load = load.clone();
                            move |_: ()| load()
                        },
                    }
                },
                ViewState::Loaded(all) => {
                    let shown = filter_by_title(&all, &query);
                    rsx! {
                        if shown.is_empty() {
                            p {
                                class: "empty",
                                if all.is_empty() { "No recipes yet." } else { "No recipes match your search." }
                            }
                        }
                        ul {
                            class: "recipe-list",
                            for recipe in shown {
                                RecipeRow { key: "{recipe.id}", recipe: recipe }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One listing row: title link plus read-only average
#[component]
fn RecipeRow(recipe: Recipe) -> Element {
    let average = recipe.average_rating();

    rsx! {
        li {
            class: "recipe-row",
            Link {
                class: "link",
                to: Route::RecipeDetail { id: recipe.id.to_string() },
                "{recipe.title}"
            }
            RatingStars { value: average, read_only: true }
        }
    }
}
