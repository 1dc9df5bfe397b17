//! Recipe detail page
//!
//! Shows one recipe with its images and average rating, and lets the user
//! post a new score. After a rating is accepted the recipe is fetched again,
//! so the average on screen is always the server's.

use dioxus::prelude::*;
use recipe_core::{Recipe, RecipeApi, RecipeId, ViewState, rate_and_refresh};

use crate::app::Route;
use crate::components::{ErrorBanner, LoadingIndicator, NumberInput, RatingStars};
use crate::hooks::use_fetch;
use crate::state::{use_api, use_client_config};

/// Detail view for `/recipes/:id`
#[component]
pub fn RecipeDetail(id: String) -> Element {
    let api = use_api();
    let mut recipe = use_fetch::<Recipe>();

    let retry = {
        let api = api.clone();
        let id = id.clone();
        move |_: ()| {
            let api = api.clone();
            let id = RecipeId::from(id.clone());
            recipe.start(async move { api.get_recipe(&id).await });
        }
    };

    // Re-runs whenever the route id changes; the previous fetch is cancelled
    use_effect(use_reactive!(|(id,)| {
        let api = api.clone();
        let id = RecipeId::from(id);
        recipe.start(async move { api.get_recipe(&id).await });
    }));

    match recipe.current() {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingIndicator {}
        },
        ViewState::Failed(err) => rsx! {
            ErrorBanner { message: err.user_message(), on_retry: retry }
            Link { class: "link", to: Route::Home {}, "Back to recipes" }
        },
        ViewState::Loaded(loaded) => rsx! {
            RecipeView { recipe: loaded, on_refreshed: move |r: Recipe| recipe.set_loaded(r) }
        },
    }
}

/// Body of the detail page once the recipe is available
#[component]
fn RecipeView(recipe: Recipe, on_refreshed: EventHandler<Recipe>) -> Element {
    let api = use_api();
    let config = use_client_config();
    let navigator = use_navigator();

    let mut score = use_signal(|| 0_i64);
    let mut submitting = use_signal(|| false);
    let mut action_error: Signal<Option<String>> = use_signal(|| None);

    let average = recipe.average_rating();
    let rating_count = recipe.ratings.len();
    let image_urls: Vec<String> = recipe.images.iter().map(|f| config.image_url(f)).collect();

    let rate = {
        let api = api.clone();
        let id = recipe.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let id = id.clone();
            let value = score();
            submitting.set(true);
            action_error.set(None);

            spawn(async move {
                match rate_and_refresh(&api, &id, value).await {
                    Ok(updated) => on_refreshed.call(updated),
                    Err(err) => action_error.set(Some(format!("Rating failed: {}", err.user_message()))),
                }
                submitting.set(false);
            });
        }
    };

    let delete = {
        let api = api.clone();
        let id = recipe.id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let id = id.clone();
            action_error.set(None);

            spawn(async move {
                match api.delete_recipe(&id).await {
                    Ok(()) => {
                        tracing::info!(recipe_id = %id, "Deleted recipe");
                        navigator.push(Route::Home {});
                    }
                    Err(err) => action_error.set(Some(format!("Delete failed: {}", err.user_message()))),
                }
            });
        }
    };

    rsx! {
        article {
            class: "page recipe-detail",

            h1 { class: "recipe-title", "{recipe.title}" }
            p { class: "recipe-description", "{recipe.description}" }

            if !recipe.ingredients.is_empty() {
                ul {
                    class: "ingredients",
                    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
                        li { key: "{i}", "{ingredient}" }
                    }
                }
            }

            div {
                class: "recipe-images",
                for url in image_urls {
                    img { key: "{url}", class: "recipe-image", src: "{url}", alt: "" }
                }
            }

            div {
                class: "recipe-rating",
                RatingStars { value: average, read_only: true }
                span { class: "rating-count", "({rating_count})" }
            }

            if let Some(msg) = action_error() {
                ErrorBanner { message: msg, on_dismiss: move |_: ()| action_error.set(None) }
            }

            div {
                class: "rate-form",
                RatingStars {
                    value: score() as f64,
                    on_change: move |rank: u8| score.set(i64::from(rank)),
                }
                NumberInput {
                    value: score(),
                    on_change: move |v: i64| score.set(v),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: rate,
                    "Rate"
                }
            }

            div {
                class: "recipe-actions",
                Link {
                    class: "link",
                    to: Route::EditRecipe { id: recipe.id.to_string() },
                    "Edit"
                }
                button {
                    class: "btn btn-danger btn-sm",
                    r#type: "button",
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}
