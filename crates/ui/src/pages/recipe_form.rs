//! Create / edit form
//!
//! One component serves both `/new` and `/edit/:id`. In edit mode the
//! existing recipe is fetched first and seeds the draft. Saving writes the
//! recipe, uploads the optional image, then opens the detail page.

use dioxus::prelude::*;
use recipe_core::{
    FormMode, ImageUpload, Recipe, RecipeApi, RecipeDraft, RecipeId, SaveError, ViewState,
    save_recipe,
};

use crate::app::Route;
use crate::components::{ErrorBanner, ImageInput, LoadingIndicator, TextArea, TextInput};
use crate::hooks::use_fetch;
use crate::state::use_api;

/// Route target for `/new`
#[component]
pub fn NewRecipe() -> Element {
    rsx! {
        RecipeForm {}
    }
}

/// Route target for `/edit/:id`
#[component]
pub fn EditRecipe(id: String) -> Element {
    rsx! {
        RecipeForm { id: Some(id) }
    }
}

/// Recipe form; creates when `id` is `None`, edits otherwise
#[component]
pub fn RecipeForm(#[props(default)] id: Option<String>) -> Element {
    let api = use_api();
    let navigator = use_navigator();

    let mut existing = use_fetch::<Recipe>();
    let mut draft = use_signal(RecipeDraft::default);
    let mut image: Signal<Option<ImageUpload>> = use_signal(|| None);
    let mut saving = use_signal(|| false);
    let mut submit_error: Signal<Option<SaveError>> = use_signal(|| None);
    let mut submit_mode = use_signal(|| FormMode::from(id.clone()));

    let is_edit = id.is_some();
    let route_id = id.clone();

    let load = {
        let api = api.clone();
        move |id: RecipeId| {
            let api = api.clone();
            existing.start(async move {
                let result = api.get_recipe(&id).await;
                if let Ok(recipe) = &result {
                    draft.set(RecipeDraft::from_recipe(recipe));
                }
                result
            });
        }
    };

    let effect_load = load.clone();
    use_effect(use_reactive!(|(id,)| {
        let mut load = effect_load.clone();
        submit_mode.set(FormMode::from(id.clone()));
        submit_error.set(None);
        match id {
            Some(id) => load(RecipeId::from(id)),
            None => {
                existing.cancel();
                draft.set(RecipeDraft::default());
            }
        }
    }));

    let onsubmit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if saving() {
                return;
            }

            let api = api.clone();
            let mode = submit_mode();
            let current = draft.read().clone();
            let file = image.read().clone();
            saving.set(true);
            submit_error.set(None);

            spawn(async move {
                match save_recipe(&api, &mode, &current, file.as_ref()).await {
                    Ok(recipe_id) => {
                        navigator.push(Route::RecipeDetail { id: recipe_id.to_string() });
                    }
                    Err(err) => {
                        // A recipe written before the failure is updated on the next submit
                        submit_mode.set(mode.after_failure(&err));
                        submit_error.set(Some(err));
                    }
                }
                saving.set(false);
            });
        }
    };

    if is_edit {
        match existing.current() {
            ViewState::Idle | ViewState::Loading => {
                return rsx! {
                    LoadingIndicator {}
                };
            }
            ViewState::Failed(err) => {
                let retry_id = route_id.clone();
                let mut load = load.clone();
                return rsx! {
                    ErrorBanner {
                        message: err.user_message(),
                        on_retry: move |_: ()| {
                            if let Some(id) = retry_id.clone() {
                                load(RecipeId::from(id));
                            }
                        },
                    }
                };
            }
            ViewState::Loaded(_) => {}
        }
    }

    let current = draft.read().clone();
    let selected = image.read().as_ref().map(|f| f.file_name.clone());
    let heading = if is_edit { "Edit Recipe" } else { "New Recipe" };

    rsx! {
        form {
            class: "page recipe-form",
            onsubmit: onsubmit,

            h1 { "{heading}" }

            if let Some(err) = submit_error() {
                SaveErrorBanner { error: err, on_dismiss: move |_: ()| submit_error.set(None) }
            }

            TextInput {
                label: Some("Title".to_string()),
                value: current.title.clone(),
                disabled: saving(),
                on_change: move |v: String| draft.write().title = v,
            }

            TextArea {
                label: Some("Description".to_string()),
                value: current.description.clone(),
                disabled: saving(),
                on_change: move |v: String| draft.write().description = v,
            }

            TextInput {
                label: Some("Ingredients (comma separated)".to_string()),
                value: current.ingredients.clone(),
                placeholder: Some("flour, water, salt".to_string()),
                disabled: saving(),
                on_change: move |v: String| draft.write().ingredients = v,
            }

            ImageInput {
                label: Some("Image".to_string()),
                selected: selected,
                on_select: move |file: Option<ImageUpload>| image.set(file),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save" }
            }
        }
    }
}

/// Error banner for a failed save, with a link when the recipe itself was stored
#[component]
fn SaveErrorBanner(error: SaveError, on_dismiss: EventHandler<()>) -> Element {
    let message = match &error {
        SaveError::Write(err) => format!("Could not save the recipe: {}", err.user_message()),
        SaveError::ImageUpload { source, .. } => format!(
            "The recipe was saved but the image could not be uploaded: {}",
            source.user_message()
        ),
    };

    rsx! {
        ErrorBanner { message: message, on_dismiss: move |_: ()| on_dismiss.call(()) }
        if let Some(saved) = error.saved_recipe() {
            Link {
                class: "link",
                to: Route::RecipeDetail { id: saved.to_string() },
                "View saved recipe"
            }
        }
    }
}
