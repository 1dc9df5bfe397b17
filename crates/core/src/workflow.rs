//! Multi-request flows
//!
//! Each step is awaited before the next one starts; there is no
//! parallelism, retry, or rollback.

use crate::error::{RecipeResult, SaveError};
use crate::traits::RecipeApi;
use crate::types::{FormMode, ImageUpload, Recipe, RecipeDraft, RecipeId};

/// Write the recipe, then upload the optional image, returning the recipe id
///
/// In create mode the id comes from the create response; in edit mode it is
/// the one being edited. The image upload only starts after the write has
/// succeeded.
pub async fn save_recipe<A: RecipeApi>(
    api: &A,
    mode: &FormMode,
    draft: &RecipeDraft,
    image: Option<&ImageUpload>,
) -> Result<RecipeId, SaveError> {
    let payload = draft.to_payload();

    let recipe_id = match mode {
        FormMode::Create => {
            let created = api
                .create_recipe(&payload)
                .await
                .map_err(SaveError::Write)?;
            tracing::info!(recipe_id = %created, "Created recipe");
            created
        }
        FormMode::Edit(id) => {
            api.update_recipe(id, &payload)
                .await
                .map_err(SaveError::Write)?;
            tracing::info!(recipe_id = %id, "Updated recipe");
            id.clone()
        }
    };

    if let Some(image) = image {
        if let Err(source) = api.upload_image(&recipe_id, image).await {
            tracing::warn!(recipe_id = %recipe_id, error = %source, "Image upload failed after save");
            return Err(SaveError::ImageUpload { recipe_id, source });
        }
        tracing::info!(recipe_id = %recipe_id, file = %image.file_name, "Uploaded image");
    }

    Ok(recipe_id)
}

/// Post a score, then re-fetch the recipe so the caller shows server data
pub async fn rate_and_refresh<A: RecipeApi>(
    api: &A,
    id: &RecipeId,
    score: i64,
) -> RecipeResult<Recipe> {
    api.rate_recipe(id, score).await?;
    tracing::info!(recipe_id = %id, score, "Submitted rating");
    api.get_recipe(id).await
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use tokio_test::block_on;

    use super::*;
    use crate::error::RequestError;
    use crate::types::RecipePayload;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Get(String),
        Create(RecipePayload),
        Update(String, RecipePayload),
        Delete(String),
        Rate(String, i64),
        Upload(String, String),
    }

    /// Records every call; ratings land on the stored recipe like the real API
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<Call>>,
        stored: RefCell<Option<Recipe>>,
        next_id: u32,
        fail_upload: bool,
        fail_write: bool,
    }

    impl RecordingApi {
        fn with_recipe(recipe: Recipe) -> Self {
            Self {
                stored: RefCell::new(Some(recipe)),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn recipe_from(id: &str, payload: &RecipePayload) -> Recipe {
            Recipe {
                id: RecipeId::new(id),
                title: payload.title.clone(),
                description: payload.description.clone(),
                ingredients: payload.ingredients.clone(),
                images: vec![],
                ratings: vec![],
            }
        }
    }

    impl RecipeApi for RecordingApi {
        async fn list_recipes(&self) -> RecipeResult<Vec<Recipe>> {
            self.record(Call::List);
            Ok(self.stored.borrow().iter().cloned().collect())
        }

        async fn get_recipe(&self, id: &RecipeId) -> RecipeResult<Recipe> {
            self.record(Call::Get(id.to_string()));
            self.stored
                .borrow()
                .clone()
                .ok_or_else(|| RequestError::status(404, "Not Found"))
        }

        async fn create_recipe(&self, payload: &RecipePayload) -> RecipeResult<RecipeId> {
            self.record(Call::Create(payload.clone()));
            if self.fail_write {
                return Err(RequestError::status(500, "Internal Server Error"));
            }
            Ok(RecipeId::new(self.next_id.to_string()))
        }

        async fn update_recipe(
            &self,
            id: &RecipeId,
            payload: &RecipePayload,
        ) -> RecipeResult<Recipe> {
            self.record(Call::Update(id.to_string(), payload.clone()));
            if self.fail_write {
                return Err(RequestError::network("connection reset"));
            }
            Ok(Self::recipe_from(id.as_str(), payload))
        }

        async fn delete_recipe(&self, id: &RecipeId) -> RecipeResult<()> {
            self.record(Call::Delete(id.to_string()));
            Ok(())
        }

        async fn rate_recipe(&self, id: &RecipeId, score: i64) -> RecipeResult<()> {
            self.record(Call::Rate(id.to_string(), score));
            if let Some(recipe) = self.stored.borrow_mut().as_mut() {
                recipe.ratings.push(score as f64);
            }
            Ok(())
        }

        async fn upload_image(&self, id: &RecipeId, image: &ImageUpload) -> RecipeResult<()> {
            self.record(Call::Upload(id.to_string(), image.file_name.clone()));
            if self.fail_upload {
                return Err(RequestError::status(400, "No image uploaded"));
            }
            Ok(())
        }
    }

    fn soup_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Soup".to_string(),
            description: "Hot".to_string(),
            ingredients: "water, salt".to_string(),
        }
    }

    fn soup_payload() -> RecipePayload {
        RecipePayload {
            title: "Soup".to_string(),
            description: "Hot".to_string(),
            ingredients: vec!["water".to_string(), "salt".to_string()],
        }
    }

    #[test]
    fn test_create_without_image_issues_single_request() {
        let api = RecordingApi {
            next_id: 42,
            ..RecordingApi::default()
        };

        let id = block_on(save_recipe(&api, &FormMode::Create, &soup_draft(), None)).unwrap();

        assert_eq!(id, RecipeId::new("42"));
        assert_eq!(api.calls(), vec![Call::Create(soup_payload())]);
    }

    #[test]
    fn test_create_with_image_uses_new_id() {
        let api = RecordingApi {
            next_id: 9,
            ..RecordingApi::default()
        };
        let image = ImageUpload::new("soup.png", vec![1, 2, 3]);

        let id = block_on(save_recipe(
            &api,
            &FormMode::Create,
            &soup_draft(),
            Some(&image),
        ))
        .unwrap();

        assert_eq!(id.as_str(), "9");
        assert_eq!(
            api.calls(),
            vec![
                Call::Create(soup_payload()),
                Call::Upload("9".to_string(), "soup.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_edit_with_image_updates_then_uploads() {
        let api = RecordingApi::default();
        let image = ImageUpload::new("bowl.jpg", vec![0xff]);
        let mode = FormMode::Edit(RecipeId::new("5"));

        let id = block_on(save_recipe(&api, &mode, &soup_draft(), Some(&image))).unwrap();

        assert_eq!(id.as_str(), "5");
        assert_eq!(
            api.calls(),
            vec![
                Call::Update("5".to_string(), soup_payload()),
                Call::Upload("5".to_string(), "bowl.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_write_skips_upload() {
        let api = RecordingApi {
            fail_write: true,
            ..RecordingApi::default()
        };
        let image = ImageUpload::new("bowl.jpg", vec![0xff]);

        let err = block_on(save_recipe(
            &api,
            &FormMode::Create,
            &soup_draft(),
            Some(&image),
        ))
        .unwrap_err();

        assert!(matches!(err, SaveError::Write(_)));
        assert_eq!(api.calls(), vec![Call::Create(soup_payload())]);
    }

    #[test]
    fn test_failed_upload_reports_saved_recipe() {
        let api = RecordingApi {
            next_id: 3,
            fail_upload: true,
            ..RecordingApi::default()
        };
        let image = ImageUpload::new("cake.gif", vec![7]);

        let err = block_on(save_recipe(
            &api,
            &FormMode::Create,
            &soup_draft(),
            Some(&image),
        ))
        .unwrap_err();

        assert_eq!(err.saved_recipe(), Some(&RecipeId::new("3")));
        assert_eq!(err.request_error().status_code(), Some(400));
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_resubmit_after_failed_upload_updates_saved_recipe() {
        let api = RecordingApi {
            next_id: 3,
            fail_upload: true,
            ..RecordingApi::default()
        };
        let image = ImageUpload::new("cake.gif", vec![7]);

        let err = block_on(save_recipe(
            &api,
            &FormMode::Create,
            &soup_draft(),
            Some(&image),
        ))
        .unwrap_err();
        let next_mode = FormMode::Create.after_failure(&err);
        let _ = block_on(save_recipe(&api, &next_mode, &soup_draft(), Some(&image)));

        assert_eq!(
            api.calls(),
            vec![
                Call::Create(soup_payload()),
                Call::Upload("3".to_string(), "cake.gif".to_string()),
                Call::Update("3".to_string(), soup_payload()),
                Call::Upload("3".to_string(), "cake.gif".to_string()),
            ]
        );
    }

    #[test]
    fn test_rate_then_refetch() {
        let recipe = Recipe {
            id: RecipeId::new("1"),
            title: "Soup".to_string(),
            description: "Hot".to_string(),
            ingredients: vec!["water".to_string()],
            images: vec![],
            ratings: vec![2.0],
        };
        let api = RecordingApi::with_recipe(recipe);

        let refreshed = block_on(rate_and_refresh(&api, &RecipeId::new("1"), 4)).unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Rate("1".to_string(), 4), Call::Get("1".to_string())]
        );
        assert_eq!(refreshed.ratings, vec![2.0, 4.0]);
        assert_eq!(refreshed.average_rating(), 3.0);
    }

    #[test]
    fn test_rate_failure_skips_refetch() {
        struct Down;

        impl RecipeApi for Down {
            async fn list_recipes(&self) -> RecipeResult<Vec<Recipe>> {
                unreachable!()
            }
            async fn get_recipe(&self, _: &RecipeId) -> RecipeResult<Recipe> {
                panic!("should not re-fetch after a failed rating")
            }
            async fn create_recipe(&self, _: &RecipePayload) -> RecipeResult<RecipeId> {
                unreachable!()
            }
            async fn update_recipe(&self, _: &RecipeId, _: &RecipePayload) -> RecipeResult<Recipe> {
                unreachable!()
            }
            async fn delete_recipe(&self, _: &RecipeId) -> RecipeResult<()> {
                unreachable!()
            }
            async fn rate_recipe(&self, _: &RecipeId, _: i64) -> RecipeResult<()> {
                Err(RequestError::network("offline"))
            }
            async fn upload_image(&self, _: &RecipeId, _: &ImageUpload) -> RecipeResult<()> {
                unreachable!()
            }
        }

        let err = block_on(rate_and_refresh(&Down, &RecipeId::new("1"), 5)).unwrap_err();
        assert!(err.is_network());
    }
}
