//! Request bodies
//!
//! `post` and `put` take either JSON or a multipart form. Multipart is only
//! used for image uploads, so the form carries file parts and nothing else.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use recipe_core::{ImageUpload, RecipeResult, RequestError};

/// Body of a `post` or `put` request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Sent as `application/json`
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Encode any serializable value as a JSON body
    pub fn json<T: Serialize>(value: &T) -> RecipeResult<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| RequestError::encode(e.to_string()))
    }

    /// Multipart body with a single image under the `image` field
    pub fn image(upload: ImageUpload) -> Self {
        RequestBody::Multipart(MultipartForm::new().file(ImageUpload::FIELD_NAME, upload))
    }
}

/// Named file parts for a multipart request
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    files: Vec<(String, ImageUpload)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file part under `field`
    pub fn file(mut self, field: impl Into<String>, upload: ImageUpload) -> Self {
        self.files.push((field.into(), upload));
        self
    }

    pub(crate) fn into_form(self) -> RecipeResult<Form> {
        let mut form = Form::new();
        for (field, upload) in self.files {
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)
                .map_err(|e| RequestError::encode(e.to_string()))?;
            form = form.part(field, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(&serde_json::json!({ "score": 4 })).unwrap();
        match body {
            RequestBody::Json(value) => assert_eq!(value["score"], 4),
            RequestBody::Multipart(_) => panic!("expected JSON body"),
        }
    }

    #[test]
    fn test_image_body_uses_image_field() {
        let body = RequestBody::image(ImageUpload::new("pie.png", vec![1, 2]));
        match body {
            RequestBody::Multipart(form) => {
                assert_eq!(form.files.len(), 1);
                assert_eq!(form.files[0].0, "image");
                assert_eq!(form.files[0].1.file_name, "pie.png");
            }
            RequestBody::Json(_) => panic!("expected multipart body"),
        }
    }

    #[test]
    fn test_empty_form() {
        let form = MultipartForm::new();
        assert!(form.files.is_empty());
        assert!(form.into_form().is_ok());
    }
}
