//! HTTP client for the recipe REST API
//!
//! Thin wrapper over `reqwest`: every call is a single request with no
//! retry, timeout, or caching, and any failure comes back as a
//! [`RequestError`].

use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use recipe_core::{
    ClientConfig, ImageUpload, RatingPayload, Recipe, RecipeApi, RecipeId, RecipePayload,
    RecipeResult, RequestError,
};

use crate::body::RequestBody;

// ============================================================================
// API Client
// ============================================================================

/// HTTP client bound to one API base URL
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new(ClientConfig::from_env());
/// let recipes: Vec<Recipe> = client.get("/recipes").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RecipeResult<T> {
        self.send(Method::GET, path, None).await
    }

    /// Send a POST request with a JSON or multipart body
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> RecipeResult<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Send a PUT request with a JSON or multipart body
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> RecipeResult<T> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// Send a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> RecipeResult<T> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> RecipeResult<T> {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "Sending request");

        let request = self.client.request(method.clone(), &url);
        let request = match body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Multipart(form)) => request.multipart(form.into_form()?),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::warn!(%method, %url, error = %err, "Request failed");
            RequestError::network(err.to_string())
        })?;

        handle_response(&method, &url, response).await
    }
}

/// Check the status and decode the body
///
/// An empty success body decodes as JSON `null`, so acknowledgement
/// endpoints can be read into `IgnoredAny` or `Option<_>`.
async fn handle_response<T: DeserializeOwned>(
    method: &Method,
    url: &str,
    response: Response,
) -> RecipeResult<T> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|err| RequestError::network(err.to_string()))?;

    if status.is_success() {
        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body).map_err(|err| {
            tracing::warn!(%method, %url, error = %err, "Undecodable response body");
            RequestError::decode(err.to_string())
        })
    } else {
        let message = error_message(status, &bytes);
        tracing::warn!(%method, %url, status = status.as_u16(), %message, "Request rejected");
        Err(RequestError::status(status.as_u16(), message))
    }
}

/// Prefer the server's `error`/`message` field, else the reason phrase
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("Server returned status {}", status.as_u16()))
}

// ============================================================================
// Recipe endpoints
// ============================================================================

/// Create acknowledgement; any fields besides the id are ignored
#[derive(Debug, Deserialize)]
struct Created {
    id: RecipeId,
}

impl RecipeApi for ApiClient {
    async fn list_recipes(&self) -> RecipeResult<Vec<Recipe>> {
        self.get("/recipes").await
    }

    async fn get_recipe(&self, id: &RecipeId) -> RecipeResult<Recipe> {
        self.get(&format!("/recipes/{id}")).await
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> RecipeResult<RecipeId> {
        let created: Created = self.post("/recipes", RequestBody::json(payload)?).await?;
        Ok(created.id)
    }

    async fn update_recipe(&self, id: &RecipeId, payload: &RecipePayload) -> RecipeResult<Recipe> {
        self.put(&format!("/recipes/{id}"), RequestBody::json(payload)?)
            .await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> RecipeResult<()> {
        self.delete::<IgnoredAny>(&format!("/recipes/{id}")).await?;
        Ok(())
    }

    async fn rate_recipe(&self, id: &RecipeId, score: i64) -> RecipeResult<()> {
        let body = RequestBody::json(&RatingPayload { score })?;
        self.post::<IgnoredAny>(&format!("/recipes/{id}/rating"), body)
            .await?;
        Ok(())
    }

    async fn upload_image(&self, id: &RecipeId, image: &ImageUpload) -> RecipeResult<()> {
        let body = RequestBody::image(image.clone());
        self.post::<IgnoredAny>(&format!("/recipes/{id}/images"), body)
            .await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
