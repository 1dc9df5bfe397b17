//! Client configuration
//!
//! The front-end only needs to know where the recipe API lives and where
//! uploaded images are served from. Values come from the environment at
//! runtime (desktop builds), then from the build environment (web builds,
//! where there is no process environment), then from the defaults below.

use std::env;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "RECIPE_API_URL";

/// Environment variable overriding the image host prefix
pub const UPLOADS_URL_ENV: &str = "RECIPE_UPLOADS_URL";

/// API base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Image prefix used when nothing is configured
pub const DEFAULT_UPLOADS_URL: &str = "http://localhost:5000/uploads";

/// Where the client sends requests and loads images from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to (e.g. `http://localhost:5000/api`)
    pub api_base_url: String,
    /// Prefix for stored image filenames (e.g. `http://localhost:5000/uploads`)
    pub uploads_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, uploads_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_slash(api_base_url.into()),
            uploads_url: trim_slash(uploads_url.into()),
        }
    }

    /// Resolve from runtime env, then build-time env, then defaults
    pub fn from_env() -> Self {
        let api = env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("RECIPE_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let uploads = env::var(UPLOADS_URL_ENV)
            .ok()
            .or_else(|| option_env!("RECIPE_UPLOADS_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_UPLOADS_URL.to_string());

        tracing::debug!(api_base_url = %api, uploads_url = %uploads, "Resolved client config");
        Self::new(api, uploads)
    }

    /// Full URL for an API path such as `/recipes/3`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Direct URL of a stored image
    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.uploads_url, file_name)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_UPLOADS_URL)
    }
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
