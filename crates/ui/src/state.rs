//! Shared application context
//!
//! Views never share fetched data; each one owns its own copies. The only
//! thing handed down the tree is the API client (and, through it, the
//! client configuration).

use dioxus::prelude::*;
use recipe_client::ApiClient;
use recipe_core::ClientConfig;

/// Install the API client for every view below the caller
///
/// Call once from the root component.
pub fn use_api_provider(config: impl FnOnce() -> ClientConfig) -> ApiClient {
    use_context_provider(|| {
        let config = config();
        tracing::info!(api = %config.api_base_url, "Recipe API configured");
        ApiClient::new(config)
    })
}

/// The API client installed by [`use_api_provider`]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The configuration the API client was built with
pub fn use_client_config() -> ClientConfig {
    use_api().config().clone()
}
