//! # Recipe Client
//!
//! `reqwest`-backed client for the recipe REST API.
//!
//! [`ApiClient`] exposes generic `get`/`post`/`put`/`delete` helpers and
//! implements [`recipe_core::RecipeApi`] on top of them. It compiles for
//! both native targets and `wasm32`, where reqwest uses the browser's fetch.

pub mod body;
pub mod client;

pub use body::{MultipartForm, RequestBody};
pub use client::ApiClient;
