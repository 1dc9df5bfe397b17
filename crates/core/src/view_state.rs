//! Fetch-then-render state
//!
//! Every view that loads data walks `Idle -> Loading -> Loaded | Failed`.
//! Keeping the failure as its own variant means views have to render it.

use crate::error::{RecipeResult, RequestError};

/// Lifecycle of one fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// The last request succeeded
    Loaded(T),
    /// The last request failed
    Failed(RequestError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> From<RecipeResult<T>> for ViewState<T> {
    fn from(result: RecipeResult<T>) -> Self {
        match result {
            Ok(value) => ViewState::Loaded(value),
            Err(err) => ViewState::Failed(err),
        }
    }
}
