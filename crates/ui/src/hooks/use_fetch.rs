//! Fetch hook
//!
//! Holds a [`ViewState`] signal plus the task that is filling it. Starting a
//! new request cancels the one still in flight, and because the task is
//! spawned in the component's scope Dioxus drops it when the view unmounts.
//! A response can therefore only ever land in the view that asked for it.

use std::future::Future;

use dioxus::core::Task;
use dioxus::prelude::*;
use recipe_core::{RecipeResult, ViewState};

/// Handle returned by [`use_fetch`]
pub struct UseFetch<T: 'static> {
    state: Signal<ViewState<T>>,
    task: Signal<Option<Task>>,
}

impl<T: 'static> Clone for UseFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseFetch<T> {}

impl<T: 'static> UseFetch<T> {
    /// Run `request`, replacing whatever was loaded or loading before
    pub fn start(&mut self, request: impl Future<Output = RecipeResult<T>> + 'static) {
        self.cancel();
        self.state.set(ViewState::Loading);

        let mut state = self.state;
        let task = spawn(async move {
            let result = request.await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "Fetch failed");
            }
            state.set(ViewState::from(result));
        });
        self.task.set(Some(task));
    }

    /// Abort the in-flight request, if any; the current state is kept
    pub fn cancel(&mut self) {
        let previous = self.task.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
    }

    /// Replace the state with a value obtained elsewhere
    pub fn set_loaded(&mut self, value: T) {
        self.cancel();
        self.state.set(ViewState::Loaded(value));
    }

    /// Snapshot of the current state; subscribes the caller to changes
    pub fn current(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.state.read().clone()
    }
}

/// Create a fetch slot starting in [`ViewState::Idle`]
pub fn use_fetch<T: 'static>() -> UseFetch<T> {
    let state = use_signal(ViewState::default);
    let task = use_signal(|| None);
    UseFetch { state, task }
}
