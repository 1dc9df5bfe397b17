//! Loading and error indicators shared by the pages

use dioxus::prelude::*;

/// Spinner with a caption, shown while a view is waiting for its first response
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
            span { "{label}" }
        }
    }
}

/// Properties for ErrorBanner component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    /// Message shown to the user
    pub message: String,

    /// Adds a Retry button wired to this handler
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,

    /// Adds a dismiss button wired to this handler
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Inline error message with optional retry and dismiss actions
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",

            span { class: "alert-message", "{props.message}" }

            if let Some(on_retry) = props.on_retry {
                button {
                    class: "btn btn-secondary btn-sm",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }

            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    class: "btn-close",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
