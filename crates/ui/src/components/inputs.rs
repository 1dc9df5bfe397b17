//! # Input Components
//!
//! Form inputs used by the recipe pages:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **NumberInput**: Integer input with step buttons, no range clamping
//! - **ImageInput**: File picker that reads the chosen image into memory
//!
//! All of them are controlled: the parent owns the value and receives
//! every edit through `on_change`.

use dioxus::prelude::*;
use recipe_core::ImageUpload;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            InputFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let mut textarea_class = build_input_class(false, props.disabled, &None);
    textarea_class.push_str(" textarea");

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Input value
    pub value: i64,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Step applied by the -/+ buttons
    #[props(default = 1)]
    pub step: i64,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether to show increment/decrement buttons
    #[props(default = true)]
    pub show_controls: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<i64>,
}

/// Integer input with optional step buttons
///
/// Text that does not parse as an integer is ignored and the last valid
/// value stays committed.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let input_class = build_input_class(false, props.disabled, &props.class);
    let current = props.value;
    let step = props.step;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            div {
                class: "number-input",

                if props.show_controls {
                    button {
                        class: "btn btn-secondary btn-sm",
                        r#type: "button",
                        disabled: props.disabled,
                        onclick: move |_| on_change.call(current.saturating_sub(step)),
                        "−"
                    }
                }

                input {
                    class: "{input_class}",
                    r#type: "number",
                    value: "{props.value}",
                    step: "{props.step}",
                    disabled: props.disabled,
                    oninput: move |e| {
                        if let Some(v) = parse_integer(&e.value()) {
                            on_change.call(v);
                        }
                    },
                }

                if props.show_controls {
                    button {
                        class: "btn btn-secondary btn-sm",
                        r#type: "button",
                        disabled: props.disabled,
                        onclick: move |_| on_change.call(current.saturating_add(step)),
                        "+"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Image Input Component
// ============================================================================

/// Properties for ImageInput component
#[derive(Props, Clone, PartialEq)]
pub struct ImageInputProps {
    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Name of the currently selected file, shown below the picker
    #[props(default)]
    pub selected: Option<String>,

    /// Called with the chosen file, or `None` when the selection is cleared
    #[props(default)]
    pub on_select: EventHandler<Option<ImageUpload>>,
}

/// File picker for a single image
#[component]
pub fn ImageInput(props: ImageInputProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            input {
                class: "input-file",
                r#type: "file",
                accept: "image/*",
                onchange: move |evt: FormEvent| async move {
                    let Some(file) = evt.files().into_iter().next() else {
                        on_select.call(None);
                        return;
                    };
                    let name = file.name();
                    match file.read_bytes().await {
                        Ok(bytes) => {
                            tracing::debug!(file = %name, size = bytes.len(), "Image selected");
                            on_select.call(Some(ImageUpload::new(name, bytes.to_vec())));
                        }
                        Err(err) => {
                            tracing::warn!(file = %name, error = ?err, "Could not read selected file");
                            on_select.call(None);
                        }
                    }
                },
            }

            if let Some(name) = &props.selected {
                p { class: "input-help", "Selected: {name}" }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

/// Error or help line under an input
#[component]
fn InputFooter(error: Option<String>, help_text: Option<String>) -> Element {
    if let Some(error) = error {
        rsx! { p { class: "input-error-text", "{error}" } }
    } else if let Some(help) = help_text {
        rsx! { p { class: "input-help", "{help}" } }
    } else {
        rsx! {}
    }
}

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec!["input"];

    if has_error {
        classes.push("input-invalid");
    }

    if disabled {
        classes.push("input-disabled");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Parse the raw text of a number input
fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false, &None);
        assert_eq!(class, "input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false, &None);
        assert!(class.contains("input-invalid"));
    }

    #[test]
    fn test_build_input_class_disabled_with_extra() {
        let class = build_input_class(false, true, &Some("wide".to_string()));
        assert!(class.contains("input-disabled"));
        assert!(class.ends_with(" wide"));
    }

    #[test]
    fn test_parse_integer_accepts_out_of_range_scores() {
        assert_eq!(parse_integer("4"), Some(4));
        assert_eq!(parse_integer(" 12 "), Some(12));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("4.5"), None);
    }
}
