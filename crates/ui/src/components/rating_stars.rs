//! # Rating Stars
//!
//! Five-star selector. It shows a value (fractional averages included) and,
//! unless read-only, lets the user preview a rank by hovering and commit it
//! by clicking. The committed value lives in the parent.

use dioxus::prelude::*;

/// Number of stars rendered
pub const MAX_RATING: u8 = 5;

/// Value to draw: the hovered rank while hovering, else the committed value
pub fn displayed_value(hover: Option<u8>, committed: f64) -> f64 {
    hover.map(f64::from).unwrap_or(committed)
}

/// Whether the star at `rank` (1-based) is filled for `value`
pub fn is_filled(rank: u8, value: f64) -> bool {
    f64::from(rank) <= value
}

fn star_class(filled: bool, interactive: bool) -> String {
    let mut class = String::from(if filled { "star star-filled" } else { "star star-empty" });
    if interactive {
        class.push_str(" star-interactive");
    }
    class
}

/// Properties for RatingStars component
#[derive(Props, Clone, PartialEq)]
pub struct RatingStarsProps {
    /// Committed value, e.g. an average like 3.6
    #[props(default)]
    pub value: f64,

    /// Render without any interaction handlers
    #[props(default = false)]
    pub read_only: bool,

    /// Called with the clicked rank (1 to 5)
    #[props(default)]
    pub on_change: EventHandler<u8>,
}

/// Five-symbol rating control
#[component]
pub fn RatingStars(props: RatingStarsProps) -> Element {
    let mut hover = use_signal(|| None::<u8>);
    let display = displayed_value(hover(), props.value);
    let label = format!("{:.1} out of {}", props.value, MAX_RATING);

    if props.read_only {
        return rsx! {
            span {
                class: "rating rating-readonly",
                title: "{label}",
                for rank in 1..=MAX_RATING {
                    span {
                        key: "{rank}",
                        class: star_class(is_filled(rank, display), false),
                        "★"
                    }
                }
            }
        };
    }

    let on_change = props.on_change;

    rsx! {
        span {
            class: "rating",
            title: "{label}",
            onmouseleave: move |_| hover.set(None),

            for rank in 1..=MAX_RATING {
                span {
                    key: "{rank}",
                    class: star_class(is_filled(rank, display), true),
                    onmouseenter: move |_| hover.set(Some(rank)),
                    onclick: move |_| on_change.call(rank),
                    "★"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
