//! # UI Components
//!
//! Reusable Dioxus components for the recipe pages:
//! - **Rating Stars**: five-star display and selector
//! - **Inputs**: controlled form inputs (text, textarea, number, image file)
//! - **Status**: loading indicator and error banner

// ============================================================================
// Module Declarations
// ============================================================================

pub mod inputs;
pub mod rating_stars;
pub mod status;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{ImageInput, NumberInput, TextArea, TextInput};
pub use rating_stars::{MAX_RATING, RatingStars, displayed_value, is_filled};
pub use status::{ErrorBanner, LoadingIndicator};
