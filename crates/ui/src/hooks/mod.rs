//! # UI Hooks
//!
//! Custom Dioxus hooks for Recipe Book.
//!
//! - `use_fetch`: a cancellable `ViewState` slot for one fetched value

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_fetch;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_fetch::{UseFetch, use_fetch};
