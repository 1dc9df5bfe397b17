//! Error types for Recipe Book
//!
//! Every call to the recipe API resolves to either its parsed body or a
//! [`RequestError`]. The multi-step save flow wraps it in [`SaveError`] so
//! the caller can tell a failed write from a failed image upload.

use thiserror::Error;

use crate::types::RecipeId;

/// Error produced by a single request against the recipe API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS, aborted)
    #[error("Request failed: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected type
    #[error("Failed to parse response: {message}")]
    Decode { message: String },

    /// The request body could not be encoded
    #[error("Failed to encode request: {message}")]
    Encode { message: String },
}

impl RequestError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        RequestError::Network {
            message: msg.into(),
        }
    }

    /// Create an error for a non-2xx response
    pub fn status(status: u16, msg: impl Into<String>) -> Self {
        RequestError::Status {
            status,
            message: msg.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        RequestError::Decode {
            message: msg.into(),
        }
    }

    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        RequestError::Encode {
            message: msg.into(),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The bare message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            RequestError::Network { message }
            | RequestError::Status { message, .. }
            | RequestError::Decode { message }
            | RequestError::Encode { message } => message,
        }
    }

    /// Whether the server reported 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, RequestError::Status { status: 404, .. })
    }

    /// Whether the request never reached the server
    pub fn is_network(&self) -> bool {
        matches!(self, RequestError::Network { .. })
    }

    /// Text suitable for showing in an error banner
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Network { .. } => {
                "Unable to reach the recipe server. Please check your connection.".to_string()
            }
            RequestError::Status { status: 404, .. } => "Recipe not found.".to_string(),
            RequestError::Status { message, .. } => message.clone(),
            RequestError::Decode { .. } => {
                "Received an unexpected response from the server.".to_string()
            }
            RequestError::Encode { message } => message.clone(),
        }
    }
}

/// Result type alias using RequestError
pub type RecipeResult<T> = Result<T, RequestError>;

/// Failure of the create/edit flow
///
/// The recipe write and the image upload are separate requests. Nothing is
/// rolled back: when the upload fails the recipe has already been saved and
/// its id is reported alongside the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// Creating or updating the recipe failed; nothing was saved
    #[error("Failed to save recipe: {0}")]
    Write(RequestError),

    /// The recipe was saved but attaching the image failed
    #[error("Recipe {recipe_id} was saved but the image upload failed: {source}")]
    ImageUpload {
        recipe_id: RecipeId,
        source: RequestError,
    },
}

impl SaveError {
    /// Id of the recipe that was written before the failure, if any
    pub fn saved_recipe(&self) -> Option<&RecipeId> {
        match self {
            SaveError::Write(_) => None,
            SaveError::ImageUpload { recipe_id, .. } => Some(recipe_id),
        }
    }

    /// The request error that caused the failure
    pub fn request_error(&self) -> &RequestError {
        match self {
            SaveError::Write(err) => err,
            SaveError::ImageUpload { source, .. } => source,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = RequestError::status(500, "Internal Server Error");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.message(), "Internal Server Error");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "API error (500): Internal Server Error");
    }

    #[test]
    fn test_not_found() {
        let err = RequestError::status(404, "Not Found");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Recipe not found.");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = RequestError::network("connection refused");
        assert!(err.is_network());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "Request failed: connection refused");
        assert!(err.user_message().contains("Unable to reach"));
    }

    #[test]
    fn test_decode_error() {
        let err = RequestError::decode("expected array");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "Failed to parse response: expected array");
    }

    #[test]
    fn test_save_error_write() {
        let err = SaveError::Write(RequestError::status(400, "title is required"));
        assert!(err.saved_recipe().is_none());
        assert_eq!(err.request_error().status_code(), Some(400));
        assert_eq!(
            err.to_string(),
            "Failed to save recipe: API error (400): title is required"
        );
    }

    #[test]
    fn test_save_error_image_upload_keeps_recipe_id() {
        let err = SaveError::ImageUpload {
            recipe_id: RecipeId::new("12"),
            source: RequestError::status(413, "Payload Too Large"),
        };
        assert_eq!(err.saved_recipe(), Some(&RecipeId::new("12")));
        assert!(err.to_string().starts_with("Recipe 12 was saved"));
    }
}
