//! Error Types
//!
//! Failures surfaced to the user. Every variant renders as the message shown
//! in the UI; nothing is retried.

use thiserror::Error;

use crate::forms::MAX_IMAGES;

/// Errors from backend calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session token; raised before any request goes out.
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// The request never completed (network, DNS, CORS, ...). The reqwest
    /// error stays reachable through `source()` and the debug form for logs.
    #[error("Unexpected error occurred")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body could not be read.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// Client-side precondition failures, caught before any request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please select at least one image")]
    NoImages,

    #[error("Maximum {max} images allowed")]
    TooManyImages { max: usize },

    #[error("Please fill in the {0}")]
    MissingField(&'static str),

    #[error("Error processing images. Please try again.")]
    ImageProcessing(String),

    /// A write is already in flight.
    #[error("A request is already in progress")]
    Busy,

    /// The record being edited is no longer in the list.
    #[error("This listing no longer exists")]
    ListingGone,
}

impl FormError {
    pub fn too_many() -> Self {
        FormError::TooManyImages { max: MAX_IMAGES }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_alerts() {
        assert_eq!(FormError::NoImages.to_string(), "Please select at least one image");
        assert_eq!(FormError::too_many().to_string(), "Maximum 10 images allowed");
        assert_eq!(ApiError::NotAuthenticated.to_string(), "User is not authenticated");
    }

    #[test]
    fn test_status_error_shows_message_verbatim() {
        let err = ApiError::Status { status: 400, message: "Title already exists".to_string() };
        assert_eq!(err.to_string(), "Title already exists");
    }

    #[test]
    fn test_transport_error_shows_generic_message() {
        let cause = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = ApiError::from(cause);
        assert_eq!(err.to_string(), "Unexpected error occurred");
        assert!(std::error::Error::source(&err).is_some());
    }
}
