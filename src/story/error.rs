//! Error type for story generation.

use thiserror::Error;

/// Shown when a failure carries no detail of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred while generating the story.";

/// Every way a generation attempt can fail.
///
/// All variants are the same kind of failure from the user's point of view and
/// render as "Failed to generate story: ...".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// No API key was configured for the text-generation service.
    #[error("Failed to generate story: no API key configured (set STORYBOOK_API_KEY or GOOGLE_API_KEY)")]
    MissingApiKey,

    /// The request to the text-generation service failed.
    #[error("Failed to generate story: {0}")]
    Service(String),

    /// The service answered with something that could not be read.
    #[error("Failed to generate story: {0}")]
    Response(String),

    /// The service answered, but no usable page survived splitting.
    #[error("Failed to generate story: Failed to generate story text")]
    EmptyStory,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GenerationError::Response(err.to_string())
        } else {
            GenerationError::Service(err.to_string())
        }
    }
}

impl GenerationError {
    /// Message suitable for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(detail) | Self::Response(detail) if detail.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = GenerationError> = std::result::Result<T, E>;
