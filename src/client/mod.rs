//! Text-generation service clients.

mod gemini;

use std::future::Future;

use crate::story::GenerationError;

pub use gemini::{DEFAULT_API_BASE_URL, DEFAULT_MODEL, GeminiClient};

/// A hosted service that turns a prompt into freeform text.
///
/// Implementations make exactly one request per call and never retry.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str)
    -> impl Future<Output = Result<String, GenerationError>> + Send;
}
