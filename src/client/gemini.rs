//! Google Generative Language (`generateContent`) client.

use std::fmt;
use std::future::Future;

use reqwest::header::{HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::TextGenerator;
use crate::config::Config;
use crate::story::error::{GenerationError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

const USER_AGENT_VALUE: &str = concat!("storybook/", env!("CARGO_PKG_VERSION"));

/// Finish reasons for which a candidate carries no usable text.
const BAD_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GeminiClient {
    /// A missing key is accepted here and reported on the first request.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GenerationError::Service(format!("could not create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            api_base_url: api_base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.resolve_api_key(),
            config.model.clone(),
            config.api_base_url.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;

        debug!(model = %self.model, prompt_len = prompt.len(), "Requesting story text");

        let response = self
            .http
            .post(self.endpoint())
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| body.trim().to_string());
            warn!(%status, "Text generation request rejected");
            return Err(GenerationError::Service(format!(
                "service returned {status}: {message}"
            )));
        }

        parse_response(&body)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
        self.request(prompt)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Extract the text of the first candidate, joining its parts.
fn parse_response(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Response(format!("could not decode response: {e}")))?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::Response(format!(
            "prompt was blocked ({reason})"
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::Response("response contained no candidates".to_string()))?;

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|reason| BAD_FINISH_REASONS.contains(reason))
    {
        return Err(GenerationError::Response(format!(
            "candidate was blocked ({reason})"
        )));
    }

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Page one.\n\n"}, {"text": "Page two."}]},
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(parse_response(body).unwrap(), "Page one.\n\nPage two.");
    }

    #[test]
    fn test_parse_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, GenerationError::Response(_)));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_bad_finish_reason() {
        let body = r#"{"candidates": [{"finishReason": "RECITATION"}]}"#;
        assert!(parse_response(body).is_err());
    }

    #[test]
    fn test_parse_no_candidates() {
        let err = parse_response(r#"{"candidates": []}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to generate story: response contained no candidates"
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_response("<html>bad gateway</html>"),
            Err(GenerationError::Response(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_endpoint_and_redacted_debug() {
        let client = GeminiClient::new(
            Some("secret-key".to_string()),
            "gemini-pro",
            "https://example.test/v1beta/",
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let client = GeminiClient::new(Some("  ".to_string()), DEFAULT_MODEL, "http://127.0.0.1:9")
            .unwrap();
        assert!(!client.has_api_key());
        assert_eq!(
            client.generate("outline").await,
            Err(GenerationError::MissingApiKey)
        );
    }
}
