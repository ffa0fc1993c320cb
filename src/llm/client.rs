//! Completion capability consumed by the AI analysis path

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// A single completion call.
pub struct CompletionRequest<'a> {
    /// System role message
    pub system: &'a str,
    /// User prompt
    pub user: &'a str,
    /// Maximum tokens in the reply
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Classified failures of the completion capability.
///
/// The transient kinds are eligible for retry; everything else is surfaced
/// immediately.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Other(String),
}

impl CompletionError {
    /// Whether a retry with backoff may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Connection(_))
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a prompt pair, returning the reply text or a classified error.
    async fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> std::result::Result<String, CompletionError>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn openai_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("OpenAI API key is missing"));
    }

    #[test]
    fn only_rate_limit_and_connection_are_transient() {
        assert!(CompletionError::RateLimited("429".into()).is_transient());
        assert!(CompletionError::Connection("reset".into()).is_transient());
        assert!(!CompletionError::Api("400".into()).is_transient());
        assert!(!CompletionError::MalformedResponse("empty".into()).is_transient());
        assert!(!CompletionError::Other("boom".into()).is_transient());
    }
}
