//! Transcript analysis
//!
//! Orchestrates the two extraction paths: the AI path (prompt, completion
//! call with retry on transient failures, response parsing) and the offline
//! heuristic path.

pub mod heuristics;
pub mod parser;
pub mod record;

pub use record::MeetingRecord;

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm::{
    build_provider, CompletionError, CompletionProvider, CompletionRequest,
    ANALYSIS_SYSTEM_PROMPT,
};
use crate::config::Settings;

/// Completion call parameters used for every analysis request.
const MAX_COMPLETION_TOKENS: u32 = 1500;
const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Failures of the AI analysis path. The demo path never fails.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The retry budget was consumed on transient completion failures.
    #[error("analysis failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        source: CompletionError,
    },

    /// A non-transient completion failure, surfaced without retrying.
    #[error("completion request failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Runs transcript analysis over a completion provider.
pub struct Analyzer {
    provider: Box<dyn CompletionProvider>,
    max_retries: u32,
}

impl Analyzer {
    pub fn new(provider: Box<dyn CompletionProvider>, max_retries: u32) -> Self {
        Self {
            provider,
            max_retries,
        }
    }

    /// Build an analyzer from settings. Fails when no provider can be
    /// constructed (for example a blank API key).
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::new(build_provider(settings)?, settings.llm.max_retries))
    }

    /// Analyze a transcript through the completion API.
    ///
    /// Transient failures (rate limits, dropped connections) are retried
    /// with a linearly growing delay until the budget is spent; all other
    /// failures are returned immediately.
    pub async fn analyze(&self, transcript: &str) -> Result<MeetingRecord, AnalysisError> {
        let prompt = crate::llm::build_analysis_prompt(transcript);

        let mut attempt: u32 = 0;
        loop {
            let request = CompletionRequest {
                system: ANALYSIS_SYSTEM_PROMPT,
                user: &prompt,
                max_tokens: MAX_COMPLETION_TOKENS,
                temperature: COMPLETION_TEMPERATURE,
            };

            match self.provider.complete(request).await {
                Ok(reply) => {
                    info!(attempt, "completion succeeded, parsing reply");
                    return Ok(parser::parse(&reply));
                }
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        attempt,
                        wait_secs = delay.as_secs(),
                        error = %err,
                        "transient completion failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) if err.is_transient() => {
                    return Err(AnalysisError::RetriesExhausted {
                        attempts: attempt + 1,
                        source: err,
                    });
                }
                Err(err) => return Err(AnalysisError::Completion(err)),
            }
        }
    }
}

/// Analyze a transcript offline with the heuristic extractor. Never fails.
pub fn analyze_demo(transcript: &str) -> MeetingRecord {
    heuristics::extract(transcript)
}

/// Delay before retrying after the given zero-based attempt. Grows linearly.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(u64::from(attempt + 1) * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted provider: pops one prepared outcome per call.
    struct ScriptedProvider {
        outcomes: Mutex<Vec<Result<String, CompletionError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedProvider {
        fn new(mut outcomes: Vec<Result<String, CompletionError>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(
            &self,
            _request: CompletionRequest<'_>,
        ) -> Result<String, CompletionError> {
            *self.calls.lock().unwrap() += 1;
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .expect("provider called more times than scripted")
        }
    }

    fn analyzer_with(
        outcomes: Vec<Result<String, CompletionError>>,
        max_retries: u32,
    ) -> (Analyzer, std::sync::Arc<ScriptedProvider>) {
        let provider = std::sync::Arc::new(ScriptedProvider::new(outcomes));
        let boxed: Box<dyn CompletionProvider> = Box::new(ArcProvider(provider.clone()));
        (Analyzer::new(boxed, max_retries), provider)
    }

    struct ArcProvider(std::sync::Arc<ScriptedProvider>);

    #[async_trait]
    impl CompletionProvider for ArcProvider {
        async fn complete(
            &self,
            request: CompletionRequest<'_>,
        ) -> Result<String, CompletionError> {
            self.0.complete(request).await
        }
    }

    #[tokio::test]
    async fn success_parses_reply_into_record() {
        let reply = "SUMMARY:\nShort recap.\n\nACTION ITEMS:\n- Follow up\n".to_string();
        let (analyzer, provider) = analyzer_with(vec![Ok(reply)], 2);

        let record = analyzer.analyze("transcript").await.unwrap();
        assert_eq!(record.summary, "Short recap.");
        assert_eq!(record.action_items, vec!["Follow up"]);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_are_retried_until_success() {
        let (analyzer, provider) = analyzer_with(
            vec![
                Err(CompletionError::RateLimited("429".into())),
                Err(CompletionError::Connection("reset".into())),
                Ok("SUMMARY:\nRecovered.\n".to_string()),
            ],
            2,
        );

        let record = analyzer.analyze("transcript").await.unwrap();
        assert_eq!(record.summary, "Recovered.");
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_carry_the_last_cause() {
        let (analyzer, provider) = analyzer_with(
            vec![
                Err(CompletionError::RateLimited("429".into())),
                Err(CompletionError::RateLimited("429".into())),
                Err(CompletionError::Connection("reset".into())),
            ],
            2,
        );

        let err = analyzer.analyze("transcript").await.unwrap_err();
        match err {
            AnalysisError::RetriesExhausted { attempts, source } => {
                assert_eq!(attempts, 3);
                assert!(matches!(source, CompletionError::Connection(_)));
            }
            other => panic!("expected RetriesExhausted, got {other}"),
        }
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn permanent_api_error_fails_without_retry() {
        let (analyzer, provider) = analyzer_with(
            vec![Err(CompletionError::Api("400 bad request".into()))],
            5,
        );

        let err = analyzer.analyze("transcript").await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Completion(CompletionError::Api(_))
        ));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_response_fails_without_retry() {
        let (analyzer, provider) = analyzer_with(
            vec![Err(CompletionError::MalformedResponse("empty".into()))],
            5,
        );

        let err = analyzer.analyze("transcript").await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Completion(CompletionError::MalformedResponse(_))
        ));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn zero_retry_budget_fails_on_first_transient_error() {
        let (analyzer, provider) = analyzer_with(
            vec![Err(CompletionError::RateLimited("429".into()))],
            0,
        );

        let err = analyzer.analyze("transcript").await.unwrap_err();
        assert!(matches!(err, AnalysisError::RetriesExhausted { attempts: 1, .. }));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn backoff_grows_linearly() {
        assert_eq!(backoff_delay(0), Duration::from_secs(2));
        assert_eq!(backoff_delay(1), Duration::from_secs(4));
        assert_eq!(backoff_delay(2), Duration::from_secs(6));
    }

    #[test]
    fn demo_analysis_never_fails() {
        for input in ["", "   \n\t", "John: will review everything tomorrow?"] {
            let record = analyze_demo(input);
            assert!(!record.summary.is_empty());
        }
    }
}
