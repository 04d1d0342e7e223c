//! Mock AI provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ai::{AiProvider, ProviderError};

/// A recorded analysis call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedAnalysis {
    pub text: String,
    pub headline: String,
    pub url: String,
}

/// Mock implementation of the AiProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable verdict string
/// - Track analysis calls for assertions
/// - Simulate provider failures
pub struct MockProvider {
    name: String,
    verdict: Arc<RwLock<String>>,
    calls: Arc<RwLock<Vec<RecordedAnalysis>>>,
    next_error: Arc<RwLock<Option<ProviderError>>>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verdict: Arc::new(RwLock::new("Mock verdict: credibility 0.5".to_string())),
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the verdict returned by subsequent calls.
    pub async fn set_verdict(&self, verdict: impl Into<String>) {
        *self.verdict.write().await = verdict.into();
    }

    /// Make the next call fail with the given error.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.write().await = Some(error);
    }

    /// All calls recorded so far.
    pub async fn recorded_calls(&self) -> Vec<RecordedAnalysis> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl AiProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn analyze(
        &self,
        text: &str,
        headline: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        self.calls.write().await.push(RecordedAnalysis {
            text: text.to_string(),
            headline: headline.to_string(),
            url: url.to_string(),
        });

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.verdict.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_verdict() {
        let provider = MockProvider::new("openai");
        provider.set_verdict("looks fine").await;

        let result = provider.analyze("text", "head", "url").await.unwrap();
        assert_eq!(result, "looks fine");

        let calls = provider.recorded_calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].headline, "head");
    }

    #[tokio::test]
    async fn test_mock_error_fires_once() {
        let provider = MockProvider::new("gemini");
        provider
            .set_next_error(ProviderError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
            .await;

        assert!(provider.analyze("t", "", "").await.is_err());
        assert!(provider.analyze("t", "", "").await.is_ok());
    }
}
