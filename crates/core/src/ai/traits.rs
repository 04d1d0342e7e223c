use async_trait::async_trait;

/// Error type for AI provider calls.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(String),
}

/// Trait for external analysis providers.
///
/// Implementations send the submitted content to a remote model and return
/// its free-text verdict. The verdict is passed through unparsed; the caller
/// wraps it in the response envelope.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Provider name (e.g., "openai", "gemini").
    fn name(&self) -> &str;

    /// Analyze content and return the provider's free-text verdict.
    async fn analyze(
        &self,
        text: &str,
        headline: &str,
        url: &str,
    ) -> Result<String, ProviderError>;
}
