//! OpenAI chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::traits::{AiProvider, ProviderError};
use crate::config::OpenAiConfig;

const SYSTEM_PROMPT: &str = "You are a misinformation detection expert.";

/// OpenAI API client.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            api_base: config.api_base,
            timeout: Duration::from_secs(config.timeout_secs as u64),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn build_prompt(text: &str, headline: &str, url: &str) -> String {
        format!(
            "Analyze the following content for misinformation and credibility:\n\n\
             Headline: {headline}\n\
             URL: {url}\n\
             Text: {text}\n\n\
             Provide:\n\
             - Credibility score (0-1)\n\
             - Bias score (0-1)\n\
             - Summary\n\
             - Recommendations"
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn analyze(
        &self,
        text: &str,
        headline: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::build_prompt(text, headline, url),
                },
            ],
        };

        debug!("Requesting OpenAI analysis (model: {})", self.model);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status().as_u16();

        if status != 200 {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(ProviderError::Api { status, message });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Json(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ProviderError::Json("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OpenAiConfig {
        OpenAiConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = OpenAiProvider::new(test_config());
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_custom_api_base() {
        let provider = OpenAiProvider::new(test_config()).with_api_base("http://localhost:8089");
        assert_eq!(provider.api_base, "http://localhost:8089");
    }

    #[test]
    fn test_prompt_includes_all_fields() {
        let prompt = OpenAiProvider::build_prompt("body text", "big headline", "http://x.test");
        assert!(prompt.contains("Headline: big headline"));
        assert!(prompt.contains("URL: http://x.test"));
        assert!(prompt.contains("Text: body text"));
        assert!(prompt.contains("Credibility score (0-1)"));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "sys".to_string(),
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
        assert!(json.contains("\"role\":\"system\""));
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"verdict"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "verdict");
    }
}
