use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    5000
}

/// External AI provider configuration. Each provider is optional; an absent
/// section means that analysis mode reports itself as not configured.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// OpenAI provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_api_base")]
    pub api_base: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_api_base() -> String {
    "https://api.openai.com".to_string()
}

/// Gemini provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_api_base")]
    pub api_base: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_gemini_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses (API keys redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub providers: SanitizedProvidersConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProvidersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai: Option<SanitizedProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<SanitizedProviderConfig>,
}

/// Provider config with the API key replaced by a configured flag
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProviderConfig {
    pub model: String,
    pub api_base: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            providers: SanitizedProvidersConfig {
                openai: config.providers.openai.as_ref().map(|p| {
                    SanitizedProviderConfig {
                        model: p.model.clone(),
                        api_base: p.api_base.clone(),
                        api_key_configured: !p.api_key.is_empty(),
                        timeout_secs: p.timeout_secs,
                    }
                }),
                gemini: config.providers.gemini.as_ref().map(|p| {
                    SanitizedProviderConfig {
                        model: p.model.clone(),
                        api_base: p.api_base.clone(),
                        api_key_configured: !p.api_key.is_empty(),
                        timeout_secs: p.timeout_secs,
                    }
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_config_redacts_keys() {
        let config = Config {
            server: ServerConfig::default(),
            providers: ProvidersConfig {
                openai: Some(OpenAiConfig {
                    api_key: "sk-secret".to_string(),
                    model: default_openai_model(),
                    api_base: default_openai_api_base(),
                    timeout_secs: 30,
                }),
                gemini: None,
            },
        };

        let sanitized = SanitizedConfig::from(&config);
        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("\"api_key_configured\":true"));
        assert!(!json.contains("\"gemini\""));
    }
}
