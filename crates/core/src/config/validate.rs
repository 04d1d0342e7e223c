use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Configured providers carry a non-empty API key
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if let Some(openai) = &config.providers.openai {
        if openai.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "providers.openai.api_key cannot be empty".to_string(),
            ));
        }
    }

    if let Some(gemini) = &config.providers.gemini {
        if gemini.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "providers.gemini.api_key cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
