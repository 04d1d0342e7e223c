pub mod ai;
pub mod analyzer;
pub mod config;
pub mod testing;

pub use ai::{AiProvider, GeminiProvider, OpenAiProvider, ProviderError};
pub use analyzer::{analyze, AnalysisDetails, AnalysisMode, AnalysisReport};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, GeminiConfig,
    OpenAiConfig, ProvidersConfig, SanitizedConfig, ServerConfig,
};
