//! AI provider clients for delegated analysis.
//!
//! Providers are explicit dependency objects built once at startup from
//! configuration and injected into request handling; nothing here is a
//! process-wide global.

mod gemini;
mod openai;
mod traits;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use traits::{AiProvider, ProviderError};
