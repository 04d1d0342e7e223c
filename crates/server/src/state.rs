use std::sync::Arc;

use mguard_core::{AiProvider, AnalysisMode, Config};

/// Shared application state.
///
/// Provider clients are constructed once at startup and injected here; the
/// heuristic analyzer needs no state at all.
pub struct AppState {
    config: Config,
    openai: Option<Arc<dyn AiProvider>>,
    gemini: Option<Arc<dyn AiProvider>>,
}

impl AppState {
    pub fn new(
        config: Config,
        openai: Option<Arc<dyn AiProvider>>,
        gemini: Option<Arc<dyn AiProvider>>,
    ) -> Self {
        Self {
            config,
            openai,
            gemini,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provider client for a delegated mode, if configured.
    /// `Basic` runs locally and never has a provider.
    pub fn provider_for(&self, mode: AnalysisMode) -> Option<&Arc<dyn AiProvider>> {
        match mode {
            AnalysisMode::Basic => None,
            AnalysisMode::OpenAi => self.openai.as_ref(),
            AnalysisMode::Gemini => self.gemini.as_ref(),
        }
    }

    pub fn openai_enabled(&self) -> bool {
        self.openai.is_some()
    }

    pub fn gemini_enabled(&self) -> bool {
        self.gemini.is_some()
    }
}
