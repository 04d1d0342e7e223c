//! Content analysis endpoint.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use mguard_core::{analyze, AnalysisMode, AnalysisReport};

use super::VERSION;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "basic".to_string()
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
    pub metadata: AnalysisMetadata,
}

/// The three payload shapes an analysis can produce. Serialized untagged so
/// the wire format stays `{credibility_score, analysis}`, `{ai_result}` or
/// `{error}` at the top level.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Heuristic(AnalysisReport),
    Delegated { ai_result: String },
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct AnalysisMetadata {
    pub analysis_time: String,
    pub text_length: usize,
    pub mode: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /api/analyze
///
/// Score submitted text for credibility, either locally or via a configured
/// AI provider, selected by the `mode` field.
pub async fn analyze_content(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if body.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text content provided".to_string(),
            }),
        ));
    }

    let outcome = match AnalysisMode::parse(&body.mode) {
        Some(AnalysisMode::Basic) => {
            AnalysisOutcome::Heuristic(analyze(&body.text, &body.headline, &body.url))
        }
        Some(mode) => match state.provider_for(mode) {
            Some(provider) => {
                match provider.analyze(&body.text, &body.headline, &body.url).await {
                    Ok(ai_result) => AnalysisOutcome::Delegated { ai_result },
                    Err(e) => {
                        error!("Analysis error from {}: {}", provider.name(), e);
                        return Err((
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(ErrorResponse {
                                error: "Internal analysis error".to_string(),
                            }),
                        ));
                    }
                }
            }
            None => AnalysisOutcome::Failed {
                error: format!("{} API key not configured", provider_label(mode)),
            },
        },
        None => AnalysisOutcome::Failed {
            error: "Invalid analysis mode".to_string(),
        },
    };

    Ok(Json(AnalyzeResponse {
        outcome,
        metadata: AnalysisMetadata {
            analysis_time: Utc::now().to_rfc3339(),
            text_length: body.text.chars().count(),
            mode: body.mode,
            version: VERSION.to_string(),
        },
    }))
}

fn provider_label(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Basic => "Basic",
        AnalysisMode::OpenAi => "OpenAI",
        AnalysisMode::Gemini => "Gemini",
    }
}
