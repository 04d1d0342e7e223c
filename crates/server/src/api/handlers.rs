use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use mguard_core::AnalysisMode;

use super::{SERVICE_NAME, VERSION};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub modes: Vec<String>,
}

/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        modes: AnalysisMode::all().iter().map(|m| m.to_string()).collect(),
    })
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub openai_enabled: bool,
    pub gemini_enabled: bool,
}

/// GET /api/status
///
/// Process health and which providers are configured. Independent of the
/// analyzer.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        openai_enabled: state.openai_enabled(),
        gemini_enabled: state.gemini_enabled(),
    })
}
