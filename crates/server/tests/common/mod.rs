//! Common test utilities for E2E testing with mocks.
//!
//! Provides a test fixture that creates an in-process server with mock AI
//! providers injected, so every analysis mode can be exercised without
//! provider credentials or network access.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mguard_core::{testing::MockProvider, AiProvider, Config};
use mguard_server::{api::create_router, state::AppState};

/// Test fixture for E2E testing with mock providers.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock OpenAI provider, if injected
    pub openai: Option<Arc<MockProvider>>,
    /// Mock Gemini provider, if injected
    pub gemini: Option<Arc<MockProvider>>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with both providers mocked.
    pub fn new() -> Self {
        let openai = Arc::new(MockProvider::new("openai"));
        let gemini = Arc::new(MockProvider::new("gemini"));
        Self::build(Some(openai), Some(gemini))
    }

    /// Create a fixture with no providers configured.
    pub fn without_providers() -> Self {
        Self::build(None, None)
    }

    fn build(openai: Option<Arc<MockProvider>>, gemini: Option<Arc<MockProvider>>) -> Self {
        let state = Arc::new(AppState::new(
            Config::default(),
            openai
                .as_ref()
                .map(|p| Arc::clone(p) as Arc<dyn AiProvider>),
            gemini
                .as_ref()
                .map(|p| Arc::clone(p) as Arc<dyn AiProvider>),
        ));

        Self {
            router: create_router(state),
            openai,
            gemini,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response was not valid JSON")
        };

        TestResponse { status, body }
    }
}
