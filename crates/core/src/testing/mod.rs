//! Testing utilities and mock implementations for E2E tests.
//!
//! Provides a mock AI provider so the full server stack can be exercised
//! in-process without real provider credentials or network access.

mod mock_provider;

pub use mock_provider::{MockProvider, RecordedAnalysis};
