pub mod analyze;
pub mod handlers;
pub mod routes;

pub use routes::create_router;

/// Service version reported in response envelopes
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the root endpoint
pub const SERVICE_NAME: &str = "Misinformation Guard API";
