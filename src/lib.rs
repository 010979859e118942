//! Variant Classification Relay Library
//!
//! Fans batches of genetic variants out to an upstream classification API
//! and returns the reshaped, order-preserving results

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::{franklin, variant};
pub use services::{BatchCoordinator, UpstreamClient};
pub use utils::error::{AppError, AppResult, ClassifyError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
