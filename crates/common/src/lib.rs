//! RAGpress Common Library
//!
//! Shared code for the RAGpress pipeline crates including:
//! - Error types and handling
//! - Configuration management
//! - Tracing setup
//! - Metrics and observability

pub mod config;
pub mod errors;
pub mod metrics;
pub mod observability;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of chunks returned by intent-aware retrieval
pub const DEFAULT_TOP_K: usize = 5;

/// Default token budget for compressed context
pub const DEFAULT_TOKEN_LIMIT: usize = 500;
