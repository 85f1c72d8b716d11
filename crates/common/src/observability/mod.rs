//! Tracing setup for RAGpress hosts
//!
//! Initializes the global tracing subscriber from observability
//! configuration. Library code only emits events; a host calls
//! [`init_tracing`] once at startup.

use crate::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level. With
/// `json_logging` enabled, events are emitted as structured JSON
/// lines; otherwise the human-readable formatter is used.
pub fn init_tracing(config: &ObservabilityConfig) {
    // Load environment variables first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::info!(
        service = %config.service_name,
        version = crate::VERSION,
        "Tracing initialized"
    );
}
