use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logging::default_directives;

/// Initialize console-only logging.
///
/// Used when `OBSERVABILITY_ENABLED=false` or when the log directory cannot
/// be created.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info"),
///   overridden entirely by `RUST_LOG`
/// - **Filtering**: Noisy dependencies filtered to warn level
/// - **Format**: Compact, with module paths and source locations
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
