//! taskcache Observability
//!
//! Provides:
//! - Tracing with console, rolling-file and JSON output, plus OpenTelemetry
//!   export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//!
//! Everything except basic console logging can be switched off at runtime
//! with `OBSERVABILITY_ENABLED=false`.
//!
//! # Examples
//!
//! ```no_run
//! use taskcache_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing("taskcache", "0.1.0");
//!     // ... application code ...
//!     shutdown_tracer();
//! }
//! ```

pub mod basic_logging;
pub mod logging;
pub mod metrics;

use std::sync::OnceLock;

pub use crate::basic_logging::init_basic_console_logging;
pub use crate::logging::{init_tracing, logging_middleware, shutdown_tracer};
pub use crate::metrics::{
    CacheLookup, init_metrics, metrics_app, metrics_middleware, track_cache_error,
    track_cache_lookup, track_task_mutation,
};
pub use metrics_exporter_prometheus::PrometheusHandle;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| parse_enabled(&v))
            .unwrap_or(true) // Enabled by default
    })
}

fn parse_enabled(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enabled() {
        assert!(parse_enabled("true"));
        assert!(parse_enabled("1"));
        assert!(!parse_enabled("FALSE"));
        assert!(!parse_enabled(" 0 "));
    }
}
