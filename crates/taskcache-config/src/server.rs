//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! - `SERVER_HOST`: Interface to bind (default: `0.0.0.0`)
//! - `SERVER_PORT`: Port for the API listener (default: `3000`)
//! - `METRICS_PORT`: Port for the Prometheus listener (default: `9000`)
//! - `PROJECT_NAME`: Title used in the OpenAPI document (default: `taskcache`)
//! - `API_V1_STR`: Prefix under which the OpenAPI document is served (default: `/api/v1`)

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub project_name: String,
    pub api_v1_str: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9000,
            project_name: "taskcache".to_string(),
            api_v1_str: "/api/v1".to_string(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            metrics_port: env::var("METRICS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.metrics_port),
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            api_v1_str: env::var("API_V1_STR")
                .map(|v| normalize_prefix(&v))
                .unwrap_or(defaults.api_v1_str),
        }
    }

    /// `host:port` for the API listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `host:port` for the metrics listener.
    pub fn metrics_address(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }

    /// Path of the OpenAPI JSON document, e.g. `/api/v1/openapi.json`.
    pub fn openapi_path(&self) -> String {
        format!("{}/openapi.json", self.api_v1_str)
    }
}

/// Ensures a leading slash and strips trailing ones.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.metrics_address(), "0.0.0.0:9000");
        assert_eq!(config.openapi_path(), "/api/v1/openapi.json");
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/api/v2/"), "/api/v2");
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/"), "");
    }
}
