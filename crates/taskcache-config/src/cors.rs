use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4200";

/// Allowed CORS origins.
///
/// `ALLOWED_ORIGINS` accepts either a comma separated list
/// (`http://a.test,http://b.test`) or a JSON array
/// (`["http://a.test", "http://b.test"]`). A `*` entry allows any origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let raw = value.unwrap_or(DEFAULT_ALLOWED_ORIGINS).trim();

        let allowed_origins = if raw.starts_with('[') {
            serde_json::from_str::<Vec<String>>(raw)
                .unwrap_or_default()
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        } else {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
