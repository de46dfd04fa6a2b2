use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every external service is optional: a missing key disables that integration
/// and the service falls back to its deterministic behavior.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    /// Scheme of a database URL that was set but is not PostgreSQL.
    pub rejected_database_scheme: Option<String>,
    pub db_max_connections: u32,
    pub anthropic_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let (database_url, rejected_database_scheme) = split_database_url(
            optional_env("DATABASE_URL").or_else(|| optional_env("NETLIFY_DATABASE_URL")),
        );

        Ok(Config {
            database_url,
            rejected_database_scheme,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 5)?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn database_configured(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn llm_configured(&self) -> bool {
        self.anthropic_api_key.is_some()
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

/// Keeps a PostgreSQL URL; otherwise reports only its scheme, never credentials.
fn split_database_url(raw: Option<String>) -> (Option<String>, Option<String>) {
    match raw {
        Some(url) if is_postgres_url(&url) => (Some(url), None),
        Some(url) => {
            let scheme = url
                .split_once("://")
                .map(|(scheme, _)| scheme.to_string())
                .unwrap_or_else(|| "(missing)".to_string());
            (None, Some(scheme))
        }
        None => (None, None),
    }
}

fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}
