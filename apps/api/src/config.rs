use anyhow::{Context, Result};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_PAGE_TITLE: &str = "AI Resume Optimizer";

/// Application configuration loaded from environment variables.
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Not validated here: a missing key shows up as a failed completion call,
    /// which the analyzer turns into a fallback result.
    pub openai_api_key: String,
    pub openai_api_url: String,
    /// `None` means the completion call may block indefinitely.
    pub llm_timeout_secs: Option<u64>,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub page_title: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")?
                .map(|v| {
                    v.parse::<u64>()
                        .context("LLM_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES")? {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            page_title: std::env::var("PAGE_TITLE")
                .unwrap_or_else(|_| DEFAULT_PAGE_TITLE.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler tests. Never talks to a real endpoint.
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: "test-key".to_string(),
            openai_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            llm_timeout_secs: Some(1),
            port: 0,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            rust_log: "debug".to_string(),
        }
    }
}

/// Reads an env var, treating unset and blank values the same way.
fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v.trim().to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid unicode")),
    }
}
