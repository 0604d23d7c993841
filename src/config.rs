use std::env;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the dashboard backend (the `/api` prefix is added by the client)
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("POLYDASH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = validate_origin(&api_url)
            .with_context(|| {
                format!("POLYDASH_API_URL must be an http(s) origin, got {:?}", api_url)
            })?;

        Ok(Config { api_url })
    }
}

/// Strip trailing slashes and check the scheme
fn validate_origin(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!("missing http:// or https:// scheme");
    }
    Ok(trimmed.to_string())
}
