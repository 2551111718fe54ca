use anyhow::{Context, Result};

/// Default endpoint of the external resume-parsing service.
const DEFAULT_AFFINDA_URL: &str = "https://api.affinda.com/v2/resumes";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub affinda_api_key: String,
    pub affinda_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            affinda_api_key: require_env("AFFINDA_API_KEY")?,
            affinda_url: std::env::var("AFFINDA_URL")
                .unwrap_or_else(|_| DEFAULT_AFFINDA_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
