use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default — the service needs no external
/// collaborators, so it starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Cap on the whole multipart request body (job description + all
    /// uploaded resumes).
    pub max_upload_bytes: usize,
    /// How many characters of each extracted resume to echo back as a
    /// preview.
    pub preview_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (32 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            preview_chars: std::env::var("PREVIEW_CHARS")
                .unwrap_or_else(|_| "500".to_string())
                .parse::<usize>()
                .context("PREVIEW_CHARS must be a character count")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 32 * 1024 * 1024,
            preview_chars: 500,
        }
    }
}
