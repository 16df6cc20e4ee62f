use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Every setting has a working local default, so a bare `cargo run`
/// talks to an Ollama instance on localhost and writes next to the binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_endpoint: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub upload_dir: String,
    pub output_dir: String,
    pub letter_filename: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_endpoint: env_or("LLM_ENDPOINT", DEFAULT_ENDPOINT),
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            upload_dir: env_or("UPLOAD_DIR", "./uploads"),
            output_dir: env_or("OUTPUT_DIR", "./output"),
            letter_filename: env_or("LETTER_FILENAME", "cover_letter.pdf"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
