use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub session_dir: PathBuf,
    pub processing_delay_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            session_dir: std::env::var("CAREER_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir().join("career-compass")),
            processing_delay_ms: parse_delay(std::env::var("CAREER_PROCESSING_DELAY_MS").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_delay(raw: Option<String>) -> Result<u64> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("CAREER_PROCESSING_DELAY_MS must be milliseconds, got '{value}'")),
        None => Ok(DEFAULT_PROCESSING_DELAY_MS),
    }
}
