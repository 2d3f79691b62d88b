use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding generated documents until their single download.
    pub upload_dir: PathBuf,
    /// Built form UI, served for any non-API GET when the directory exists.
    pub static_dir: PathBuf,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            static_dir: env_or("STATIC_DIR", "client/dist").into(),
            body_limit_bytes: match std::env::var("BODY_LIMIT_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("BODY_LIMIT_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_BODY_LIMIT_BYTES,
            },
        })
    }

    /// Configuration rooted at `upload_dir`, used by router tests.
    #[cfg(test)]
    pub fn for_tests(upload_dir: impl Into<PathBuf>) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            upload_dir: upload_dir.into(),
            static_dir: PathBuf::from("does-not-exist"),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
