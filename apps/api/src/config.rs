use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            "redis" => Ok(StoreBackend::Redis),
            other => bail!("unknown store backend '{other}' (expected memory, file or redis)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on invalid values or a missing REDIS_URL for the redis backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    pub data_dir: PathBuf,
    pub redis_url: Option<String>,
    pub redis_key_prefix: String,
    pub analysis_delay: Duration,
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            store_backend: StoreBackend::File,
            data_dir: PathBuf::from("./data"),
            redis_url: None,
            redis_key_prefix: "folio".to_string(),
            analysis_delay: Duration::ZERO,
            share_base_url: "http://localhost:8080/share".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let store_backend = match lookup("STORE_BACKEND") {
            Some(v) => v.parse::<StoreBackend>().context("STORE_BACKEND is invalid")?,
            None => defaults.store_backend,
        };

        let redis_url = lookup("REDIS_URL").filter(|v| !v.trim().is_empty());
        if store_backend == StoreBackend::Redis && redis_url.is_none() {
            bail!("Required environment variable 'REDIS_URL' is not set (STORE_BACKEND=redis)");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            store_backend,
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            redis_url,
            redis_key_prefix: lookup("REDIS_KEY_PREFIX").unwrap_or(defaults.redis_key_prefix),
            analysis_delay: match lookup("ANALYSIS_DELAY_MS") {
                Some(v) => Duration::from_millis(
                    v.parse::<u64>()
                        .context("ANALYSIS_DELAY_MS must be a whole number of milliseconds")?,
                ),
                None => defaults.analysis_delay,
            },
            share_base_url: lookup("SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
        })
    }
}
