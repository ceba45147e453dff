use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::backend::client::DEFAULT_API_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — a locally running backend needs no configuration at all.
pub struct Config {
    /// Base URL of the scoring backend.
    pub api_url: String,
    /// Transport-level timeout for backend calls.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let api_url = env::var("GRIFT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match env::var("GRIFT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("GRIFT_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
