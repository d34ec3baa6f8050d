//! Runtime settings read from the environment (and `.env` via dotenv)

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::api::{BinanceClient, FearGreedClient, OkxClient};

pub const DEFAULT_OUTPUT_DIR: &str = "backtest-data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OKX credentials are partially configured; set all of OKX_API_KEY, OKX_API_SECRET and OKX_PASSPHRASE or none")]
    PartialCredentials,
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// OKX API key triple
#[derive(Clone)]
pub struct OkxCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub passphrase: String,
}

impl fmt::Debug for OkxCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OkxCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub okx_base_url: String,
    pub binance_base_url: String,
    pub fear_greed_base_url: String,
    pub okx_credentials: Option<OkxCredentials>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let okx_credentials = match (var("OKX_API_KEY"), var("OKX_API_SECRET"), var("OKX_PASSPHRASE")) {
            (Some(api_key), Some(api_secret), Some(passphrase)) => Some(OkxCredentials {
                api_key,
                api_secret,
                passphrase,
            }),
            (None, None, None) => None,
            _ => return Err(ConfigError::PartialCredentials),
        };

        Ok(Self {
            output_dir: var("BACKTEST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            okx_base_url: base_url(var("OKX_BASE_URL"), "OKX_BASE_URL", OkxClient::DEFAULT_BASE_URL)?,
            binance_base_url: base_url(
                var("BINANCE_BASE_URL"),
                "BINANCE_BASE_URL",
                BinanceClient::DEFAULT_BASE_URL,
            )?,
            fear_greed_base_url: base_url(
                var("FEAR_GREED_BASE_URL"),
                "FEAR_GREED_BASE_URL",
                FearGreedClient::DEFAULT_BASE_URL,
            )?,
            okx_credentials,
        })
    }
}

fn base_url(value: Option<String>, name: &'static str, default: &str) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(url),
        Some(url) => Err(ConfigError::Invalid {
            name,
            reason: format!("expected an http(s) URL, got {:?}", url),
        }),
    }
}
