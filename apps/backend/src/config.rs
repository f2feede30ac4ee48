//! Runtime configuration read from the environment.

use std::time::Duration;

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CATALOG_API_BASE: &str = "https://letankim.id.vn";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 15;

/// Server and upstream catalog settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_api_base: String,
    pub catalog_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognized env vars (all optional):
    /// - HOST: Bind address (default "0.0.0.0")
    /// - PORT: Bind port (default 3000)
    /// - CATALOG_API_BASE: Base URL of the course catalog API
    /// - CATALOG_TIMEOUT_SECS: Upstream request timeout in seconds (default 15)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {value}"))?,
            None => DEFAULT_PORT,
        };

        let catalog_api_base = lookup("CATALOG_API_BASE")
            .unwrap_or_else(|| DEFAULT_CATALOG_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid CATALOG_TIMEOUT_SECS value: {value}"))?,
            None => DEFAULT_CATALOG_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            catalog_api_base,
            catalog_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Address to bind the HTTP listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
