//! Process configuration, read once from the environment at start-up.

use std::net::SocketAddr;

use anyhow::{Context, bail};

use opsuite_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "OPSUITE_BIND_ADDR";
pub const DEFAULT_PAGE_SIZE_VAR: &str = "OPSUITE_DEFAULT_PAGE_SIZE";
pub const LOG_FORMAT_VAR: &str = "OPSUITE_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Page size used when a list request omits `limit`.
    pub default_page_size: u64,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_page_size: 10,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw
                .parse::<SocketAddr>()
                .with_context(|| format!("{BIND_ADDR_VAR}: invalid socket address '{raw}'"))?;
        }

        if let Some(raw) = lookup(DEFAULT_PAGE_SIZE_VAR) {
            let size = raw
                .parse::<u64>()
                .with_context(|| format!("{DEFAULT_PAGE_SIZE_VAR}: not an integer '{raw}'"))?;
            if size == 0 {
                bail!("{DEFAULT_PAGE_SIZE_VAR}: must be at least 1");
            }
            config.default_page_size = size;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse::<LogFormat>().context(LOG_FORMAT_VAR)?;
        }

        Ok(config)
    }
}
