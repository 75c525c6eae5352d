//! Service configuration
//!
//! Reads config from env vars:
//!   SKILL_SERVICE_BIND_ADDR — listen address (default: 127.0.0.1:9000)
//!   SKILL_SERVICE_LOG       — tracing filter used when RUST_LOG is unset

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const BIND_ADDR_VAR: &str = "SKILL_SERVICE_BIND_ADDR";
pub const LOG_FILTER_VAR: &str = "SKILL_SERVICE_LOG";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:9000";
pub const DEFAULT_LOG_FILTER: &str = "skill_service=info,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

impl ServiceConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}
