//! Server configuration.
//!
//! Reads `BIND_ADDR` (default: 0.0.0.0:3000) on top of the resolver
//! variables documented in `brand_core::config`.

use brand_core::{ConfigError, ResolverConfig};

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub resolver: ResolverConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(ENV_BIND_ADDR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            bind_addr,
            resolver: ResolverConfig::from_lookup(lookup)?,
        })
    }
}
