//! Resolver configuration read from the process environment.
//!
//! Reads:
//!   BRAND_KEY                  : pins every request to one brand (optional)
//!   APP_ENV                    : development | test | production (default: production)
//!   BRAND_ALLOW_COOKIE_OVERRIDE: enables the dev override cookie (default: false)
//!   BRAND_OVERRIDE_SECRET      : HS256 secret for override tokens, >= 32 bytes
//!
//! The override secret is mandatory whenever the cookie override is active.
//! There is no built-in fallback secret.

use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

pub const ENV_FIXED_BRAND: &str = "BRAND_KEY";
pub const ENV_RUNTIME_MODE: &str = "APP_ENV";
pub const ENV_ALLOW_COOKIE_OVERRIDE: &str = "BRAND_ALLOW_COOKIE_OVERRIDE";
pub const ENV_OVERRIDE_SECRET: &str = "BRAND_OVERRIDE_SECRET";

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Test,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Accepts `development`/`dev`/`local`, `test`, `production`/`prod` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidRuntimeMode(s.to_string())),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Default)]
pub struct ResolverConfig {
    /// Raw value of `BRAND_KEY`; validated at resolution time.
    pub fixed_brand: Option<String>,
    pub runtime_mode: RuntimeMode,
    pub allow_cookie_override: bool,
    pub override_secret: Option<String>,
}

// Keeps the secret out of logs.
impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("fixed_brand", &self.fixed_brand)
            .field("runtime_mode", &self.runtime_mode)
            .field("allow_cookie_override", &self.allow_cookie_override)
            .field(
                "override_secret",
                &self.override_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let runtime_mode = get(ENV_RUNTIME_MODE)
            .map(|v| RuntimeMode::parse(&v))
            .transpose()?
            .unwrap_or_default();
        let allow_cookie_override = get(ENV_ALLOW_COOKIE_OVERRIDE)
            .map(|v| parse_flag(ENV_ALLOW_COOKIE_OVERRIDE, &v))
            .transpose()?
            .unwrap_or(false);

        let config = Self {
            fixed_brand: get(ENV_FIXED_BRAND).map(|v| v.trim().to_string()),
            runtime_mode,
            allow_cookie_override,
            override_secret: get(ENV_OVERRIDE_SECRET),
        };
        config.validate()?;
        Ok(config)
    }

    /// Cookie override is honoured only in development with the flag set.
    pub fn cookie_override_active(&self) -> bool {
        self.runtime_mode.is_development() && self.allow_cookie_override
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.override_secret {
            Some(secret) if secret.len() < MIN_SECRET_LEN => Err(ConfigError::WeakSecret {
                len: secret.len(),
                min: MIN_SECRET_LEN,
            }),
            None if self.cookie_override_active() => {
                Err(ConfigError::MissingSecret(ENV_OVERRIDE_SECRET.to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
