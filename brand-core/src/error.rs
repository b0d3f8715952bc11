use thiserror::Error;

use crate::config::RuntimeMode;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("unknown brand key: {0}")]
    UnknownBrandKey(String),

    #[error("no brand registered for host: {0}")]
    UnknownHost(String),

    #[error("request carried no host header")]
    MissingHost,

    #[error("no brand uses channel token: {0}")]
    UnknownChannelToken(String),

    #[error("override token rejected: {0}")]
    Token(#[from] TokenError),

    #[error("brand override is only available in development (runtime mode: {0})")]
    OverrideUnavailable(RuntimeMode),

    #[error("brand override signing is not configured")]
    SignerUnavailable,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BrandError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::UnknownBrandKey(_) | Self::UnknownChannelToken(_) => 400,
            Self::UnknownHost(_) | Self::MissingHost => 404,
            Self::Token(_) => 401,
            Self::OverrideUnavailable(_) => 403,
            Self::SignerUnavailable => 503,
            Self::Config(_) => 500,
        }
    }
}

/// Reasons a dev override token is not honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no override cookie present")]
    Missing,

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("signature does not match")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token names an unknown brand: {0}")]
    InvalidBrand(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid runtime mode {0:?} (expected development, test or production)")]
    InvalidRuntimeMode(String),

    #[error("invalid boolean for {var}: {value:?}")]
    InvalidFlag { var: String, value: String },

    #[error("{0} must be set when the brand cookie override is enabled")]
    MissingSecret(String),

    #[error("override secret too short: {len} bytes, need at least {min}")]
    WeakSecret { len: usize, min: usize },

    #[error("host {host} registered for both {first} and {second}")]
    DuplicateHost {
        host: String,
        first: String,
        second: String,
    },

    #[error("brand {0} registered twice")]
    DuplicateBrand(String),

    #[error("default brand {0} has no configuration")]
    UnknownDefaultBrand(String),
}
