//! BrandResolver: one brand per request, via a fixed priority chain.
//!
//! Order: environment pin, Host header, dev override cookie, default brand.
//! Each strategy yields `None` when it does not apply, `Some(Err)` on a miss
//! (logged and recorded), or `Some(Ok)` to stop the chain. `resolve` never
//! fails: the default brand is always available.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::brand::{BrandConfig, BrandKey};
use crate::config::{ResolverConfig, ENV_FIXED_BRAND};
use crate::error::{BrandError, ConfigError, TokenError};
use crate::registry::BrandRegistry;
use crate::signer::DevOverrideSigner;
use crate::theme::{ThemeProjector, ThemeVariables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Environment,
    Host,
    Cookie,
    Fallback,
}

impl ResolutionSource {
    /// Strategies tried before falling back, in priority order.
    pub const CHAIN: [ResolutionSource; 3] = [Self::Environment, Self::Host, Self::Cookie];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Host => "host",
            Self::Cookie => "cookie",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy that applied but did not produce a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionMiss {
    pub source: ResolutionSource,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandResolution {
    pub brand: Arc<BrandConfig>,
    pub source: ResolutionSource,
    pub resolved_at: DateTime<Utc>,
    pub misses: Vec<ResolutionMiss>,
}

impl BrandResolution {
    pub fn key(&self) -> BrandKey {
        self.brand.key
    }

    pub fn channel_token(&self) -> &str {
        &self.brand.channel_token
    }

    pub fn theme_variables(&self) -> ThemeVariables {
        ThemeProjector::project(&self.brand.theme)
    }
}

/// Request inputs the resolver reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub host: Option<&'a str>,
    pub override_cookie: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_override_cookie(mut self, token: &'a str) -> Self {
        self.override_cookie = Some(token);
        self
    }
}

pub struct BrandResolver {
    registry: Arc<BrandRegistry>,
    config: ResolverConfig,
    signer: Option<DevOverrideSigner>,
}

impl BrandResolver {
    pub fn new(registry: Arc<BrandRegistry>, config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let signer = config
            .override_secret
            .as_deref()
            .map(|secret| DevOverrideSigner::new(secret.as_bytes(), config.runtime_mode))
            .transpose()?;

        if let Some(raw) = config.fixed_brand.as_deref() {
            if !registry.is_valid_brand_key(raw) {
                tracing::warn!("{ENV_FIXED_BRAND}={raw} is not a known brand; pin ignored");
            }
        }
        tracing::info!(
            mode = %config.runtime_mode,
            fixed = ?config.fixed_brand,
            cookie_override = config.cookie_override_active(),
            "brand resolver ready"
        );

        Ok(Self {
            registry,
            config,
            signer,
        })
    }

    pub fn registry(&self) -> &Arc<BrandRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Present whenever a valid override secret is configured.
    pub fn signer(&self) -> Option<&DevOverrideSigner> {
        self.signer.as_ref()
    }

    pub fn resolve(&self, request: &RequestContext<'_>) -> BrandResolution {
        let mut misses = Vec::new();

        for source in ResolutionSource::CHAIN {
            match self.attempt(source, request) {
                None => continue,
                Some(Ok(brand)) => return self.finish(brand, source, misses),
                Some(Err(e)) => {
                    if matches!(e, BrandError::Token(TokenError::Missing)) {
                        tracing::debug!(%source, "brand strategy skipped: {e}");
                    } else {
                        tracing::warn!(%source, "brand strategy failed: {e}");
                    }
                    misses.push(ResolutionMiss {
                        source,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.finish(
            self.registry.get_default_brand(),
            ResolutionSource::Fallback,
            misses,
        )
    }

    /// Channel token of the brand this request resolves to.
    pub fn brand_channel_token(&self, request: &RequestContext<'_>) -> String {
        self.resolve(request).brand.channel_token.clone()
    }

    /// True when `BRAND_KEY` names a known brand.
    pub fn is_brand_fixed(&self) -> bool {
        self.fixed_brand_key().is_some()
    }

    pub fn fixed_brand_key(&self) -> Option<BrandKey> {
        self.config
            .fixed_brand
            .as_deref()
            .and_then(|raw| raw.parse().ok())
    }

    fn attempt(
        &self,
        source: ResolutionSource,
        request: &RequestContext<'_>,
    ) -> Option<Result<Arc<BrandConfig>, BrandError>> {
        match source {
            ResolutionSource::Environment => self
                .config
                .fixed_brand
                .as_deref()
                .map(|raw| self.registry.try_brand_by_key(raw)),
            ResolutionSource::Host => Some(
                request
                    .host
                    .ok_or(BrandError::MissingHost)
                    .and_then(|host| self.registry.try_brand_by_host(host)),
            ),
            ResolutionSource::Cookie => self
                .config
                .cookie_override_active()
                .then(|| self.verify_override(request.override_cookie)),
            ResolutionSource::Fallback => None,
        }
    }

    fn verify_override(&self, cookie: Option<&str>) -> Result<Arc<BrandConfig>, BrandError> {
        let signer = self.signer.as_ref().ok_or(BrandError::SignerUnavailable)?;
        let token = cookie.ok_or(TokenError::Missing)?;
        let claims = signer.verify(token)?;
        let key = claims.brand_key()?;
        self.registry
            .brand(key)
            .ok_or_else(|| BrandError::UnknownBrandKey(key.to_string()))
    }

    fn finish(
        &self,
        brand: Arc<BrandConfig>,
        source: ResolutionSource,
        misses: Vec<ResolutionMiss>,
    ) -> BrandResolution {
        tracing::debug!(brand = %brand.key, %source, "brand resolved");
        BrandResolution {
            brand,
            source,
            resolved_at: Utc::now(),
            misses,
        }
    }
}
