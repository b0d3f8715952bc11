//! DevOverrideSigner: HS256 tokens pinning a browser to a brand during development.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::brand::BrandKey;
use crate::config::{RuntimeMode, MIN_SECRET_LEN};
use crate::error::{BrandError, ConfigError, TokenError};

/// Cookie carrying the override token.
pub const OVERRIDE_COOKIE: &str = "brand_override";

pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims embedded in an override token. `brand` stays a raw string until
/// the resolver validates it against the known keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevOverrideClaims {
    pub brand: String,
    pub iat: i64,
    pub exp: i64,
}

impl DevOverrideClaims {
    pub fn brand_key(&self) -> Result<BrandKey, TokenError> {
        self.brand
            .parse()
            .map_err(|_| TokenError::InvalidBrand(self.brand.clone()))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// A freshly issued token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedOverride {
    pub token: String,
    pub brand: BrandKey,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DevOverrideSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    mode: RuntimeMode,
}

impl DevOverrideSigner {
    pub fn new(secret: &[u8], mode: RuntimeMode) -> Result<Self, ConfigError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                len: secret.len(),
                min: MIN_SECRET_LEN,
            });
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            mode,
        })
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn issue(&self, brand: BrandKey) -> Result<IssuedOverride, BrandError> {
        self.issue_at(brand, Utc::now())
    }

    /// Issue with an explicit issue time. Refused outside development.
    pub fn issue_at(
        &self,
        brand: BrandKey,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedOverride, BrandError> {
        if !self.mode.is_development() {
            tracing::error!(mode = %self.mode, "refusing to issue brand override token");
            return Err(BrandError::OverrideUnavailable(self.mode));
        }
        let expires_at = issued_at + Duration::hours(TOKEN_TTL_HOURS);
        let claims = DevOverrideClaims {
            brand: brand.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;
        tracing::info!(%brand, %expires_at, "issued brand override token");
        Ok(IssuedOverride {
            token,
            brand,
            expires_at,
        })
    }

    /// Check signature, algorithm and expiry. Does not validate the brand claim.
    pub fn verify(&self, token: &str) -> Result<DevOverrideClaims, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Missing);
        }
        decode::<DevOverrideClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-for-brand-override-tokens";

    fn dev_signer() -> DevOverrideSigner {
        DevOverrideSigner::new(SECRET, RuntimeMode::Development).unwrap()
    }

    #[test]
    fn issue_then_verify() {
        let signer = dev_signer();
        let issued = signer.issue(BrandKey::Synthlab).unwrap();
        let claims = signer.verify(&issued.token).unwrap();
        assert_eq!(claims.brand_key().unwrap(), BrandKey::Synthlab);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert_eq!(claims.expires_at().unwrap().timestamp(), claims.exp);
    }

    #[test]
    fn issue_refused_outside_development() {
        for mode in [RuntimeMode::Production, RuntimeMode::Test] {
            let signer = DevOverrideSigner::new(SECRET, mode).unwrap();
            let err = signer.issue(BrandKey::Tooly).unwrap_err();
            assert!(matches!(err, BrandError::OverrideUnavailable(m) if m == mode));
        }
    }

    #[test]
    fn token_issued_25_hours_ago_is_expired() {
        let signer = dev_signer();
        let issued = signer
            .issue_at(BrandKey::Synthlab, Utc::now() - Duration::hours(25))
            .unwrap();
        assert_eq!(signer.verify(&issued.token), Err(TokenError::Expired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other =
            DevOverrideSigner::new(b"another-secret-of-sufficient-length!", RuntimeMode::Development)
                .unwrap();
        let issued = other.issue(BrandKey::Tooly).unwrap();
        assert_eq!(
            dev_signer().verify(&issued.token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            dev_signer().verify("not-a-jwt"),
            Err(TokenError::Malformed(_))
        ));
        assert_eq!(dev_signer().verify("   "), Err(TokenError::Missing));
    }

    #[test]
    fn token_without_expiry_is_rejected() {
        #[derive(Serialize)]
        struct NoExp {
            brand: &'static str,
            iat: i64,
        }
        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoExp {
                brand: "tooly",
                iat: Utc::now().timestamp(),
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(matches!(
            dev_signer().verify(&token),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_brand_claim_verifies_but_fails_key_check() {
        let now = Utc::now();
        let claims = DevOverrideClaims {
            brand: "acme".into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        let verified = dev_signer().verify(&token).unwrap();
        assert_eq!(
            verified.brand_key(),
            Err(TokenError::InvalidBrand("acme".into()))
        );
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(matches!(
            DevOverrideSigner::new(b"short", RuntimeMode::Development),
            Err(ConfigError::WeakSecret { len: 5, .. })
        ));
    }
}
