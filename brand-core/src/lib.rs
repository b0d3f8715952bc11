//! brand-core: per-request brand resolution for a multi-brand storefront.
//!
//! Several storefront brands share one codebase. For every request the
//! [`BrandResolver`] picks exactly one [`BrandConfig`]:
//!
//! 1. `BRAND_KEY` environment pin
//! 2. `Host` header (exact, then subdomain suffix match)
//! 3. signed `brand_override` cookie (development only, opt-in)
//! 4. the default brand
//!
//! ```rust
//! use std::sync::Arc;
//! use brand_core::{BrandKey, BrandRegistry, BrandResolver, RequestContext, ResolverConfig};
//!
//! let registry = Arc::new(BrandRegistry::builtin().unwrap());
//! let resolver = BrandResolver::new(registry, ResolverConfig::default()).unwrap();
//! let resolution = resolver.resolve(&RequestContext::new().with_host("shop.tooly.com:443"));
//! assert_eq!(resolution.key(), BrandKey::Tooly);
//! ```

pub mod brand;
pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod signer;
pub mod theme;

pub use brand::{BrandConfig, BrandKey, BrandTheme};
pub use config::{ResolverConfig, RuntimeMode};
pub use error::{BrandError, ConfigError, TokenError};
pub use registry::{BrandRegistry, HostBrandMap, HostMatch};
pub use resolver::{BrandResolution, BrandResolver, RequestContext, ResolutionMiss, ResolutionSource};
pub use signer::{DevOverrideClaims, DevOverrideSigner, IssuedOverride, OVERRIDE_COOKIE};
pub use theme::{ThemeProjector, ThemeVariables};
