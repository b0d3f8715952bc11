//! BrandRegistry: authoritative brand set with lookup by key, host and channel token.
//!
//! Built once at startup and shared read-only behind an `Arc`. The `get_*`
//! lookups log a warning on a miss and return `None`; the `try_*` variants
//! return the typed miss so the resolver can record why a strategy failed.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::brand::{BrandConfig, BrandKey};
use crate::catalog;
use crate::error::{BrandError, ConfigError};

/// How a hostname matched the host map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMatch {
    Exact,
    Suffix,
}

/// Lowercase hostname (no port) to brand key, in registration order.
#[derive(Debug, Clone, Default)]
pub struct HostBrandMap {
    entries: Vec<(String, BrandKey)>,
    index: HashMap<String, BrandKey>,
}

impl HostBrandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a host. Re-registering a host for the same brand is a no-op.
    pub fn insert(&mut self, host: &str, key: BrandKey) -> Result<(), ConfigError> {
        let Some(host) = normalize_host(host) else {
            return Ok(());
        };
        match self.index.get(&host) {
            Some(existing) if *existing == key => Ok(()),
            Some(existing) => Err(ConfigError::DuplicateHost {
                host,
                first: existing.to_string(),
                second: key.to_string(),
            }),
            None => {
                self.index.insert(host.clone(), key);
                self.entries.push((host, key));
                Ok(())
            }
        }
    }

    /// Exact match on an already-normalized hostname.
    pub fn exact(&self, host: &str) -> Option<BrandKey> {
        self.index.get(host).copied()
    }

    /// First registered host that equals `host` or is a dot-separated suffix of it.
    pub fn suffix(&self, host: &str) -> Option<BrandKey> {
        self.entries
            .iter()
            .find(|(domain, _)| is_same_or_subdomain(host, domain))
            .map(|(_, key)| *key)
    }

    pub fn lookup(&self, host: &str) -> Option<(BrandKey, HostMatch)> {
        if let Some(key) = self.exact(host) {
            return Some((key, HostMatch::Exact));
        }
        self.suffix(host).map(|key| (key, HostMatch::Suffix))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BrandKey)> {
        self.entries.iter().map(|(host, key)| (host.as_str(), *key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_same_or_subdomain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('.'))
}

/// Strip the port (bracketed IPv6 included) and any trailing dot, then lowercase.
/// Returns `None` for an empty host.
pub fn normalize_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let without_port = if let Some(rest) = trimmed.strip_prefix('[') {
        rest.split_once(']').map_or(rest, |(addr, _)| addr)
    } else {
        match trimmed.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => trimmed,
        }
    };
    let host = without_port.trim_end_matches('.').to_ascii_lowercase();
    (!host.is_empty()).then_some(host)
}

pub struct BrandRegistry {
    brands: BTreeMap<BrandKey, Arc<BrandConfig>>,
    hosts: HostBrandMap,
    default: Arc<BrandConfig>,
}

impl BrandRegistry {
    /// Build a registry, rejecting duplicate brands, hosts claimed by two brands,
    /// and a default key with no configuration.
    pub fn new(brands: Vec<BrandConfig>, default_key: BrandKey) -> Result<Self, ConfigError> {
        let mut by_key = BTreeMap::new();
        for brand in brands {
            let key = brand.key;
            if by_key.insert(key, Arc::new(brand)).is_some() {
                return Err(ConfigError::DuplicateBrand(key.to_string()));
            }
        }

        let mut hosts = HostBrandMap::new();
        for brand in by_key.values() {
            for host in brand.hosts() {
                hosts.insert(host, brand.key)?;
            }
        }

        let default = by_key
            .get(&default_key)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownDefaultBrand(default_key.to_string()))?;

        tracing::debug!(
            brands = by_key.len(),
            hosts = hosts.len(),
            default = %default_key,
            "brand registry initialised"
        );

        Ok(Self {
            brands: by_key,
            hosts,
            default,
        })
    }

    /// Registry over the built-in catalog.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(catalog::builtin_brands(), catalog::DEFAULT_BRAND)
    }

    pub fn brand(&self, key: BrandKey) -> Option<Arc<BrandConfig>> {
        self.brands.get(&key).cloned()
    }

    pub fn try_brand_by_key(&self, raw: &str) -> Result<Arc<BrandConfig>, BrandError> {
        let key: BrandKey = raw.parse()?;
        self.brand(key)
            .ok_or_else(|| BrandError::UnknownBrandKey(raw.to_string()))
    }

    pub fn get_brand_by_key(&self, raw: &str) -> Option<Arc<BrandConfig>> {
        self.try_brand_by_key(raw)
            .map_err(|e| tracing::warn!("brand lookup by key failed: {e}"))
            .ok()
    }

    pub fn try_brand_by_host(&self, raw: &str) -> Result<Arc<BrandConfig>, BrandError> {
        let host = normalize_host(raw).ok_or(BrandError::MissingHost)?;
        let (key, matched) = self
            .hosts
            .lookup(&host)
            .ok_or_else(|| BrandError::UnknownHost(host.clone()))?;
        tracing::trace!(%host, brand = %key, ?matched, "host matched");
        self.brand(key).ok_or(BrandError::UnknownHost(host))
    }

    pub fn get_brand_by_host(&self, raw: &str) -> Option<Arc<BrandConfig>> {
        self.try_brand_by_host(raw)
            .map_err(|e| tracing::warn!("brand lookup by host failed: {e}"))
            .ok()
    }

    pub fn try_brand_by_channel_token(&self, token: &str) -> Result<Arc<BrandConfig>, BrandError> {
        self.brands
            .values()
            .find(|brand| brand.channel_token == token)
            .cloned()
            .ok_or_else(|| BrandError::UnknownChannelToken(token.to_string()))
    }

    pub fn get_brand_by_channel_token(&self, token: &str) -> Option<Arc<BrandConfig>> {
        self.try_brand_by_channel_token(token)
            .map_err(|e| tracing::warn!("brand lookup by channel token failed: {e}"))
            .ok()
    }

    pub fn get_default_brand(&self) -> Arc<BrandConfig> {
        Arc::clone(&self.default)
    }

    pub fn is_valid_brand_key(&self, raw: &str) -> bool {
        BrandKey::is_valid(raw)
    }

    /// All brands in key order.
    pub fn brands(&self) -> impl Iterator<Item = &Arc<BrandConfig>> {
        self.brands.values()
    }

    pub fn host_map(&self) -> &HostBrandMap {
        &self.hosts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry() -> BrandRegistry {
        BrandRegistry::builtin().unwrap()
    }

    #[test]
    fn key_lookup_round_trips() {
        let reg = registry();
        for key in BrandKey::ALL {
            let brand = reg.get_brand_by_key(key.as_str()).unwrap();
            assert_eq!(brand.key, key);
        }
    }

    #[test]
    fn key_lookup_unknown_is_none() {
        let reg = registry();
        assert!(reg.get_brand_by_key("acme").is_none());
        assert!(matches!(
            reg.try_brand_by_key("acme"),
            Err(BrandError::UnknownBrandKey(_))
        ));
    }

    #[test]
    fn host_with_port_is_exact_hit() {
        let brand = registry().get_brand_by_host("shop.tooly.com:443").unwrap();
        assert_eq!(brand.key, BrandKey::Tooly);
    }

    #[test]
    fn staging_subdomain_matches_by_suffix() {
        let reg = registry();
        assert_eq!(reg.host_map().exact("staging.tooly.com"), None);
        let brand = reg.get_brand_by_host("staging.tooly.com").unwrap();
        assert_eq!(brand.key, BrandKey::Tooly);
        assert_eq!(
            reg.host_map().lookup("staging.tooly.com"),
            Some((BrandKey::Tooly, HostMatch::Suffix))
        );
    }

    #[test]
    fn host_lookup_is_case_insensitive() {
        let brand = registry().get_brand_by_host("WWW.SynthLab.COM").unwrap();
        assert_eq!(brand.key, BrandKey::Synthlab);
    }

    #[test]
    fn lookalike_domain_does_not_suffix_match() {
        let reg = registry();
        assert!(reg.get_brand_by_host("eviltooly.com").is_none());
        assert!(reg.get_brand_by_host("tooly.com.evil.net").is_none());
    }

    #[test]
    fn every_registered_host_resolves_to_its_brand() {
        let reg = registry();
        for brand in reg.brands() {
            for host in brand.hosts() {
                assert_eq!(reg.get_brand_by_host(host).unwrap().key, brand.key);
            }
        }
    }

    #[test]
    fn empty_host_is_missing() {
        assert!(matches!(
            registry().try_brand_by_host("  "),
            Err(BrandError::MissingHost)
        ));
    }

    #[test]
    fn channel_token_lookup() {
        let reg = registry();
        let brand = reg
            .get_brand_by_channel_token("synthlab-research-channel")
            .unwrap();
        assert_eq!(brand.key, BrandKey::Synthlab);
        assert!(reg.get_brand_by_channel_token("nope").is_none());
    }

    #[test]
    fn default_brand_is_tooly() {
        assert_eq!(registry().get_default_brand().key, BrandKey::Tooly);
    }

    #[test]
    fn is_valid_brand_key_is_membership() {
        let reg = registry();
        assert!(reg.is_valid_brand_key("tooly"));
        assert!(reg.is_valid_brand_key("synthlab"));
        assert!(!reg.is_valid_brand_key("tooly.com"));
    }

    #[test]
    fn duplicate_host_across_brands_is_rejected() {
        let mut brands = catalog::builtin_brands();
        brands[1].subdomains.push("shop.tooly.com".into());
        let err = BrandRegistry::new(brands, BrandKey::Tooly).err().unwrap();
        assert!(matches!(err, ConfigError::DuplicateHost { ref host, .. } if host == "shop.tooly.com"));
    }

    #[test]
    fn duplicate_brand_is_rejected() {
        let mut brands = catalog::builtin_brands();
        brands.push(catalog::brand_definition(BrandKey::Tooly));
        assert_eq!(
            BrandRegistry::new(brands, BrandKey::Tooly).err(),
            Some(ConfigError::DuplicateBrand("tooly".into()))
        );
    }

    #[test]
    fn missing_default_brand_is_rejected() {
        let brands = vec![catalog::brand_definition(BrandKey::Tooly)];
        assert_eq!(
            BrandRegistry::new(brands, BrandKey::Synthlab).err(),
            Some(ConfigError::UnknownDefaultBrand("synthlab".into()))
        );
    }

    #[test]
    fn host_map_keeps_registration_order() {
        let reg = registry();
        let hosts: Vec<&str> = reg.host_map().iter().map(|(h, _)| h).collect();
        assert_eq!(hosts[0], "tooly.com");
        assert_eq!(hosts[4], "synthlab.com");
    }

    #[test]
    fn normalize_host_cases() {
        assert_eq!(normalize_host("Tooly.com:8080").as_deref(), Some("tooly.com"));
        assert_eq!(normalize_host("tooly.com.").as_deref(), Some("tooly.com"));
        assert_eq!(normalize_host("[::1]:3000").as_deref(), Some("::1"));
        assert_eq!(normalize_host(""), None);
        assert_eq!(normalize_host(":443"), None);
    }

    proptest! {
        #[test]
        fn unregistered_hosts_never_resolve(label in "[a-z]{1,12}", port in proptest::option::of(1u16..)) {
            let host = match port {
                Some(p) => format!("{label}.example.org:{p}"),
                None => format!("{label}.example.org"),
            };
            prop_assert!(registry().get_brand_by_host(&host).is_none());
        }

        #[test]
        fn any_subdomain_of_registered_domain_resolves(label in "[a-z][a-z0-9-]{0,15}") {
            let reg = registry();
            let host = format!("{label}.synthlab.com");
            prop_assert_eq!(reg.get_brand_by_host(&host).map(|b| b.key), Some(BrandKey::Synthlab));
        }

        #[test]
        fn port_never_changes_the_result(host in "[a-z]{1,8}\\.(tooly|synthlab)\\.com", port in 1u16..) {
            let reg = registry();
            let bare = reg.get_brand_by_host(&host).map(|b| b.key);
            let with_port = reg.get_brand_by_host(&format!("{host}:{port}")).map(|b| b.key);
            prop_assert_eq!(bare, with_port);
        }
    }
}
