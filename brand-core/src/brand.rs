//! Brand identity and the static configuration record each brand carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrandError;

/// Closed set of brands served by this storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandKey {
    /// Tools store.
    Tooly,
    /// Research-chemicals store.
    Synthlab,
}

impl BrandKey {
    pub const ALL: [BrandKey; 2] = [BrandKey::Tooly, BrandKey::Synthlab];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandKey::Tooly => "tooly",
            BrandKey::Synthlab => "synthlab",
        }
    }

    /// Membership test against the known keys. Accepts the same input as `FromStr`.
    pub fn is_valid(raw: &str) -> bool {
        raw.parse::<BrandKey>().is_ok()
    }
}

impl fmt::Display for BrandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandKey {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        BrandKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| BrandError::UnknownBrandKey(s.to_string()))
    }
}

/// Everything the storefront needs to render and fetch data for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub key: BrandKey,
    /// Internal name used in logs and operator tooling.
    pub name: String,
    pub display_name: String,
    pub domain: String,
    pub subdomains: Vec<String>,
    /// Selects the backend tenant/channel for commerce queries.
    pub channel_token: String,
    pub theme: BrandTheme,
    pub seo: BrandSeo,
    pub assets: BrandAssets,
    pub navigation: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsIds>,
}

impl BrandConfig {
    /// Primary domain followed by every registered subdomain.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.domain.as_str()).chain(self.subdomains.iter().map(String::as_str))
    }

    pub fn feature_enabled(&self, flag: impl Fn(&FeatureFlags) -> bool) -> bool {
        self.features.as_ref().is_some_and(flag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTheme {
    pub colors: ThemeColors,
    /// CSS length, e.g. `0.5rem`.
    pub radius: String,
    pub fonts: ThemeFonts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<GlassEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
    pub mono: String,
}

/// Frosted-glass surface styling. Both fields fall back to projector defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlassEffect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSeo {
    pub title: String,
    /// `%s` is replaced by the page title.
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
}

impl BrandSeo {
    pub fn page_title(&self, page: &str) -> String {
        self.title_template.replace("%s", page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAssets {
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
    pub favicon: String,
    pub og_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub glass_effects: bool,
    pub announcement_marquee: bool,
    pub research_disclaimer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyticsIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_pixel: Option<String>,
}
