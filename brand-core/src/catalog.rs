//! Built-in brand definitions.

use crate::brand::{
    AnalyticsIds, BrandAssets, BrandConfig, BrandKey, BrandSeo, BrandTheme, FeatureFlags,
    GlassEffect, NavItem, ThemeColors, ThemeFonts,
};

/// Brand served when nothing else resolves.
pub const DEFAULT_BRAND: BrandKey = BrandKey::Tooly;

pub fn builtin_brands() -> Vec<BrandConfig> {
    BrandKey::ALL.into_iter().map(brand_definition).collect()
}

pub fn brand_definition(key: BrandKey) -> BrandConfig {
    match key {
        BrandKey::Tooly => tooly(),
        BrandKey::Synthlab => synthlab(),
    }
}

fn tooly() -> BrandConfig {
    BrandConfig {
        key: BrandKey::Tooly,
        name: "tooly".into(),
        display_name: "Tooly".into(),
        domain: "tooly.com".into(),
        subdomains: vec![
            "www.tooly.com".into(),
            "shop.tooly.com".into(),
            "tooly.localhost".into(),
        ],
        channel_token: "tooly-default-channel".into(),
        theme: BrandTheme {
            colors: ThemeColors {
                primary: "#f97316".into(),
                primary_foreground: "#ffffff".into(),
                secondary: "#1f2937".into(),
                secondary_foreground: "#f9fafb".into(),
                accent: "#facc15".into(),
                background: "#ffffff".into(),
                foreground: "#111827".into(),
                muted: "#f3f4f6".into(),
                muted_foreground: "#6b7280".into(),
                border: "#e5e7eb".into(),
            },
            radius: "0.375rem".into(),
            fonts: ThemeFonts {
                heading: "\"Barlow Condensed\", ui-sans-serif, system-ui, sans-serif".into(),
                body: "Inter, ui-sans-serif, system-ui, sans-serif".into(),
                mono: "\"JetBrains Mono\", ui-monospace, monospace".into(),
            },
            glass: None,
        },
        seo: BrandSeo {
            title: "Tooly | Professional Tools & Hardware".into(),
            title_template: "%s | Tooly".into(),
            description: "Power tools, hand tools and workshop hardware shipped fast.".into(),
            keywords: vec![
                "power tools".into(),
                "hand tools".into(),
                "hardware".into(),
            ],
            social_handle: Some("@toolyshop".into()),
        },
        assets: BrandAssets {
            logo: "/brands/tooly/logo.svg".into(),
            logo_dark: Some("/brands/tooly/logo-dark.svg".into()),
            favicon: "/brands/tooly/favicon.ico".into(),
            og_image: "/brands/tooly/og.png".into(),
        },
        navigation: vec![
            NavItem::new("Power Tools", "/collections/power-tools"),
            NavItem::new("Hand Tools", "/collections/hand-tools"),
            NavItem::new("Deals", "/collections/deals"),
        ],
        features: Some(FeatureFlags {
            glass_effects: false,
            announcement_marquee: true,
            research_disclaimer: false,
        }),
        analytics: Some(AnalyticsIds {
            google_analytics: Some("G-TOOLY00001".into()),
            meta_pixel: None,
        }),
    }
}

fn synthlab() -> BrandConfig {
    BrandConfig {
        key: BrandKey::Synthlab,
        name: "synthlab".into(),
        display_name: "Synthlab".into(),
        domain: "synthlab.com".into(),
        subdomains: vec![
            "www.synthlab.com".into(),
            "shop.synthlab.com".into(),
            "synthlab.localhost".into(),
        ],
        channel_token: "synthlab-research-channel".into(),
        theme: BrandTheme {
            colors: ThemeColors {
                primary: "#0ea5e9".into(),
                primary_foreground: "#ffffff".into(),
                secondary: "#0f172a".into(),
                secondary_foreground: "#e2e8f0".into(),
                accent: "#a855f7".into(),
                background: "#020617".into(),
                foreground: "#f8fafc".into(),
                muted: "#1e293b".into(),
                muted_foreground: "#94a3b8".into(),
                border: "#334155".into(),
            },
            radius: "0.75rem".into(),
            fonts: ThemeFonts {
                heading: "\"Space Grotesk\", ui-sans-serif, system-ui, sans-serif".into(),
                body: "Inter, ui-sans-serif, system-ui, sans-serif".into(),
                mono: "\"IBM Plex Mono\", ui-monospace, monospace".into(),
            },
            glass: Some(GlassEffect {
                opacity: Some(0.6),
                blur: None,
            }),
        },
        seo: BrandSeo {
            title: "Synthlab | Research Compounds".into(),
            title_template: "%s | Synthlab".into(),
            description: "High-purity research compounds with batch certificates of analysis."
                .into(),
            keywords: vec![
                "research chemicals".into(),
                "reference standards".into(),
                "certificate of analysis".into(),
            ],
            social_handle: None,
        },
        assets: BrandAssets {
            logo: "/brands/synthlab/logo.svg".into(),
            logo_dark: None,
            favicon: "/brands/synthlab/favicon.ico".into(),
            og_image: "/brands/synthlab/og.png".into(),
        },
        navigation: vec![
            NavItem::new("Compounds", "/collections/compounds"),
            NavItem::new("Lab Supplies", "/collections/lab-supplies"),
            NavItem::new("Certificates", "/certificates"),
        ],
        features: Some(FeatureFlags {
            glass_effects: true,
            announcement_marquee: false,
            research_disclaimer: true,
        }),
        analytics: None,
    }
}
