//! Flattens a brand theme into CSS custom properties for the rendering layer.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::brand::BrandTheme;

pub const DEFAULT_GLASS_OPACITY: f32 = 0.7;
pub const DEFAULT_GLASS_BLUR: &str = "md";

/// Ordered `--name -> value` map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ThemeVariables(BTreeMap<String, String>);

impl ThemeVariables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }
}

pub struct ThemeProjector;

impl ThemeProjector {
    pub fn project(theme: &BrandTheme) -> ThemeVariables {
        let mut vars = ThemeVariables::default();
        let c = &theme.colors;

        vars.set("--color-primary", &c.primary);
        vars.set("--color-primary-foreground", &c.primary_foreground);
        vars.set("--color-secondary", &c.secondary);
        vars.set("--color-secondary-foreground", &c.secondary_foreground);
        vars.set("--color-accent", &c.accent);
        vars.set("--color-background", &c.background);
        vars.set("--color-foreground", &c.foreground);
        vars.set("--color-muted", &c.muted);
        vars.set("--color-muted-foreground", &c.muted_foreground);
        vars.set("--color-border", &c.border);

        vars.set("--radius", &theme.radius);

        vars.set("--font-heading", &theme.fonts.heading);
        vars.set("--font-body", &theme.fonts.body);
        vars.set("--font-mono", &theme.fonts.mono);

        let glass = theme.glass.as_ref();
        let opacity = glass
            .and_then(|g| g.opacity)
            .unwrap_or(DEFAULT_GLASS_OPACITY);
        let blur = glass
            .and_then(|g| g.blur.as_deref())
            .unwrap_or(DEFAULT_GLASS_BLUR);
        vars.set("--glass-opacity", opacity.to_string());
        vars.set("--glass-blur", blur);

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{BrandKey, GlassEffect};
    use crate::catalog::brand_definition;

    #[test]
    fn projects_every_variable() {
        let vars = ThemeProjector::project(&brand_definition(BrandKey::Tooly).theme);
        assert_eq!(vars.len(), 16);
        assert_eq!(vars.get("--color-primary"), Some("#f97316"));
        assert_eq!(vars.get("--radius"), Some("0.375rem"));
        assert!(vars.get("--font-body").unwrap().starts_with("Inter"));
    }

    #[test]
    fn absent_glass_uses_defaults() {
        let vars = ThemeProjector::project(&brand_definition(BrandKey::Tooly).theme);
        assert_eq!(vars.get("--glass-opacity"), Some("0.7"));
        assert_eq!(vars.get("--glass-blur"), Some("md"));
    }

    #[test]
    fn partial_glass_fills_missing_field() {
        let vars = ThemeProjector::project(&brand_definition(BrandKey::Synthlab).theme);
        assert_eq!(vars.get("--glass-opacity"), Some("0.6"));
        assert_eq!(vars.get("--glass-blur"), Some("md"));
    }

    #[test]
    fn explicit_glass_is_used() {
        let mut theme = brand_definition(BrandKey::Tooly).theme;
        theme.glass = Some(GlassEffect {
            opacity: Some(0.25),
            blur: Some("xl".into()),
        });
        let vars = ThemeProjector::project(&theme);
        assert_eq!(vars.get("--glass-opacity"), Some("0.25"));
        assert_eq!(vars.get("--glass-blur"), Some("xl"));
    }

    #[test]
    fn css_block_lists_sorted_declarations() {
        let css = ThemeProjector::project(&brand_definition(BrandKey::Synthlab).theme).to_css();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-primary: #0ea5e9;\n"));
        assert!(css.ends_with("}\n"));
        let accent = css.find("--color-accent").unwrap();
        let radius = css.find("--radius").unwrap();
        assert!(accent < radius);
    }

    #[test]
    fn serializes_as_flat_object() {
        let vars = ThemeProjector::project(&brand_definition(BrandKey::Tooly).theme);
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json["--color-border"], "#e5e7eb");
    }
}
