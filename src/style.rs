//! Generated CSS rules.
//!
//! Elements can move style declarations out of their `style` attribute into
//! a class-based rule (see [`ElementExt::rule`](crate::element::ElementExt::rule)).
//! The [`StyleRegistry`] maps each distinct declaration list to a stable
//! class name; the publishing step then emits every registered rule once.
//!
//! Class names are content-addressed: `style-` followed by the first 8 hex
//! digits of the SHA-256 of the declaration text. The same declarations
//! always get the same class, in any page and any build.

use crate::attributes::InlineStyle;
use crate::config::{LayoutConfig, ThemesConfig, generate_theme_css};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Style declarations → generated class name.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    rules: BTreeMap<String, Vec<InlineStyle>>,
}

impl StyleRegistry {
    /// Registers a declaration list and returns its class name.
    pub fn register(&mut self, declarations: &[InlineStyle]) -> String {
        let class = class_name(declarations);
        if !self.rules.contains_key(&class) {
            tracing::debug!(class = %class, "registered style rule");
            self.rules.insert(class.clone(), declarations.to_vec());
        }
        class
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// One rule per registered class, in class-name order.
    pub fn css(&self) -> String {
        self.rules
            .iter()
            .map(|(class, declarations)| {
                let body: Vec<String> = declarations
                    .iter()
                    .map(|d| format!("    {};", d.declaration()))
                    .collect();
                format!(".{class} {{\n{}\n}}", body.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn class_name(declarations: &[InlineStyle]) -> String {
    let text: Vec<String> = declarations.iter().map(InlineStyle::declaration).collect();
    format!("style-{}", short_hash(&text.join("; ")))
}

/// First 8 hex digits of the SHA-256 of `text`.
pub fn short_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..8].to_string()
}

/// Layout rules every page needs, independent of theme.
const BASE_CSS: &str = r#"body {
    background: var(--color-bg);
    color: var(--color-text);
}

a {
    color: var(--color-link);
}

main.container {
    max-width: var(--container-width);
    margin: 0 auto;
}

.d-none {
    display: none !important;
}"#;

/// The complete stylesheet of a site: theme properties, base rules and every
/// registered rule.
pub fn generate_all_css(
    registry: &StyleRegistry,
    themes: &ThemesConfig,
    layout: &LayoutConfig,
) -> String {
    let mut parts = vec![generate_theme_css(themes, layout), BASE_CSS.to_string()];
    if !registry.is_empty() {
        parts.push(registry.css());
    }
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn red() -> Vec<InlineStyle> {
        vec![InlineStyle::new("color", "red")]
    }

    #[test]
    fn same_declarations_same_class() {
        let mut registry = StyleRegistry::default();
        let a = registry.register(&red());
        let b = registry.register(&red());
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn different_declarations_different_class() {
        let mut registry = StyleRegistry::default();
        let a = registry.register(&red());
        let b = registry.register(&[InlineStyle::new("color", "blue")]);
        assert_ne!(a, b);
    }

    #[test]
    fn class_name_is_prefixed_short_hash() {
        let mut registry = StyleRegistry::default();
        let class = registry.register(&red());
        assert_eq!(class.len(), "style-".len() + 8);
        assert!(class.starts_with("style-"));
        assert!(class[6..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn short_hash_is_stable() {
        assert_eq!(short_hash("abc"), "ba7816bf");
    }

    #[test]
    fn css_lists_declarations() {
        let mut registry = StyleRegistry::default();
        let class = registry.register(&[
            InlineStyle::new("color", "red"),
            InlineStyle::new("margin", "0"),
        ]);
        let css = registry.css();
        assert_eq!(
            css,
            format!(".{class} {{\n    color: red;\n    margin: 0;\n}}")
        );
    }

    #[test]
    fn all_css_includes_theme_and_rules() {
        let config = SiteConfig::default();
        let mut registry = StyleRegistry::default();
        let class = registry.register(&red());
        let css = generate_all_css(&registry, &config.themes, &config.layout);
        assert!(css.contains("--color-bg: #ffffff"));
        assert!(css.contains(".d-none"));
        assert!(css.contains(&format!(".{class}")));
    }
}
