//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the content root overrides any subset
//! of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! name = "My Site"
//! url = "https://example.com"
//! language = "en"
//!
//! [syntax_highlighting]
//! default_language = "rust"  # used by code blocks without a language
//! themes = ["xcode-dark"]     # empty = code blocks are a fatal error
//! highlight_inline_code = false
//!
//! [layout]
//! container_width = "960px"
//! form_columns = 12          # total columns form widths are relative to
//!
//! [themes.light]
//! background = "#ffffff"
//! text = "#212529"
//! link = "#0d6efd"
//! border = "#dee2e6"
//!
//! [themes.dark]
//! background = "#212529"
//! text = "#f8f9fa"
//! link = "#6ea8fe"
//! border = "#495057"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// Read-only during rendering: every element sees the same value through
/// its render context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, used in page titles and as the navigation brand.
    pub name: String,
    /// Absolute base URL the site is published at.
    pub url: String,
    /// Document language (`<html lang>`).
    pub language: String,
    pub syntax_highlighting: HighlightingConfig,
    pub layout: LayoutConfig,
    pub themes: ThemesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "My Site".to_string(),
            url: "https://example.com".to_string(),
            language: "en".to_string(),
            syntax_highlighting: HighlightingConfig::default(),
            layout: LayoutConfig::default(),
            themes: ThemesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }
        if !(1..=12).contains(&self.layout.form_columns) {
            return Err(ConfigError::Validation(
                "layout.form_columns must be 1-12".into(),
            ));
        }
        if let Some(language) = &self.syntax_highlighting.default_language {
            if language.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "syntax_highlighting.default_language must not be blank".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Syntax highlighting settings consulted by code blocks and markdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightingConfig {
    /// Language assumed for code without an explicit one.
    pub default_language: Option<String>,
    /// Highlighter themes shipped with the site. Rendering any code block
    /// while this is empty aborts the build.
    pub themes: Vec<String>,
    /// Whether inline code spans get a language class too.
    pub highlight_inline_code: bool,
}

/// Page layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Maximum width of the main content container (CSS value).
    pub container_width: String,
    /// Total columns form item widths are expressed against.
    pub form_columns: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: "960px".to_string(),
            form_columns: 12,
        }
    }
}

/// Color themes for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemesConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    pub link: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#212529".to_string(),
            link: "#0d6efd".to_string(),
            border: "#dee2e6".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#212529".to_string(),
            text: "#f8f9fa".to_string(),
            link: "#6ea8fe".to_string(),
            border: "#495057".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value, if present.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of the
/// stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    let config = resolve_config(stock_defaults_value(), overlay)?;
    tracing::debug!(site = %config.name, "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`. Used by `lumen gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Lumen Configuration
# ===================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Site name: page titles and the navigation brand.
name = "My Site"

# Absolute URL the site is published at.
url = "https://example.com"

# Document language.
language = "en"

# ---------------------------------------------------------------------------
# Syntax highlighting
# ---------------------------------------------------------------------------
[syntax_highlighting]
# Language assumed by code blocks that do not name one.
# default_language = "rust"

# Highlighter themes available to the site. Code blocks cannot be rendered
# until at least one is listed.
themes = []

# Give inline `code` spans the default language class as well.
highlight_inline_code = false

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Maximum width of the main content container (CSS value).
container_width = "960px"

# Total columns that form item widths are relative to.
form_columns = 12

# ---------------------------------------------------------------------------
# Themes - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[themes.light]
background = "#ffffff"
text = "#212529"
link = "#0d6efd"
border = "#dee2e6"

# ---------------------------------------------------------------------------
# Themes - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[themes.dark]
background = "#212529"
text = "#f8f9fa"
link = "#6ea8fe"
border = "#495057"
"##
}

/// Generate CSS custom properties from the theme config.
pub fn generate_theme_css(themes: &ThemesConfig, layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-link: {light_link};
    --color-border: {light_border};
    --container-width: {width};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-link: {dark_link};
        --color-border: {dark_border};
    }}
}}"#,
        light_bg = themes.light.background,
        light_text = themes.light.text,
        light_link = themes.light.link,
        light_border = themes.light.border,
        dark_bg = themes.dark.background,
        dark_text = themes.dark.text,
        dark_link = themes.dark.link,
        dark_border = themes.dark.border,
        width = layout.container_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_highlighter_themes() {
        let config = SiteConfig::default();
        assert!(config.syntax_highlighting.themes.is_empty());
        assert_eq!(config.syntax_highlighting.default_language, None);
    }

    #[test]
    fn default_config_has_twelve_form_columns() {
        assert_eq!(SiteConfig::default().layout.form_columns, 12);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[themes.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.themes.light.background, "#fafafa");
        assert_eq!(config.themes.light.text, "#212529");
        assert_eq!(config.themes.dark.background, "#212529");
        assert_eq!(config.name, "My Site");
    }

    #[test]
    fn parse_highlighting_settings() {
        let toml = r#"
[syntax_highlighting]
default_language = "swift"
themes = ["xcode-light", "xcode-dark"]
highlight_inline_code = true
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        let highlighting = config.syntax_highlighting;
        assert_eq!(highlighting.default_language.as_deref(), Some("swift"));
        assert_eq!(highlighting.themes, vec!["xcode-light", "xcode-dark"]);
        assert!(highlighting.highlight_inline_code);
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[layout]\nform_colums = 4\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.name, "My Site");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "name = \"Field Notes\"\n[layout]\nform_columns = 6\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.name, "Field Notes");
        assert_eq!(config.layout.form_columns, 6);
        assert_eq!(config.layout.container_width, "960px");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[layout]\nform_columns = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_default_language() {
        let mut config = SiteConfig::default();
        config.syntax_highlighting.default_language = Some("  ".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[themes.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[themes.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("themes").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str("language = \"fr\"").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.url, "https://example.com");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.name, "My Site");
        assert_eq!(config.layout.form_columns, 12);
        assert_eq!(config.themes.dark.link, "#6ea8fe");
        assert!(config.syntax_highlighting.themes.is_empty());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("syntax_highlighting").is_some());
        assert!(val.get("layout").is_some());
        assert!(val.get("themes").is_some());
    }

    #[test]
    fn theme_css_includes_both_schemes() {
        let config = SiteConfig::default();
        let css = generate_theme_css(&config.themes, &config.layout);
        assert!(css.contains("--color-bg: #ffffff"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--container-width: 960px"));
    }
}
