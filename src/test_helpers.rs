//! Shared test utilities for the lumen test suite.
//!
//! Rendering helpers run an element through a fresh render pass against the
//! default site config. Content helpers write a small markdown site to a
//! temporary directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! assert_eq!(render_at("/", &Text::new("Hi")), "<p>Hi</p>");
//!
//! let tmp = setup_content();
//! let manifest = scan(tmp.path()).unwrap();
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::element::Element;
use crate::render::{Registries, RenderContext, render};

// =========================================================================
// Rendering
// =========================================================================

/// Render `element` as the page at `path` with the default config.
pub fn render_at(path: &str, element: &dyn Element) -> String {
    render_with(&SiteConfig::default(), path, element).0
}

/// Render `element` with `site`, returning the output and what the pass
/// registered.
pub fn render_with(site: &SiteConfig, path: &str, element: &dyn Element) -> (String, Registries) {
    let mut registries = Registries::default();
    let html = render(element, &mut RenderContext::new(site, path, &mut registries));
    (html, registries)
}

/// Default config with one highlighter theme, so code blocks can render.
pub fn highlighted_site() -> SiteConfig {
    let mut site = SiteConfig::default();
    site.syntax_highlighting.themes = vec!["github".into()];
    site
}

// =========================================================================
// Content fixtures
// =========================================================================

const CONTENT: &[(&str, &str)] = &[
    (
        "config.toml",
        "name = \"Fixture Site\"\n\n[syntax_highlighting]\nthemes = [\"github\"]\n",
    ),
    ("index.md", "# Welcome\n\nThe fixture home page.\n"),
    (
        "010-getting-started.md",
        "# Getting Started\n\nInstall lumen and build your first site.\n\n```toml\nname = \"x\"\n```\n",
    ),
    ("020-Guides/index.md", "# Guides\n\nAll the guides.\n"),
    ("020-Guides/010-layout.md", "# Layout\n\nGrids and rows.\n"),
    ("030-source.md", "https://example.com/lumen\n"),
    ("notes.md", "Loose notes without a heading.\n"),
    (".drafts/010-secret.md", "# Secret\n"),
];

/// Write the fixture site to a temp directory and return it.
///
/// ```text
/// config.toml
/// index.md
/// 010-getting-started.md
/// 020-Guides/index.md
/// 020-Guides/010-layout.md
/// 030-source.md
/// notes.md
/// .drafts/010-secret.md
/// ```
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_content(tmp.path(), CONTENT);
    tmp
}

/// Write `(relative path, content)` pairs below `root`.
pub fn write_content(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
