//! Rendering entry point and the ambient render context.
//!
//! A render pass is a plain recursive walk: [`render`] asks the root for its
//! markup, composites delegate to their bodies, containers flatten their
//! children, and leaves serialize themselves. Nothing in the tree is mutated.
//!
//! The only side effects land in [`Registries`], the per-build accumulation
//! sets (highlighter languages, JS resources, fonts, generated CSS rules)
//! that the publishing step reads afterwards. They only ever grow within a
//! build and inserting the same entry twice is a no-op.
//!
//! Rendering is single-threaded. [`RenderContext`] holds the registries by
//! `&mut`, so one pass owns them exclusively for its whole duration.
//!
//! ## Fatal errors
//!
//! Two conditions abort rendering outright, see [`RenderError`]. Neither is
//! returned to the caller: [`fatal`] logs and panics, so a build never
//! writes partially-correct HTML.

use crate::config::SiteConfig;
use crate::element::Element;
use crate::style::StyleRegistry;
use std::collections::BTreeSet;
use thiserror::Error;

/// Conditions that abort a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A code block was rendered but the site lists no highlighter theme.
    #[error(
        "code blocks need a syntax highlighter theme; add one to `[syntax_highlighting] themes` in config.toml"
    )]
    MissingHighlighterTheme,
    /// A primitive's body was evaluated.
    #[error("{element} renders itself; its body must never be evaluated")]
    UnreachableBody { element: &'static str },
}

/// Logs `error` and aborts the render.
pub fn fatal(error: RenderError) -> ! {
    tracing::error!(%error, "render aborted");
    panic!("{error}");
}

/// Everything a build accumulated while rendering its pages.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    /// Highlighter languages used by code blocks and markdown.
    pub languages: BTreeSet<String>,
    /// Script URLs some element needs on the page.
    pub js_resources: BTreeSet<String>,
    /// Typefaces named by text elements.
    pub fonts: BTreeSet<String>,
    /// CSS rules generated from `.rule(...)` declarations.
    pub styles: StyleRegistry,
}

impl Registries {
    /// Empties every registry. Call between independent builds.
    pub fn reset(&mut self) {
        *self = Registries::default();
    }
}

/// Read-mostly state threaded through one render pass.
#[derive(Debug)]
pub struct RenderContext<'a> {
    site: &'a SiteConfig,
    path: String,
    registries: &'a mut Registries,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteConfig, path: impl Into<String>, registries: &'a mut Registries) -> Self {
        Self {
            site,
            path: path.into(),
            registries,
        }
    }

    pub fn site(&self) -> &'a SiteConfig {
        self.site
    }

    /// Path of the page being rendered, e.g. `/about`.
    pub fn current_path(&self) -> &str {
        &self.path
    }

    /// Whether `target` is the page being rendered. Exact string match:
    /// `/about` and `/about/` are different pages.
    pub fn is_current(&self, target: &str) -> bool {
        self.path == target
    }

    pub fn registries(&self) -> &Registries {
        &*self.registries
    }

    pub fn registries_mut(&mut self) -> &mut Registries {
        &mut *self.registries
    }

    /// Resolves the language of a piece of highlighted code and records it.
    ///
    /// Falls back to the site's default language. Returns `None` when
    /// neither is set. Aborts the render when no highlighter theme is
    /// configured.
    pub fn highlight_language(&mut self, requested: Option<&str>) -> Option<String> {
        if self.site.syntax_highlighting.themes.is_empty() {
            fatal(RenderError::MissingHighlighterTheme);
        }
        let language = requested
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| self.site.syntax_highlighting.default_language.clone())?;
        self.register_language(&language);
        Some(language)
    }

    pub fn register_language(&mut self, language: &str) {
        if self.registries.languages.insert(language.to_string()) {
            tracing::debug!(language, "registered highlighter language");
        }
    }

    pub fn register_js(&mut self, url: &str) {
        self.registries.js_resources.insert(url.to_string());
    }

    pub fn register_font(&mut self, font: &str) {
        if self.registries.fonts.insert(font.to_string()) {
            tracing::debug!(font, "registered font");
        }
    }
}

/// Renders `root` within an existing pass.
pub fn render(root: &dyn Element, cx: &mut RenderContext<'_>) -> String {
    root.markup(cx).into_string()
}

/// Renders `root` as the page at `path` with fresh registries.
pub fn render_page(site: &SiteConfig, path: &str, root: &dyn Element) -> String {
    let mut registries = Registries::default();
    let mut cx = RenderContext::new(site, path, &mut registries);
    render(root, &mut cx)
}
