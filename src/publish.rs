//! Site publishing.
//!
//! Renders every scanned page through the element pipeline and writes the
//! result as a static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # /
//! ├── getting-started/
//! │   └── index.html             # /getting-started/
//! ├── Guides/
//! │   ├── index.html             # /Guides/
//! │   └── layout/index.html      # /Guides/layout/
//! └── site.json                  # Page manifest + build registries
//! ```
//!
//! ## Documents
//!
//! Each page is a navigation bar (numbered pages, link pages included)
//! above the page's markdown. The document shell is a [maud](https://maud.lambda.xyz/)
//! template: theme CSS and every registered style rule are inlined in
//! `<style>`, registered scripts go at the end of `<body>`.
//!
//! One set of [`Registries`] spans the whole build.

use crate::config::{self, ConfigError, SiteConfig};
use crate::element::{Children, ElementExt, family};
use crate::elements::{BOOTSTRAP_CSS, Group, Link, Markdown, NavigationBar, Tag};
use crate::render::{Registries, RenderContext, render};
use crate::scan::{self, Page, ScanError};
use crate::style;
use maud::{DOCTYPE, PreEscaped, html};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// What a build wrote, saved as `site.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteManifest {
    pub name: String,
    pub url: String,
    pub pages: Vec<PublishedPage>,
    /// Highlighter languages used anywhere on the site.
    pub languages: Vec<String>,
    pub js_resources: Vec<String>,
    pub fonts: Vec<String>,
    /// Class names of generated style rules.
    pub style_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPage {
    pub title: String,
    pub path: String,
    /// Output file relative to the output directory.
    pub file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Loads the config, scans `source` and publishes it to `output_dir`.
pub fn build(source: &Path, output_dir: &Path) -> Result<SiteManifest, PublishError> {
    let site = config::load_config(source)?;
    let manifest = scan::scan(source)?;
    publish(&site, &manifest.pages, output_dir)
}

/// Writes one document per non-link page, then `site.json`.
pub fn publish(
    site: &SiteConfig,
    pages: &[Page],
    output_dir: &Path,
) -> Result<SiteManifest, PublishError> {
    fs::create_dir_all(output_dir)?;
    let navigation = site_navigation(site, pages);
    let mut registries = Registries::default();
    let mut published = Vec::new();

    for page in pages.iter().filter(|page| !page.is_link) {
        let html = render_document(site, page, &navigation, &mut registries);
        let file = output_file(&page.path);
        let target = output_dir.join(&file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;
        tracing::info!(path = %page.path, file = %file.display(), "published page");

        published.push(PublishedPage {
            title: page.title.clone(),
            path: page.path.clone(),
            file,
            description: page.description.clone(),
        });
    }

    let manifest = SiteManifest {
        name: site.name.clone(),
        url: site.url.clone(),
        pages: published,
        languages: registries.languages.iter().cloned().collect(),
        js_resources: registries.js_resources.iter().cloned().collect(),
        fonts: registries.fonts.iter().cloned().collect(),
        style_classes: registries.styles.class_names().map(str::to_string).collect(),
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(output_dir.join("site.json"), json)?;
    Ok(manifest)
}

/// The navigation bar shared by every page: numbered pages in order.
/// Link pages open in a new tab.
pub fn site_navigation(site: &SiteConfig, pages: &[Page]) -> NavigationBar {
    let items: Children<family::NavItems> = pages
        .iter()
        .filter(|page| page.in_nav)
        .map(|page| {
            let link = Link::new(&page.link_title, page.target());
            if page.is_link { link.target_blank() } else { link }
        })
        .collect();
    NavigationBar::new(items)
        .brand(&site.name, "/")
        .id("site-nav")
        .class("mb-4")
}

/// Renders `page` into a complete HTML document.
pub fn render_document(
    site: &SiteConfig,
    page: &Page,
    navigation: &NavigationBar,
    registries: &mut Registries,
) -> String {
    let root = Group::<family::Html>::new(
        Children::new().with(navigation.clone()).with(
            Tag::new("main")
                .class("container")
                .child(Markdown::new(page.body.clone())),
        ),
    );
    let body = render(&root, &mut RenderContext::new(site, page.path.clone(), registries));

    let title = if page.path == "/" {
        site.name.clone()
    } else {
        format!("{} - {}", page.title, site.name)
    };
    let css = style::generate_all_css(&registries.styles, &site.themes, &site.layout);

    let document = html! {
        (DOCTYPE)
        html lang=(site.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(description) = &page.description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                style { (PreEscaped(css)) }
            }
            body {
                (PreEscaped(body))
                @for script in &registries.js_resources {
                    script src=(script) {}
                }
            }
        }
    };
    document.into_string()
}

/// `/` → `index.html`, `/a/b/` → `a/b/index.html`.
fn output_file(path: &str) -> PathBuf {
    let mut file = PathBuf::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        file.push(segment);
    }
    file.push("index.html");
    file
}
