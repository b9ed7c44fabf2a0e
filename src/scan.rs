//! Content discovery.
//!
//! Walks a content directory and turns every markdown file into a [`Page`].
//! The directory tree becomes the URL tree:
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md                     # → /
//! ├── 010-getting-started.md       # → /getting-started/ (numbered = in nav)
//! ├── 020-Guides/
//! │   ├── index.md                 # → /Guides/
//! │   └── 010-layout.md            # → /Guides/layout/
//! ├── 030-source.md                # URL-only content = external nav link
//! ├── notes.md                     # → /notes/ (unnumbered = hidden from nav)
//! └── .drafts/                     # Hidden entries are skipped
//! ```
//!
//! ## Naming Conventions
//!
//! - **Numbered entries** (`NNN-name`): the number orders the page and puts it
//!   in navigation; it never appears in URLs.
//! - **Unnumbered entries**: published, but left out of navigation.
//! - **`index.md`**: the page for its directory.
//! - Dashes in names become spaces in link titles.
//!
//! Two files that resolve to the same URL are an error.

use crate::markdown::{self, MarkdownOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{first} and {second} both publish to {path}")]
    DuplicatePath {
        path: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Everything found in a content directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Pages in path order: by the numbers along each path, then by path.
    pub pages: Vec<Page>,
}

impl Manifest {
    /// Numbered pages, in navigation order.
    pub fn navigation(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| page.in_nav)
    }

    /// Pages that produce an HTML document (everything but external links).
    pub fn documents(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| !page.is_link)
    }
}

/// A page generated from one markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// First `# heading` in the markdown, or the link title.
    pub title: String,
    /// Label in navigation: the file name without its number, dashes as spaces.
    pub link_title: String,
    /// URL path, always with a trailing slash (`/`, `/Guides/layout/`).
    pub path: String,
    /// Source file relative to the content root.
    pub source: PathBuf,
    /// Raw markdown, or the URL for link pages.
    pub body: String,
    /// First paragraph of the page, as plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub in_nav: bool,
    /// Number prefix (the directory's, for index pages); `u32::MAX` when
    /// unnumbered.
    pub sort_key: u32,
    /// The body is a URL and the page is only a navigation link.
    pub is_link: bool,
}

impl Page {
    /// Where navigation points: the URL for link pages, the page path otherwise.
    pub fn target(&self) -> &str {
        if self.is_link { self.body.trim() } else { &self.path }
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let mut pages = Vec::new();
    let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        let content = fs::read_to_string(entry.path())?;
        let page = parse_page(&relative, content);
        let key = order_key(&relative);

        if let Some(first) = sources.insert(page.path.clone(), relative.clone()) {
            return Err(ScanError::DuplicatePath {
                path: page.path,
                first,
                second: relative,
            });
        }
        tracing::debug!(source = %relative.display(), path = %page.path, "found page");
        pages.push((key, page));
    }

    pages.sort_by(|(a_key, a), (b_key, b)| a_key.cmp(b_key).then_with(|| a.path.cmp(&b.path)));
    Ok(Manifest {
        pages: pages.into_iter().map(|(_, page)| page).collect(),
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

/// Splits `NNN-name` into its number and name. Unnumbered names pass
/// through whole.
fn split_number(name: &str) -> (Option<u32>, &str) {
    match name.split_once('-') {
        Some((prefix, rest)) => match prefix.parse::<u32>() {
            Ok(number) => (Some(number), rest),
            Err(_) => (None, name),
        },
        None => match name.parse::<u32>() {
            Ok(number) => (Some(number), ""),
            Err(_) => (None, name),
        },
    }
}

/// Number and name of every directory between the root and `relative`.
fn directories(relative: &Path) -> Vec<(Option<u32>, String)> {
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|component| {
            let dir = component.as_os_str().to_string_lossy();
            match split_number(&dir) {
                (number, "") => (number, dir.to_string()),
                (number, rest) => (number, rest.to_string()),
            }
        })
        .collect()
}

fn file_name_parts(relative: &Path) -> (Option<u32>, String) {
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    match split_number(&stem) {
        (number, "") => (number, stem.clone()),
        (number, name) => (number, name.to_string()),
    }
}

fn is_index(name: &str) -> bool {
    name.eq_ignore_ascii_case("index")
}

/// Sort key: the numbers along the path, unnumbered entries last. A
/// directory's index page sorts before the pages inside it.
fn order_key(relative: &Path) -> Vec<u32> {
    let mut key: Vec<u32> = directories(relative)
        .into_iter()
        .map(|(number, _)| number.unwrap_or(u32::MAX))
        .collect();
    let (number, name) = file_name_parts(relative);
    if !is_index(&name) {
        key.push(number.unwrap_or(u32::MAX));
    }
    key
}

fn parse_page(relative: &Path, content: String) -> Page {
    let directories = directories(relative);
    let (mut number, name) = file_name_parts(relative);
    let mut segments: Vec<String> = directories.iter().map(|(_, dir)| dir.clone()).collect();

    let link_title = if is_index(&name) {
        if number.is_none() {
            number = directories.last().and_then(|(number, _)| *number);
        }
        segments
            .last()
            .map(|dir| dir.replace('-', " "))
            .unwrap_or_else(|| "Home".to_string())
    } else {
        segments.push(name.clone());
        name.replace('-', " ")
    };
    let path = if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    };

    let trimmed = content.trim();
    let is_link = !trimmed.contains('\n')
        && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

    let (title, description) = if is_link {
        (link_title.clone(), None)
    } else {
        let parsed = markdown::parse(&content, &MarkdownOptions::default());
        (
            parsed.title.unwrap_or_else(|| link_title.clone()),
            parsed.description,
        )
    };

    Page {
        title,
        link_title,
        path,
        source: relative.to_path_buf(),
        body: content,
        description,
        in_nav: number.is_some(),
        sort_key: number.unwrap_or(u32::MAX),
        is_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_content;
    use tempfile::TempDir;

    fn find<'a>(manifest: &'a Manifest, path: &str) -> &'a Page {
        manifest
            .pages
            .iter()
            .find(|page| page.path == path)
            .unwrap_or_else(|| panic!("no page at {path}"))
    }

    #[test]
    fn split_number_variants() {
        assert_eq!(split_number("020-My-Guide"), (Some(20), "My-Guide"));
        assert_eq!(split_number("001"), (Some(1), ""));
        assert_eq!(split_number("001-"), (Some(1), ""));
        assert_eq!(split_number("wip-drafts"), (None, "wip-drafts"));
        assert_eq!(split_number("notes"), (None, "notes"));
    }

    #[test]
    fn pages_map_to_url_paths() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let paths: Vec<&str> = manifest.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/getting-started/",
                "/Guides/",
                "/Guides/layout/",
                "/source/",
                "/notes/",
            ]
        );
    }

    #[test]
    fn numbered_pages_are_in_navigation() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let nav: Vec<&str> = manifest.navigation().map(|p| p.link_title.as_str()).collect();
        assert_eq!(nav, vec!["getting started", "Guides", "layout", "source"]);
        assert!(!find(&manifest, "/notes/").in_nav);
    }

    #[test]
    fn title_from_heading_with_link_title_fallback() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(find(&manifest, "/getting-started/").title, "Getting Started");
        assert_eq!(find(&manifest, "/notes/").title, "notes");
        assert_eq!(find(&manifest, "/").link_title, "Home");
    }

    #[test]
    fn description_is_first_paragraph() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(
            find(&manifest, "/getting-started/").description.as_deref(),
            Some("Install lumen and build your first site.")
        );
    }

    #[test]
    fn url_only_page_is_a_link() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let source = find(&manifest, "/source/");
        assert!(source.is_link);
        assert_eq!(source.target(), "https://example.com/lumen");
        assert_eq!(manifest.documents().count(), 5);
    }

    #[test]
    fn multiline_content_is_not_a_link() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("010-page.md"),
            "https://example.com\n\nSee above.",
        )
        .unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(!manifest.pages[0].is_link);
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.pages.iter().all(|p| !p.path.contains("drafts")));
    }

    #[test]
    fn duplicate_paths_are_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-about.md"), "# A").unwrap();
        fs::write(tmp.path().join("020-about.md"), "# B").unwrap();
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::DuplicatePath { ref path, .. } if path == "/about/"));
    }

    #[test]
    fn empty_directory_has_no_pages() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "name = \"x\"").unwrap();
        assert!(scan(tmp.path()).unwrap().pages.is_empty());
    }
}
