//! CLI output formatting.
//!
//! Output is information-first: each page leads with its positional index
//! and title, with its source file as an indented context line.
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Welcome → /
//!     Source: index.md
//! 002 Getting Started → /getting-started/
//!     Source: 010-getting-started.md
//!
//! Links
//! 001 source → https://example.com/lumen
//! ```
//!
//! ## Build
//!
//! ```text
//! Welcome → index.html
//! Getting Started → getting-started/index.html
//!
//! Generated 2 pages
//! Languages: toml
//! ```
//!
//! Every section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::publish::SiteManifest;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format the pages and links found by a scan.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (i, page) in manifest.documents().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), page.title, page.path));
        lines.push(format!("{}Source: {}", indent(1), page.source.display()));
        if page.in_nav {
            lines.push(format!("{}In navigation", indent(1)));
        }
    }

    let links: Vec<_> = manifest.pages.iter().filter(|page| page.is_link).collect();
    if !links.is_empty() {
        lines.push(String::new());
        lines.push("Links".to_string());
        for (i, page) in links.iter().enumerate() {
            lines.push(format!(
                "{} {} → {}",
                format_index(i + 1),
                page.link_title,
                page.target()
            ));
        }
    }

    if source_root.join("config.toml").exists() {
        lines.push(String::new());
        lines.push("Config".to_string());
        lines.push(format!("{}config.toml", indent(1)));
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

/// Format what a build wrote.
pub fn format_publish_output(manifest: &SiteManifest) -> Vec<String> {
    let mut lines: Vec<String> = manifest
        .pages
        .iter()
        .map(|page| format!("{} → {}", page.title, page.file.display()))
        .collect();

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(manifest.pages.len(), "page")));
    if !manifest.languages.is_empty() {
        lines.push(format!("Languages: {}", manifest.languages.join(", ")));
    }
    if !manifest.style_classes.is_empty() {
        lines.push(format!(
            "Styles: {}",
            plural(manifest.style_classes.len(), "generated rule")
        ));
    }
    lines
}

pub fn print_publish_output(manifest: &SiteManifest) {
    for line in format_publish_output(manifest) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::PublishedPage;
    use crate::scan::{Page, scan};
    use crate::test_helpers::setup_content;
    use std::path::PathBuf;

    #[test]
    fn index_is_zero_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn scan_output_lists_pages_then_links() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 Welcome → /");
        assert_eq!(lines[2], "    Source: index.md");
        assert_eq!(lines[3], "002 Getting Started → /getting-started/");
        assert!(lines.contains(&"Links".to_string()));
        assert!(lines.contains(&"001 source → https://example.com/lumen".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("    config.toml"));
    }

    #[test]
    fn scan_output_without_links_or_config() {
        let manifest = Manifest {
            pages: vec![Page {
                title: "Notes".into(),
                link_title: "notes".into(),
                path: "/notes/".into(),
                source: PathBuf::from("notes.md"),
                body: "# Notes".into(),
                description: None,
                in_nav: false,
                sort_key: u32::MAX,
                is_link: false,
            }],
        };
        let lines = format_scan_output(&manifest, Path::new("/nonexistent"));
        assert_eq!(
            lines,
            vec!["Pages", "001 Notes → /notes/", "    Source: notes.md"]
        );
    }

    #[test]
    fn publish_output_summarizes() {
        let manifest = SiteManifest {
            pages: vec![PublishedPage {
                title: "Welcome".into(),
                path: "/".into(),
                file: PathBuf::from("index.html"),
                description: None,
            }],
            languages: vec!["rust".into(), "toml".into()],
            ..SiteManifest::default()
        };
        assert_eq!(
            format_publish_output(&manifest),
            vec![
                "Welcome → index.html",
                "",
                "Generated 1 page",
                "Languages: rust, toml",
            ]
        );
    }
}
