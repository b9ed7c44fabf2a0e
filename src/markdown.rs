//! Markdown to HTML, via pulldown-cmark.
//!
//! [`parse`] is a pure function from source text to a [`ParsedMarkdown`]:
//! the document title (its first level-one heading), a plain-text
//! description (its first paragraph) and the rendered HTML body. Code
//! blocks without a language get the configured default, and every
//! language used is reported so the caller can register it.

use crate::config::SiteConfig;
use crate::markup::escape;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Drop the title heading from the rendered body.
    pub remove_title_from_body: bool,
    /// Language assumed for code blocks that do not name one.
    pub default_highlighter_language: Option<String>,
    /// Tag inline code with the default language too.
    pub highlight_inline_code: bool,
}

impl MarkdownOptions {
    /// Highlighting options taken from the site configuration.
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            remove_title_from_body: false,
            default_highlighter_language: site.syntax_highlighting.default_language.clone(),
            highlight_inline_code: site.syntax_highlighting.highlight_inline_code,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMarkdown {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: String,
    /// Highlighter languages the body uses.
    pub languages: BTreeSet<String>,
}

/// Parses `source` into title, description and HTML body.
pub fn parse(source: &str, options: &MarkdownOptions) -> ParsedMarkdown {
    let parser = Parser::new_ext(
        source,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
    );

    let mut parsed = ParsedMarkdown::default();
    let mut events: Vec<Event> = Vec::new();
    let mut in_title = false;
    let mut title = String::new();
    let mut in_description = false;
    let mut description = String::new();
    let keep_title = !options.remove_title_from_body;

    for event in parser {
        if in_title {
            match &event {
                Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                    in_title = false;
                    parsed.title = Some(title.trim().to_string());
                }
                Event::Text(text) | Event::Code(text) => title.push_str(text),
                _ => {}
            }
            if keep_title {
                events.push(event);
            }
            continue;
        }

        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if parsed.title.is_none() => {
                in_title = true;
                if keep_title {
                    events.push(event);
                }
            }
            Event::Start(Tag::Paragraph) if parsed.description.is_none() => {
                in_description = true;
                events.push(event);
            }
            Event::End(TagEnd::Paragraph) if in_description => {
                in_description = false;
                parsed.description = Some(description.trim().to_string());
                events.push(event);
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                    CodeBlockKind::Indented => None,
                }
                .or_else(|| options.default_highlighter_language.clone());
                let kind = match language {
                    Some(language) => {
                        parsed.languages.insert(language.clone());
                        CodeBlockKind::Fenced(CowStr::from(language))
                    }
                    None => kind,
                };
                events.push(Event::Start(Tag::CodeBlock(kind)));
            }
            Event::Code(code) => {
                if in_description {
                    description.push_str(&code);
                }
                let language = options
                    .highlight_inline_code
                    .then(|| options.default_highlighter_language.clone())
                    .flatten();
                match language {
                    Some(language) => {
                        let html = format!(
                            "<code class=\"language-{language}\">{}</code>",
                            escape(&code)
                        );
                        parsed.languages.insert(language);
                        events.push(Event::InlineHtml(CowStr::from(html)));
                    }
                    None => events.push(Event::Code(code)),
                }
            }
            Event::Text(text) => {
                if in_description {
                    description.push_str(&text);
                }
                events.push(Event::Text(text));
            }
            Event::SoftBreak | Event::HardBreak if in_description => {
                description.push(' ');
                events.push(event);
            }
            other => events.push(other),
        }
    }

    html::push_html(&mut parsed.body, events.into_iter());
    parsed
}
