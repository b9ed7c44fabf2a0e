//! Markdown content embedded in a page.

use crate::attributes::Attributes;
use crate::element::{AnyElement, Element, member_of};
use crate::elements::Raw;
use crate::markdown::{self, MarkdownOptions};
use crate::markup::Markup;
use crate::render::RenderContext;

/// Markdown source rendered to HTML at build time.
///
/// Code blocks inside go through the same highlighting checks as
/// [`CodeBlock`](crate::elements::CodeBlock).
#[derive(Debug, Clone)]
pub struct Markdown {
    source: String,
    remove_title: bool,
    attributes: Attributes,
}

impl Markdown {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            remove_title: false,
            attributes: Attributes::default(),
        }
    }

    /// Leaves the first level-one heading out of the output.
    pub fn without_title(mut self) -> Self {
        self.remove_title = true;
        self
    }
}

impl Element for Markdown {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn body(&self, cx: &mut RenderContext<'_>) -> AnyElement {
        let options = MarkdownOptions {
            remove_title_from_body: self.remove_title,
            ..MarkdownOptions::from_site(cx.site())
        };
        let parsed = markdown::parse(&self.source, &options);
        for language in &parsed.languages {
            cx.highlight_language(Some(language));
        }
        AnyElement::new(Raw::new(Markup::raw(parsed.body)))
    }
}

member_of!(Markdown: Html);
