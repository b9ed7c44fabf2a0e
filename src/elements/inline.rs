//! Inline elements: running text, links and images.

use crate::attributes::Attributes;
use crate::element::{
    AnyElement, Capability, Children, Element, family, member_of,
};
use crate::elements::text::TextNode;
use crate::flatten::render_flat;
use crate::markup::Markup;
use crate::render::RenderContext;

macro_rules! inline_tag {
    ($(#[$doc:meta])* $name:ident, $tag:literal, $capability:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            content: Vec<AnyElement>,
            attributes: Attributes,
        }

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self {
                    content: vec![AnyElement::new(TextNode::new(text))],
                    attributes: Attributes::default(),
                }
            }

            pub fn with(content: Children<family::Inline>) -> Self {
                Self {
                    content: content.elements().to_vec(),
                    attributes: Attributes::default(),
                }
            }
        }

        impl Element for $name {
            fn attributes(&self) -> &Attributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut Attributes {
                &mut self.attributes
            }

            fn is_primitive(&self) -> bool {
                true
            }

            fn is_inline(&self) -> bool {
                true
            }

            fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
                Markup::element($tag, &self.attributes, render_flat(&self.content, cx))
            }

            fn capability(&self) -> Capability<'_> {
                $capability
            }
        }
    };
}

inline_tag!(
    /// A `<span>` of running text.
    Span,
    "span",
    Capability::Span
);
inline_tag!(Strong, "strong", Capability::Plain);
inline_tag!(Emphasis, "em", Capability::Plain);

member_of!(Span: Inline, Html, NavItems, DropdownItems, ControlGroupItems);
member_of!(Strong: Inline);
member_of!(Emphasis: Inline);

/// Inline `<code>`. Tagged with the site's default language when inline
/// highlighting is enabled.
#[derive(Debug, Clone)]
pub struct InlineCode {
    code: String,
    attributes: Attributes,
}

impl InlineCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            attributes: Attributes::default(),
        }
    }
}

impl Element for InlineCode {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn is_inline(&self) -> bool {
        true
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let highlighting = &cx.site().syntax_highlighting;
        let language = highlighting
            .highlight_inline_code
            .then(|| highlighting.default_language.clone())
            .flatten();
        let attributes = match language {
            Some(language) => {
                cx.register_language(&language);
                Attributes::from_classes([format!("language-{language}")]).merged(&self.attributes)
            }
            None => self.attributes.clone(),
        };
        Markup::element("code", &attributes, Markup::escaped(&self.code))
    }
}

member_of!(InlineCode: Inline);

/// A hyperlink.
#[derive(Debug, Clone)]
pub struct Link {
    content: Vec<AnyElement>,
    target: String,
    attributes: Attributes,
}

impl Link {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: vec![AnyElement::new(TextNode::new(text))],
            target: target.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn with(content: Children<family::Inline>, target: impl Into<String>) -> Self {
        Self {
            content: content.elements().to_vec(),
            target: target.into(),
            attributes: Attributes::default(),
        }
    }

    /// Opens the target in a new tab.
    pub fn target_blank(mut self) -> Self {
        self.attributes.append_custom("target", "_blank");
        self.attributes.append_custom("rel", "noopener noreferrer");
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Element for Link {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn is_inline(&self) -> bool {
        true
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        Markup::raw(format!(
            "<a href=\"{}\"{}>{}</a>",
            crate::markup::escape(&self.target),
            self.attributes.render(),
            render_flat(&self.content, cx)
        ))
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Link {
            target: &self.target,
        }
    }
}

member_of!(Link: Html, Inline, NavItems, DropdownItems);

/// An image.
#[derive(Debug, Clone)]
pub struct Image {
    source: String,
    description: String,
    attributes: Attributes,
}

impl Image {
    pub fn new(source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            description: description.into(),
            attributes: Attributes::default(),
        }
    }

    /// Defers loading until the image nears the viewport.
    pub fn lazy(mut self) -> Self {
        self.attributes.append_custom("loading", "lazy");
        self
    }
}

impl Element for Image {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn is_inline(&self) -> bool {
        true
    }

    fn markup(&self, _cx: &mut RenderContext<'_>) -> Markup {
        Markup::raw(format!(
            "<img src=\"{}\" alt=\"{}\"{}>",
            crate::markup::escape(&self.source),
            crate::markup::escape(&self.description),
            self.attributes.render()
        ))
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Image
    }
}

member_of!(Image: Html, Inline);
