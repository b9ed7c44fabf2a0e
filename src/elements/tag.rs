//! Generic tags and raw markup.

use crate::attributes::Attributes;
use crate::element::{AnyElement, Element, member_of};
use crate::flatten::render_flat;
use crate::markup::Markup;
use crate::render::RenderContext;

/// Any HTML tag around any children. The building block composites use
/// for their bodies.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    children: Vec<AnyElement>,
    attributes: Attributes,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            attributes: Attributes::default(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn child<E: Element>(mut self, element: E) -> Self {
        self.children.push(AnyElement::new(element));
        self
    }

    pub fn children<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = AnyElement>,
    {
        self.children.extend(elements);
        self
    }
}

impl Element for Tag {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn root_tag(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let content = render_flat(&self.children, cx);
        Markup::element(&self.name, &self.attributes, content)
    }
}

member_of!(Tag: Html);

/// Already-serialized HTML, emitted verbatim.
///
/// Attributes, when present, are hosted by a `<div>` around the markup.
#[derive(Debug, Clone, Default)]
pub struct Raw {
    html: Markup,
    attributes: Attributes,
}

impl Raw {
    pub fn new(html: Markup) -> Self {
        Self {
            html,
            attributes: Attributes::default(),
        }
    }
}

impl Element for Raw {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    /// Attributes always end up on a `<div>` around the markup.
    fn root_tag(&self) -> Option<&str> {
        Some("div")
    }

    fn markup(&self, _cx: &mut RenderContext<'_>) -> Markup {
        if self.attributes.is_empty() {
            self.html.clone()
        } else {
            Markup::element("div", &self.attributes, self.html.clone())
        }
    }
}

member_of!(Raw: Html);
