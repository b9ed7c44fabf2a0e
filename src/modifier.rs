//! Modifiers: render-time transformations of an element.
//!
//! A [`Modifier`] receives a proxy of the element being modified,
//! [`ModifiedContent`], and returns the element to render in its place. The
//! proxy takes sole ownership of the content's attributes, so whatever the
//! modifier adds lands next to what the author already set.
//!
//! Where the accumulated attributes end up is the single most important
//! rendering decision in the crate:
//!
//! 1. **Primitive content**: attributes merge straight into the content's own
//!    tag. No extra markup.
//! 2. **Composite content whose body is a primitive `<div>`**: attributes
//!    merge into that body, so no wrapper breaks flex or grid layouts.
//! 3. **Anything else**: a synthesized `<div>` (or `<span>` for inline
//!    content) hosts the attributes around the rendered content.
//!
//! Case 1 falls out of primitives rendering their own attributes; cases 2 and
//! 3 live in [`render_composite`], the default rendering of every composite.

use crate::attributes::{Attributes, InlineStyle};
use crate::element::{AnyElement, Capability, Element, ElementExt, Family, Member, Role};
use crate::markup::Markup;
use crate::render::RenderContext;
use std::fmt;

/// A transformation applied when the modified element renders.
pub trait Modifier: Clone + 'static {
    fn body(&self, content: ModifiedContent, cx: &mut RenderContext<'_>) -> AnyElement;
}

/// Renders a composite's body with the composite's own attributes applied.
pub fn render_composite(
    body: AnyElement,
    attributes: &Attributes,
    inline: bool,
    cx: &mut RenderContext<'_>,
) -> Markup {
    if attributes.is_empty() {
        return body.markup(cx);
    }
    if body.is_primitive() && body.root_tag() == Some("div") {
        let mut body = body;
        body.attributes_mut().merge(attributes);
        return body.markup(cx);
    }
    let rendered = body.markup(cx);
    wrap(rendered, attributes, inline)
}

/// Hosts attributes on a synthesized container around `content`.
fn wrap(content: Markup, attributes: &Attributes, inline: bool) -> Markup {
    let tag = if inline { "span" } else { "div" };
    tracing::trace!(tag, "synthesizing attribute wrapper");
    Markup::raw(format!(
        "<{tag}{}>{}</{tag}>",
        attributes.render(),
        content.as_str()
    ))
}

/// The proxy a modifier works on.
///
/// It owns the content's attributes; modifying the proxy is modifying the
/// content. Rendering it renders the content with every attribute restored.
#[derive(Debug, Clone)]
pub struct ModifiedContent {
    content: AnyElement,
    attributes: Attributes,
}

impl ModifiedContent {
    pub fn new(mut content: AnyElement) -> Self {
        let attributes = std::mem::take(content.attributes_mut());
        Self {
            content,
            attributes,
        }
    }

    /// The content with the proxy's attributes merged back in.
    pub fn into_inner(self) -> AnyElement {
        let mut content = self.content;
        content.attributes_mut().merge(&self.attributes);
        content
    }
}

impl Element for ModifiedContent {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        self.content.is_primitive()
    }

    fn is_inline(&self) -> bool {
        self.content.is_inline()
    }

    fn body(&self, cx: &mut RenderContext<'_>) -> AnyElement {
        self.clone().into_inner().body(cx)
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        self.clone().into_inner().markup(cx)
    }

    fn capability(&self) -> Capability<'_> {
        self.content.capability()
    }

    fn resolve(&self, _cx: &mut RenderContext<'_>) -> Option<AnyElement> {
        Some(self.clone().into_inner())
    }

    fn root_tag(&self) -> Option<&str> {
        self.content.root_tag()
    }
}

/// An element paired with the modifier that transforms it.
///
/// Attribute changes on a modified element go to the wrapped content, so
/// `.class()` after `.modifier()` behaves exactly like before it.
#[derive(Clone)]
pub struct ModifiedElement<E, M> {
    content: E,
    modifier: M,
}

impl<E, M> ModifiedElement<E, M> {
    pub fn new(content: E, modifier: M) -> Self {
        Self { content, modifier }
    }
}

impl<E: fmt::Debug, M> fmt::Debug for ModifiedElement<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifiedElement")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl<E, M> Element for ModifiedElement<E, M>
where
    E: Element + Clone + 'static,
    M: Modifier,
{
    fn attributes(&self) -> &Attributes {
        self.content.attributes()
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self.content.attributes_mut()
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn is_inline(&self) -> bool {
        self.content.is_inline()
    }

    fn body(&self, cx: &mut RenderContext<'_>) -> AnyElement {
        let proxy = ModifiedContent::new(AnyElement::new(self.content.clone()));
        self.modifier.body(proxy, cx)
    }

    // The body already carries the content's attributes through the proxy.
    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        self.body(cx).markup(cx)
    }

    fn capability(&self) -> Capability<'_> {
        self.content.capability()
    }

    fn adapt(&mut self, role: Role) {
        self.content.adapt(role);
    }

    fn resolve(&self, cx: &mut RenderContext<'_>) -> Option<AnyElement> {
        Some(self.body(cx))
    }
}

impl<F, E, M> Member<F> for ModifiedElement<E, M>
where
    F: Family,
    E: Member<F> + Clone + 'static,
    M: Modifier,
{
}

/// Moves declarations into a CSS rule registered for the page and applies
/// the rule's generated class.
#[derive(Debug, Clone)]
pub struct RuleModifier {
    declarations: Vec<InlineStyle>,
}

impl RuleModifier {
    pub fn new<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = InlineStyle>,
    {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }
}

impl Modifier for RuleModifier {
    fn body(&self, content: ModifiedContent, cx: &mut RenderContext<'_>) -> AnyElement {
        let class = cx.registries_mut().styles.register(&self.declarations);
        AnyElement::new(content.class(class))
    }
}

/// A modifier written as a closure over the proxy.
#[derive(Clone)]
pub struct ModifierFn<F>(pub F);

impl<F> Modifier for ModifierFn<F>
where
    F: Fn(ModifiedContent) -> AnyElement + Clone + 'static,
{
    fn body(&self, content: ModifiedContent, _cx: &mut RenderContext<'_>) -> AnyElement {
        (self.0)(content)
    }
}
