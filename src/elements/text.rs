//! Block text.

use crate::attributes::Attributes;
use crate::element::{
    AnyElement, Capability, Children, Element, Role, family, member_of,
};
use crate::flatten::render_flat;
use crate::markup::Markup;
use crate::render::RenderContext;

/// Typographic role of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Title1,
    Title2,
    Title3,
    Title4,
    Title5,
    Title6,
    /// Regular paragraph text.
    Body,
    /// Emphasized introductory paragraph.
    Lead,
}

impl Font {
    fn tag(self) -> &'static str {
        match self {
            Font::Title1 => "h1",
            Font::Title2 => "h2",
            Font::Title3 => "h3",
            Font::Title4 => "h4",
            Font::Title5 => "h5",
            Font::Title6 => "h6",
            Font::Body | Font::Lead => "p",
        }
    }
}

/// A paragraph or heading.
///
/// Without an explicit font a text renders as `<p>`. Containers may
/// re-purpose it: cards turn it into a title, navigation bars into navbar
/// text, dropdowns into a header.
#[derive(Debug, Clone)]
pub struct Text {
    content: Vec<AnyElement>,
    font: Option<Font>,
    family: Option<String>,
    tag: Option<&'static str>,
    attributes: Attributes,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_content(vec![AnyElement::new(TextNode::new(text))])
    }

    /// Text made of inline elements.
    pub fn with(content: Children<family::Inline>) -> Self {
        Self::from_content(content.elements().to_vec())
    }

    fn from_content(content: Vec<AnyElement>) -> Self {
        Self {
            content,
            font: None,
            family: None,
            tag: None,
            attributes: Attributes::default(),
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets a typeface by name. The site records every typeface its pages
    /// use, so the build can list the fonts to ship.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl Element for Text {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let tag = self
            .tag
            .unwrap_or_else(|| self.font.map_or("p", Font::tag));
        let mut attributes = match self.font {
            Some(Font::Lead) => Attributes::from_classes(["lead"]).merged(&self.attributes),
            _ => self.attributes.clone(),
        };
        if let Some(family) = &self.family {
            cx.register_font(family);
            attributes.append_style("font-family", format!("'{family}'"));
        }
        Markup::element(tag, &attributes, render_flat(&self.content, cx))
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Text { font: self.font }
    }

    fn adapt(&mut self, role: Role) {
        self.tag = match role {
            Role::CardTitle if self.font.is_none() => Some("div"),
            Role::NavbarText | Role::InputGroupText => Some("span"),
            Role::DropdownHeader => Some("h6"),
            _ => self.tag,
        };
    }
}

member_of!(Text: Html, NavItems, DropdownItems, FormItems, ControlGroupItems);

/// A run of plain text. Escaped on output.
#[derive(Debug, Clone)]
pub struct TextNode {
    text: String,
    attributes: Attributes,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Attributes::default(),
        }
    }
}

impl Element for TextNode {
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
        let text = Markup::escaped(&self.text);
        if self.attributes.is_empty() {
            text
        } else {
            Markup::element("span", &self.attributes, text)
        }
    }
}

member_of!(TextNode: Inline);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::config::SiteConfig;
    use crate::element::ElementExt;
    use crate::elements::{Emphasis, Strong};
    use crate::test_helpers::{render_at, render_with};

    #[test]
    fn plain_text_is_a_paragraph() {
        assert_eq!(render_at("/", &Text::new("Hello")), "<p>Hello</p>");
    }

    #[test]
    fn fonts_pick_heading_levels() {
        assert_eq!(
            render_at("/", &Text::new("Title").font(Font::Title1)),
            "<h1>Title</h1>"
        );
        assert_eq!(
            render_at("/", &Text::new("Lead").font(Font::Lead).class("x")),
            r#"<p class="lead x">Lead</p>"#
        );
    }

    #[test]
    fn font_family_is_styled_and_registered() {
        let text = Text::new("Hi").font_family("Inter").font(Font::Title2);
        let (html, registries) = render_with(&SiteConfig::default(), "/", &text);
        assert!(html.starts_with(r#"<h2 style="font-family: "#));
        assert!(html.contains("Inter"));
        assert!(html.ends_with(">Hi</h2>"));
        assert!(registries.fonts.contains("Inter"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render_at("/", &Text::new("a < b")), "<p>a &lt; b</p>");
    }

    #[test]
    fn inline_content_renders_in_order() {
        let text = Text::with(children![
            TextNode::new("Read "),
            Strong::new("this"),
            Emphasis::new(" now"),
        ]);
        assert_eq!(
            render_at("/", &text),
            "<p>Read <strong>this</strong><em> now</em></p>"
        );
    }

    #[test]
    fn card_title_role_only_changes_unstyled_text() {
        let mut plain = Text::new("a");
        plain.adapt(Role::CardTitle);
        assert_eq!(render_at("/", &plain), "<div>a</div>");

        let mut heading = Text::new("b").font(Font::Title2);
        heading.adapt(Role::CardTitle);
        assert_eq!(render_at("/", &heading), "<h2>b</h2>");
    }

    #[test]
    fn text_node_with_attributes_gets_a_span() {
        assert_eq!(
            render_at("/", &TextNode::new("x").class("y")),
            r#"<span class="y">x</span>"#
        );
    }
}
