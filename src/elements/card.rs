//! Cards.

use crate::attributes::Attributes;
use crate::element::{AnyElement, Children, Element, ElementExt, family, member_of};
use crate::elements::inline::Image;
use crate::elements::tag::Tag;
use crate::elements::text::TextNode;
use crate::flatten::flatten_children;
use crate::markup::Markup;
use crate::placement::{CardPlacement, place_all};
use crate::render::RenderContext;

/// A bordered box of content with optional image, header and footer.
///
/// Plain text inside a card becomes its title, body or lead text becomes
/// card text, and links and images get their card styling.
#[derive(Debug, Clone)]
pub struct Card {
    children: Children<family::Html>,
    image: Option<Image>,
    header: Option<String>,
    footer: Option<String>,
    attributes: Attributes,
}

impl Card {
    pub fn new(children: Children<family::Html>) -> Self {
        Self {
            children,
            image: None,
            header: None,
            footer: None,
            attributes: Attributes::default(),
        }
    }

    /// Image shown above the body.
    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl Element for Card {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn body(&self, _cx: &mut RenderContext<'_>) -> AnyElement {
        let mut card = Tag::div().class("card");
        if let Some(image) = &self.image {
            card = card.child(image.clone().class("card-img-top"));
        }
        if let Some(header) = &self.header {
            card = card.child(Tag::div().class("card-header").child(TextNode::new(header)));
        }
        card = card.child(CardBody {
            children: self.children.clone(),
            attributes: Attributes::default(),
        });
        if let Some(footer) = &self.footer {
            card = card.child(Tag::div().class("card-footer").child(TextNode::new(footer)));
        }
        AnyElement::new(card)
    }
}

member_of!(Card: Html);

/// The `card-body` div, placing each leaf with the card policy.
#[derive(Debug, Clone)]
struct CardBody {
    children: Children<family::Html>,
    attributes: Attributes,
}

impl Element for CardBody {
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
        Some("div")
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let content = place_all(&CardPlacement, flatten_children(&self.children), cx);
        let attributes = Attributes::from_classes(["card-body"]).merged(&self.attributes);
        Markup::element("div", &attributes, content)
    }
}
