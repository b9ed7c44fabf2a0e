use crate::attributes::Attributes;
use crate::element::{Capability, Element, member_of};
use crate::markup::Markup;
use crate::render::RenderContext;

/// A horizontal rule.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    attributes: Attributes,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for Divider {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn markup(&self, _cx: &mut RenderContext<'_>) -> Markup {
        Markup::void("hr", &self.attributes)
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Divider
    }
}

member_of!(Divider: Html, DropdownItems);
