//! Structural elements: transparent groups, sections and lists.

use crate::attributes::Attributes;
use crate::element::{
    AnyElement, Capability, Children, Element, Family, Member, family, member_of,
};
use crate::flatten::{flatten_children, render_flat};
use crate::markup::Markup;
use crate::placement::{ListPlacement, place_all};
use crate::render::RenderContext;

/// A transparent container.
///
/// Groups are what loops and conditionals build: parents flatten them away
/// and render their children in their place. Attributes set on a group
/// apply to each of its children.
#[derive(Debug, Clone)]
pub struct Group<F: Family = family::Html> {
    children: Children<F>,
    attributes: Attributes,
}

impl<F: Family> Group<F> {
    pub fn new(children: Children<F>) -> Self {
        Self {
            children,
            attributes: Attributes::default(),
        }
    }

    /// One child per item, in iteration order.
    pub fn for_each<I, E>(items: I, build: impl FnMut(I::Item) -> E) -> Self
    where
        I: IntoIterator,
        E: Member<F>,
    {
        Self::new(items.into_iter().map(build).collect())
    }

    /// The built children when `condition` holds, nothing otherwise.
    pub fn when(condition: bool, build: impl FnOnce() -> Children<F>) -> Self {
        if condition {
            Self::new(build())
        } else {
            Self::new(Children::new())
        }
    }

    /// One of two branches.
    pub fn either(
        condition: bool,
        then: impl FnOnce() -> Children<F>,
        otherwise: impl FnOnce() -> Children<F>,
    ) -> Self {
        if condition {
            Self::new(then())
        } else {
            Self::new(otherwise())
        }
    }
}

impl<F: Family> Element for Group<F> {
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
        render_flat(std::slice::from_ref(&AnyElement::new(self.clone())), cx)
    }

    fn subviews(&self) -> Option<Vec<AnyElement>> {
        Some(self.children.elements().to_vec())
    }
}

impl<F: Family> Member<F> for Group<F> {}

/// Renders nothing. Valid in every family.
#[derive(Debug, Clone, Default)]
pub struct EmptyElement {
    attributes: Attributes,
}

impl EmptyElement {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for EmptyElement {
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
        Markup::empty()
    }

    fn subviews(&self) -> Option<Vec<AnyElement>> {
        Some(Vec::new())
    }
}

impl<F: Family> Member<F> for EmptyElement {}

/// A titled `<section>`.
#[derive(Debug, Clone)]
pub struct Section {
    title: Option<String>,
    children: Children<family::Html>,
    attributes: Attributes,
}

impl Section {
    pub fn new(title: impl Into<String>, children: Children<family::Html>) -> Self {
        Self {
            title: Some(title.into()),
            children,
            attributes: Attributes::default(),
        }
    }

    pub fn untitled(children: Children<family::Html>) -> Self {
        Self {
            title: None,
            children,
            attributes: Attributes::default(),
        }
    }
}

impl Element for Section {
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
        let mut content = match &self.title {
            Some(title) => Markup::element("h2", &Attributes::new(), Markup::escaped(title)),
            None => Markup::empty(),
        };
        content.push(&render_flat(self.children.elements(), cx));
        Markup::element("section", &self.attributes, content)
    }
}

member_of!(Section: Html);

/// An explicit `<li>`. Lists place it as-is instead of wrapping it.
#[derive(Debug, Clone)]
pub struct ListItem {
    children: Children<family::Html>,
    attributes: Attributes,
}

impl ListItem {
    pub fn new(children: Children<family::Html>) -> Self {
        Self {
            children,
            attributes: Attributes::default(),
        }
    }
}

impl Element for ListItem {
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
        let content = render_flat(self.children.elements(), cx);
        Markup::element("li", &self.attributes, content)
    }

    fn capability(&self) -> Capability<'_> {
        Capability::ListItem
    }
}

member_of!(ListItem: Html);

/// An ordered or unordered list. Every child becomes one item.
#[derive(Debug, Clone)]
pub struct List {
    children: Children<family::Html>,
    ordered: bool,
    attributes: Attributes,
}

impl List {
    pub fn new(children: Children<family::Html>) -> Self {
        Self {
            children,
            ordered: false,
            attributes: Attributes::default(),
        }
    }

    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }
}

impl Element for List {
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
        let tag = if self.ordered { "ol" } else { "ul" };
        let items = place_all(&ListPlacement, flatten_children(&self.children), cx);
        Markup::element(tag, &self.attributes, items)
    }
}

member_of!(List: Html);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::element::ElementExt;
    use crate::elements::Text;
    use crate::test_helpers::render_at;

    #[test]
    fn section_with_title() {
        let section = Section::new("Header", children![Text::new("Body")]);
        assert_eq!(
            render_at("/", &section),
            "<section><h2>Header</h2><p>Body</p></section>"
        );
    }

    #[test]
    fn untitled_section_has_no_heading() {
        let section = Section::untitled(children![Text::new("Body")]).class("intro");
        assert_eq!(
            render_at("/", &section),
            r#"<section class="intro"><p>Body</p></section>"#
        );
    }

    #[test]
    fn group_of_nothing_renders_empty() {
        let group: Group = Group::when(false, || children![Text::new("a")]);
        assert_eq!(render_at("/", &group), "");
        let branches: Group = Group::either(
            false,
            || children![EmptyElement::new()],
            || children![EmptyElement::new(), EmptyElement::new()],
        );
        assert_eq!(render_at("/", &branches), "");
    }

    #[test]
    fn group_rendered_directly_applies_its_attributes_to_children() {
        let group: Group = Group::new(children![Text::new("a"), Text::new("b")]).class("x");
        assert_eq!(
            render_at("/", &group),
            r#"<p class="x">a</p><p class="x">b</p>"#
        );
    }

    #[test]
    fn list_wraps_each_child_once() {
        let list = List::new(children![
            Text::new("a"),
            ListItem::new(children![Text::new("b")]).class("done"),
            Group::for_each(["c", "d"], Text::new),
        ]);
        assert_eq!(
            render_at("/", &list),
            r#"<ul><li><p>a</p></li><li class="done"><p>b</p></li><li><p>c</p></li><li><p>d</p></li></ul>"#
        );
    }

    #[test]
    fn ordered_list_uses_ol() {
        let list = List::new(children![Text::new("a")]).ordered();
        assert_eq!(render_at("/", &list), "<ol><li><p>a</p></li></ol>");
    }
}
