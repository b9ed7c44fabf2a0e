//! Variadic children flattening.
//!
//! Builder constructs (loops, conditionals, nested groups) produce
//! transparent containers: elements that answer [`Element::subviews`] with
//! the children they stand for. Parents never render those directly. They
//! flatten their children first, which replaces every transparent container
//! by its own children, recursively, and yields the genuine leaves in
//! declaration order.
//!
//! Attributes set on a transparent container are not lost: every leaf
//! below it receives them, after its own. Ids are the exception, since an
//! id copied onto several leaves would no longer be unique.
//!
//! There is exactly one traversal. What differs between containers is what
//! they do with the leaves afterwards, see [`placement`](crate::placement).

use crate::attributes::Attributes;
use crate::element::{AnyElement, Capability, Children, Element, Family, Role};
use crate::elements::form::FormControl;
use crate::markup::Markup;
use crate::render::RenderContext;

/// One flattened leaf: the element, stripped of its attributes, plus the
/// attributes it will render with.
#[derive(Debug, Clone)]
pub struct Child {
    element: AnyElement,
    attributes: Attributes,
}

impl Child {
    /// Takes sole ownership of `element`'s attributes and adds `inherited`.
    fn new(mut element: AnyElement, inherited: &Attributes) -> Self {
        let attributes = std::mem::take(element.attributes_mut()).merged(inherited);
        Self {
            element,
            attributes,
        }
    }

    /// The leaf, with empty attributes.
    pub fn element(&self) -> &AnyElement {
        &self.element
    }

    /// The leaf with its resolved attributes restored.
    pub fn into_element(self) -> AnyElement {
        let mut element = self.element;
        element.attributes_mut().merge(&self.attributes);
        element
    }

    /// Evaluates the modifiers wrapping this leaf.
    ///
    /// Containers that read a leaf's concrete type or render it through
    /// [`FormControl`] would otherwise skip the modifiers and whatever they
    /// add. The result carries every attribute the modifiers produced.
    pub fn resolved(self, cx: &mut RenderContext<'_>) -> Child {
        let mut element = self.into_element();
        while let Some(next) = element.resolve(cx) {
            element = next;
        }
        Child::new(element, &Attributes::default())
    }
}

impl Element for Child {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        self.element.is_primitive()
    }

    fn is_inline(&self) -> bool {
        self.element.is_inline()
    }

    fn body(&self, cx: &mut RenderContext<'_>) -> AnyElement {
        self.clone().into_element().body(cx)
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        self.clone().into_element().markup(cx)
    }

    fn capability(&self) -> Capability<'_> {
        self.element.capability()
    }

    fn adapt(&mut self, role: Role) {
        self.element.adapt(role);
    }

    fn form_control(&self) -> Option<&dyn FormControl> {
        self.element.form_control()
    }
}

/// Flattens `elements` into leaves, depth-first, in declaration order.
pub fn flatten(elements: &[AnyElement]) -> Vec<Child> {
    let mut leaves = Vec::with_capacity(elements.len());
    let inherited = Attributes::default();
    for element in elements {
        descend(element, &inherited, &mut leaves);
    }
    tracing::trace!(declared = elements.len(), leaves = leaves.len(), "flattened children");
    leaves
}

/// Flattens a typed children list.
pub fn flatten_children<F: Family>(children: &Children<F>) -> Vec<Child> {
    flatten(children.elements())
}

fn descend(element: &AnyElement, inherited: &Attributes, leaves: &mut Vec<Child>) {
    match element.subviews() {
        Some(children) => {
            let mut passed_down = element.attributes().clone();
            passed_down.id = None;
            let passed_down = passed_down.merged(inherited);
            for child in &children {
                descend(child, &passed_down, leaves);
            }
        }
        None => leaves.push(Child::new(element.clone(), inherited)),
    }
}

/// Renders every leaf of `elements` as-is and concatenates the results.
pub fn render_flat(elements: &[AnyElement], cx: &mut RenderContext<'_>) -> Markup {
    flatten(elements)
        .iter()
        .map(|leaf| leaf.markup(cx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::element::{ElementExt, family};
    use crate::elements::{EmptyElement, Group, Link, Text};
    use crate::test_helpers::render_at;

    fn texts(leaves: &[Child]) -> Vec<String> {
        leaves
            .iter()
            .map(|leaf| render_at("/", leaf))
            .collect()
    }

    #[test]
    fn nested_groups_flatten_in_declaration_order() {
        let items: Children<family::Html> = children![
            Text::new("a"),
            Group::new(children![
                Text::new("b"),
                Group::new(children![Text::new("c"), Text::new("d")]),
            ]),
            Text::new("e"),
        ];
        let leaves = flatten_children(&items);
        assert_eq!(
            texts(&leaves),
            ["<p>a</p>", "<p>b</p>", "<p>c</p>", "<p>d</p>", "<p>e</p>"]
        );
    }

    #[test]
    fn group_attributes_reach_every_leaf_after_their_own() {
        let items: Children<family::Html> = children![
            Group::new(children![Text::new("a").class("own"), Text::new("b")]).class("shared")
        ];
        let leaves = flatten_children(&items);
        assert_eq!(leaves[0].attributes().classes(), ["own", "shared"]);
        assert_eq!(leaves[1].attributes().classes(), ["shared"]);
    }

    #[test]
    fn group_id_is_not_copied_to_leaves() {
        let items: Children<family::Html> =
            children![Group::new(children![Text::new("a"), Text::new("b")]).id("g")];
        let leaves = flatten_children(&items);
        assert!(leaves.iter().all(|leaf| leaf.attributes().id.is_none()));
    }

    #[test]
    fn leaf_element_is_stripped_of_attributes() {
        let items: Children<family::Html> = children![Text::new("a").class("own")];
        let leaves = flatten_children(&items);
        assert!(leaves[0].element().attributes().is_empty());
        assert_eq!(render_at("/", &leaves[0]), r#"<p class="own">a</p>"#);
    }

    #[test]
    fn empty_elements_vanish() {
        let items: Children<family::Html> = children![
            EmptyElement::new(),
            Group::when(false, || children![Text::new("hidden")]),
            Text::new("shown"),
        ];
        let leaves = flatten_children(&items);
        assert_eq!(texts(&leaves), ["<p>shown</p>"]);
    }

    #[test]
    fn leaves_keep_their_capability() {
        let items: Children<family::Html> =
            children![Group::new(children![Link::new("Home", "/")])];
        let leaves = flatten_children(&items);
        assert!(matches!(
            leaves[0].capability(),
            Capability::Link { target: "/" }
        ));
    }

    #[test]
    fn for_each_expands_in_iteration_order() {
        let items: Children<family::Html> =
            children![Group::for_each(1..=3, |n| Text::new(n.to_string()))];
        let leaves = flatten_children(&items);
        assert_eq!(texts(&leaves), ["<p>1</p>", "<p>2</p>", "<p>3</p>"]);
    }

    #[test]
    fn resolved_leaf_is_the_modified_content() {
        let site = crate::config::SiteConfig::default();
        let mut registries = crate::render::Registries::default();
        let mut cx = RenderContext::new(&site, "/", &mut registries);
        let items: Children<family::Html> = children![
            Text::new("a")
                .class("own")
                .rule([crate::attributes::InlineStyle::new("color", "red")])
        ];
        let leaf = flatten_children(&items).remove(0).resolved(&mut cx);
        assert!(leaf.element().downcast_ref::<Text>().is_some());
        assert_eq!(leaf.attributes().classes().len(), 2);
        assert!(leaf.attributes().has_class("own"));
        assert_eq!(registries.styles.class_names().count(), 1);
    }
}
