//! The element protocol.
//!
//! An element is any value that can render itself into [`Markup`]. Two
//! orthogonal properties describe every element type:
//!
//! - **Compositeness.** A *primitive* element serializes itself directly. A
//!   *composite* element describes itself as another element, its `body`,
//!   and renders by delegation. Primitives answer `true` from
//!   [`Element::is_primitive`] and override [`Element::markup`]; composites
//!   answer `false` and implement [`Element::body`].
//! - **Placement.** Containers only accept children belonging to their
//!   [`Family`]: page-level content, inline content, navigation items, form
//!   items and so on. Membership is declared statically through
//!   [`Member`], so a navigation bar refuses a table row at compile time.
//!
//! Children are collected into a typed [`Children<F>`], usually with the
//! [`children!`](crate::children) macro. Containers never look at that list
//! directly: they [flatten](crate::flatten) it into leaves first.
//!
//! ```
//! use lumen::prelude::*;
//!
//! let section = Section::new("Header", children![Text::new("Body")]);
//! let site = SiteConfig::default();
//! let html = lumen::render::render_page(&site, "/", &section);
//! assert_eq!(html, "<section><h2>Header</h2><p>Body</p></section>");
//! ```

use crate::action::{Action, Event};
use crate::attributes::{Attributes, InlineStyle};
use crate::elements::form::FormControl;
use crate::elements::text::Font;
use crate::markup::Markup;
use crate::modifier::{self, ModifiedElement, Modifier, RuleModifier};
use crate::render::{RenderContext, RenderError, fatal};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// What a leaf *is*, as far as context-sensitive containers care.
///
/// Containers pick their behavior from this, never from the concrete type,
/// so wrappers such as modified elements keep the capability of the element
/// they wrap.
#[derive(Debug, Clone, Copy)]
pub enum Capability<'a> {
    /// Nothing special: rendered as-is.
    Plain,
    /// A block of text, optionally carrying an explicit font.
    Text { font: Option<Font> },
    /// A hyperlink to `target`.
    Link { target: &'a str },
    Image,
    /// Inline running text.
    Span,
    Dropdown,
    Divider,
    /// Renders its own `<li>`; lists must not wrap it again.
    ListItem,
    /// An explicit grid row holding the given cells.
    GridRow { cells: &'a [AnyElement] },
}

/// A final adjustment a container asks of a leaf after choosing its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    CardTitle,
    CardText,
    NavbarText,
    /// Top-level entry of a navigation bar.
    NavbarItem,
    DropdownHeader,
    /// Addon text inside a control group.
    InputGroupText,
}

/// Object-safe helpers every element gets for free.
pub trait ElementBase {
    fn clone_element(&self) -> AnyElement;
    fn as_any(&self) -> &dyn Any;
}

impl<T> ElementBase for T
where
    T: Element + Clone + 'static,
{
    fn clone_element(&self) -> AnyElement {
        AnyElement(Box::new(self.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Anything that renders into markup.
pub trait Element: ElementBase + fmt::Debug {
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Whether this type serializes itself rather than delegating to a body.
    fn is_primitive(&self) -> bool;

    /// Inline elements get a `<span>` rather than a `<div>` when attributes
    /// have to be hosted by a synthesized wrapper.
    fn is_inline(&self) -> bool {
        false
    }

    /// The element this composite renders as.
    ///
    /// Primitives never have a body; reaching this on one is an internal
    /// invariant violation.
    fn body(&self, _cx: &mut RenderContext<'_>) -> AnyElement {
        fatal(RenderError::UnreachableBody {
            element: std::any::type_name::<Self>(),
        })
    }

    /// Serializes the element.
    ///
    /// Composites inherit delegation to their body, with their own
    /// attributes applied by [`modifier::render_composite`].
    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let body = self.body(cx);
        modifier::render_composite(body, self.attributes(), self.is_inline(), cx)
    }

    /// Children of a transparent container, flattened away by parents.
    fn subviews(&self) -> Option<Vec<AnyElement>> {
        None
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Plain
    }

    fn adapt(&mut self, _role: Role) {}

    /// Elements that know how to render inside a form return themselves here.
    fn form_control(&self) -> Option<&dyn FormControl> {
        None
    }

    /// Wrappers that only stand in for another element evaluate themselves
    /// and return it. Containers that need the concrete leaf go through
    /// [`Child::resolved`](crate::flatten::Child::resolved).
    fn resolve(&self, _cx: &mut RenderContext<'_>) -> Option<AnyElement> {
        None
    }

    /// The tag a primitive always opens with, when its own attributes land on
    /// that tag. Lets a composite merge into a `<div>` body without
    /// rendering it first.
    fn root_tag(&self) -> Option<&str> {
        None
    }
}

/// A type-erased, clonable element.
pub struct AnyElement(Box<dyn Element>);

impl AnyElement {
    pub fn new<E: Element>(element: E) -> Self {
        element.clone_element()
    }

    /// Looks through nested erasures for a concrete `T`.
    pub fn downcast_ref<T: Element + 'static>(&self) -> Option<&T> {
        let any = self.0.as_any();
        match any.downcast_ref::<AnyElement>() {
            Some(inner) => inner.downcast_ref::<T>(),
            None => any.downcast_ref::<T>(),
        }
    }
}

impl Clone for AnyElement {
    fn clone(&self) -> Self {
        self.0.clone_element()
    }
}

impl fmt::Debug for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl Element for AnyElement {
    fn attributes(&self) -> &Attributes {
        self.0.attributes()
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self.0.attributes_mut()
    }

    fn is_primitive(&self) -> bool {
        self.0.is_primitive()
    }

    fn is_inline(&self) -> bool {
        self.0.is_inline()
    }

    fn body(&self, cx: &mut RenderContext<'_>) -> AnyElement {
        self.0.body(cx)
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        self.0.markup(cx)
    }

    fn subviews(&self) -> Option<Vec<AnyElement>> {
        self.0.subviews()
    }

    fn capability(&self) -> Capability<'_> {
        self.0.capability()
    }

    fn adapt(&mut self, role: Role) {
        self.0.adapt(role)
    }

    fn form_control(&self) -> Option<&dyn FormControl> {
        self.0.form_control()
    }

    fn resolve(&self, cx: &mut RenderContext<'_>) -> Option<AnyElement> {
        self.0.resolve(cx)
    }

    fn root_tag(&self) -> Option<&str> {
        self.0.root_tag()
    }
}

/// Placement families. Each container declares which family its children
/// must belong to.
pub mod family {
    /// Marker for a placement family.
    pub trait Family: Copy + std::fmt::Debug + 'static {}

    macro_rules! families {
        ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
            $(
                $(#[$doc])*
                #[derive(Debug, Clone, Copy)]
                pub enum $name {}
                impl Family for $name {}
            )+
        };
    }

    families! {
        /// Page-level (block) content.
        Html,
        /// Running text.
        Inline,
        FormItems,
        ControlGroupItems,
        NavItems,
        DropdownItems,
        AccordionItems,
        CarouselItems,
        TableRows,
        ButtonGroupItems,
    }
}

pub use family::Family;

/// Declares that an element type may appear in family `F`.
pub trait Member<F: Family>: Element {}

impl<F: Family> Member<F> for AnyElement {}

/// Implements [`Member`] for a type across several families.
macro_rules! member_of {
    ($ty:ty: $($family:ident),+ $(,)?) => {
        $(impl $crate::element::Member<$crate::element::family::$family> for $ty {})+
    };
}
pub(crate) use member_of;

/// An ordered list of children, typed by the family they belong to.
pub struct Children<F: Family> {
    items: Vec<AnyElement>,
    family: PhantomData<fn() -> F>,
}

impl<F: Family> Children<F> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            family: PhantomData,
        }
    }

    pub fn push<E: Member<F>>(&mut self, element: E) {
        self.items.push(AnyElement::new(element));
    }

    /// Pushes the element when there is one; `None` contributes nothing.
    pub fn push_optional<E: Member<F>>(&mut self, element: Option<E>) {
        if let Some(element) = element {
            self.push(element);
        }
    }

    pub fn with<E: Member<F>>(mut self, element: E) -> Self {
        self.push(element);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The declared children, before flattening.
    pub fn elements(&self) -> &[AnyElement] {
        &self.items
    }
}

impl<F: Family> Default for Children<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Family> Clone for Children<F> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            family: PhantomData,
        }
    }
}

impl<F: Family> fmt::Debug for Children<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<F: Family, E: Member<F>> FromIterator<E> for Children<F> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut children = Children::new();
        for element in iter {
            children.push(element);
        }
        children
    }
}

/// Builds a [`Children`] list, checking each element's family membership.
///
/// ```
/// use lumen::prelude::*;
///
/// let items: Children<family::Html> = children![Text::new("a"), Text::new("b")];
/// assert_eq!(items.len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        $crate::element::Children::new()
    };
    ($($child:expr),+ $(,)?) => {{
        let mut children = $crate::element::Children::new();
        $( children.push($child); )+
        children
    }};
}

/// Attribute modifiers available on every element.
///
/// Each one consumes the element and returns it with the change applied,
/// so chaining never alters the element's type.
pub trait ElementExt: Element + Sized {
    fn class(mut self, class: impl Into<String>) -> Self {
        self.attributes_mut().append_class(class);
        self
    }

    fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_mut().append_classes(classes);
        self
    }

    fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().append_style(property, value);
        self
    }

    fn id(mut self, id: impl Into<String>) -> Self {
        self.attributes_mut().id = Some(id.into());
        self
    }

    fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().append_custom(name, value);
        self
    }

    fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().append_data(name, value);
        self
    }

    fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().append_aria(name, value);
        self
    }

    /// Runs `action` when `event` fires.
    fn on(mut self, event: Event, action: &dyn Action) -> Self {
        self.attributes_mut()
            .append_event(event.name(), vec![action.compile()]);
        self
    }

    fn on_click(self, action: &dyn Action) -> Self {
        self.on(Event::Click, action)
    }

    /// Hidden until an action shows it.
    fn hidden(self) -> Self {
        self.class("d-none")
    }

    /// Width in form or grid columns, as `col-md-N`.
    fn width(self, columns: u32) -> Self {
        self.class(format!("col-md-{columns}"))
    }

    /// Wraps the element in a modifier applied at render time.
    fn modifier<M: Modifier>(self, modifier: M) -> ModifiedElement<Self, M> {
        ModifiedElement::new(self, modifier)
    }

    /// Moves the declarations into a registered CSS rule and applies its class.
    fn rule<I>(self, declarations: I) -> ModifiedElement<Self, RuleModifier>
    where
        I: IntoIterator<Item = InlineStyle>,
    {
        self.modifier(RuleModifier::new(declarations))
    }
}

impl<E: Element + Sized> ElementExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Link, Text};

    #[test]
    fn children_preserve_declaration_order() {
        let items: Children<family::Html> =
            children![Text::new("a"), Text::new("b"), Text::new("c")];
        let debug = format!("{:?}", items);
        let a = debug.find("\"a\"").unwrap();
        let c = debug.find("\"c\"").unwrap();
        assert!(a < c);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn push_optional_skips_none() {
        let mut items: Children<family::Html> = Children::new();
        items.push_optional(None::<Text>);
        items.push_optional(Some(Text::new("x")));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn modifiers_keep_the_element_type() {
        let link: Link = Link::new("Home", "/").class("a").id("home").data("x", "1");
        assert_eq!(link.attributes().classes(), ["a"]);
        assert_eq!(link.attributes().id.as_deref(), Some("home"));
    }

    #[test]
    fn any_element_downcasts_through_erasure() {
        let erased = AnyElement::new(AnyElement::new(Text::new("x")));
        assert!(erased.downcast_ref::<Text>().is_some());
    }

    #[test]
    fn capability_survives_erasure() {
        let erased = AnyElement::new(Link::new("Home", "/home"));
        assert!(matches!(
            erased.capability(),
            Capability::Link { target: "/home" }
        ));
    }

    #[test]
    fn width_adds_column_class() {
        let text = Text::new("x").width(4);
        assert!(text.attributes().has_class("col-md-4"));
    }
}
