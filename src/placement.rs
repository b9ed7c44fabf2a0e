//! Context-sensitive placement of flattened leaves.
//!
//! The same leaf means different things depending on where it sits: a text
//! inside a card is the card's title, inside a list it needs an `<li>`,
//! inside a navigation bar it is navbar text. Containers flatten their
//! children and hand every leaf to a [`Placement`] policy that decides, from
//! the leaf's [`Capability`] alone, how it contributes to the container's
//! markup.
//!
//! Grids group leaves into rows instead of placing them one by one, see
//! [`grid_rows`].

use crate::attributes::Attributes;
use crate::element::{Capability, Element, Role};
use crate::elements::form::FormSettings;
use crate::elements::text::Font;
use crate::flatten::{Child, flatten};
use crate::markup::Markup;
use crate::render::RenderContext;

/// Where a leaf sits among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub count: usize,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

/// How a container turns one of its leaves into markup.
pub trait Placement {
    fn place(&self, leaf: Child, position: Position, cx: &mut RenderContext<'_>) -> Markup;
}

/// Places every leaf in order and concatenates the results.
pub fn place_all<P>(policy: &P, leaves: Vec<Child>, cx: &mut RenderContext<'_>) -> Markup
where
    P: Placement + ?Sized,
{
    let count = leaves.len();
    leaves
        .into_iter()
        .enumerate()
        .map(|(index, leaf)| policy.place(leaf, Position { index, count }, cx))
        .collect()
}

/// Leaf kinds the link-aware policies distinguish.
enum Kind {
    Link { active: bool },
    Text,
    Dropdown,
    Divider,
    Other,
}

fn classify(leaf: &Child, cx: &RenderContext<'_>) -> Kind {
    match leaf.capability() {
        Capability::Link { target } => Kind::Link {
            active: cx.is_current(target),
        },
        Capability::Text { .. } | Capability::Span => Kind::Text,
        Capability::Dropdown => Kind::Dropdown,
        Capability::Divider => Kind::Divider,
        _ => Kind::Other,
    }
}

fn mark_active(attributes: &mut Attributes) {
    attributes.append_class("active");
    attributes.append_aria("current", "page");
}

fn li(classes: &[&str], content: Markup) -> Markup {
    Markup::element("li", &Attributes::from_classes(classes.iter().copied()), content)
}

/// Card bodies: text becomes a title or body text, links and images get
/// their card classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardPlacement;

impl Placement for CardPlacement {
    fn place(&self, mut leaf: Child, _position: Position, cx: &mut RenderContext<'_>) -> Markup {
        let adjustment = match leaf.capability() {
            Capability::Text {
                font: Some(Font::Body | Font::Lead),
            } => Some((Some(Role::CardText), "card-text")),
            Capability::Text { .. } => Some((Some(Role::CardTitle), "card-title")),
            Capability::Link { .. } => Some((None, "card-link")),
            Capability::Image => Some((None, "card-img")),
            _ => None,
        };
        if let Some((role, class)) = adjustment {
            if let Some(role) = role {
                leaf.adapt(role);
            }
            leaf.attributes_mut().append_class(class);
        }
        leaf.markup(cx)
    }
}

/// Lists: every leaf gets its own `<li>` unless it already renders one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPlacement;

impl Placement for ListPlacement {
    fn place(&self, leaf: Child, _position: Position, cx: &mut RenderContext<'_>) -> Markup {
        match leaf.capability() {
            Capability::ListItem => leaf.markup(cx),
            _ => li(&[], leaf.markup(cx)),
        }
    }
}

/// Whether a navigation bar renders `leaf` as navbar text, outside its
/// list of links.
pub fn is_navbar_text(leaf: &Child) -> bool {
    matches!(
        leaf.capability(),
        Capability::Text { .. } | Capability::Span
    )
}

/// Navigation bars: links become `nav-link` items marked active on their
/// own page, dropdowns become dropdown items, text becomes navbar text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationPlacement;

impl Placement for NavigationPlacement {
    fn place(&self, mut leaf: Child, _position: Position, cx: &mut RenderContext<'_>) -> Markup {
        match classify(&leaf, cx) {
            Kind::Link { active } => {
                leaf.attributes_mut().append_class("nav-link");
                if active {
                    mark_active(leaf.attributes_mut());
                }
                li(&["nav-item"], leaf.markup(cx))
            }
            Kind::Dropdown => {
                leaf.adapt(Role::NavbarItem);
                li(&["nav-item", "dropdown"], leaf.markup(cx))
            }
            Kind::Text => {
                leaf.adapt(Role::NavbarText);
                leaf.attributes_mut().append_class("navbar-text");
                leaf.markup(cx)
            }
            Kind::Divider | Kind::Other => li(&["nav-item"], leaf.markup(cx)),
        }
    }
}

/// Dropdown menus: links become `dropdown-item`s, text becomes a header,
/// dividers become menu dividers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownPlacement;

impl Placement for DropdownPlacement {
    fn place(&self, mut leaf: Child, _position: Position, cx: &mut RenderContext<'_>) -> Markup {
        match classify(&leaf, cx) {
            Kind::Link { active } => {
                leaf.attributes_mut().append_class("dropdown-item");
                if active {
                    mark_active(leaf.attributes_mut());
                }
            }
            Kind::Text => {
                leaf.adapt(Role::DropdownHeader);
                leaf.attributes_mut().append_class("dropdown-header");
            }
            Kind::Divider => leaf.attributes_mut().append_class("dropdown-divider"),
            Kind::Dropdown | Kind::Other => {}
        }
        li(&[], leaf.markup(cx))
    }
}

/// Forms: every leaf sits in a column sized from its width class; form
/// controls render themselves with the form's shared settings. Modifiers
/// run first, so what they add reaches the control.
#[derive(Debug, Clone)]
pub struct FormPlacement {
    pub settings: FormSettings,
}

impl Placement for FormPlacement {
    fn place(&self, leaf: Child, _position: Position, cx: &mut RenderContext<'_>) -> Markup {
        let mut leaf = leaf.resolved(cx);
        let column = column_class(leaf.attributes_mut(), self.settings.columns);
        let content = match leaf.form_control() {
            Some(control) => control.form_markup(leaf.attributes(), &self.settings, cx),
            None => leaf.markup(cx),
        };
        Markup::element("div", &Attributes::from_classes([column]), content)
    }
}

/// Moves a leaf's width class onto its form column.
///
/// `col-md-N` is rescaled from the form's `columns` to Bootstrap's twelve,
/// a bare `col` stays `col`, anything else sizes to its content.
pub fn column_class(attributes: &mut Attributes, columns: u32) -> String {
    let width = attributes.classes().iter().find_map(|class| {
        class
            .strip_prefix("col-md-")
            .and_then(|n| n.parse::<u32>().ok())
    });
    if let Some(width) = width {
        attributes.remove_class(&format!("col-md-{width}"));
        let scaled = (u64::from(width) * 12 / u64::from(columns.max(1))).clamp(1, 12);
        return format!("col-md-{scaled}");
    }
    if attributes.has_class("col") {
        attributes.remove_class("col");
        return "col".to_string();
    }
    "col-auto".to_string()
}

/// Control groups: controls render bare inside one input group, text
/// becomes addon text, and the separator goes between items only.
#[derive(Debug, Clone, Default)]
pub struct ControlGroupPlacement {
    pub separator: Option<String>,
}

impl Placement for ControlGroupPlacement {
    fn place(&self, mut leaf: Child, position: Position, cx: &mut RenderContext<'_>) -> Markup {
        if matches!(
            leaf.capability(),
            Capability::Text { .. } | Capability::Span
        ) {
            leaf.adapt(Role::InputGroupText);
            leaf.attributes_mut().append_class("input-group-text");
        }
        let mut markup = leaf.markup(cx);
        if let Some(separator) = &self.separator {
            if !position.is_last() {
                markup.push(&Markup::element(
                    "span",
                    &Attributes::from_classes(["input-group-text"]),
                    Markup::escaped(separator),
                ));
            }
        }
        markup
    }
}

/// One grid row before rendering.
enum Row {
    /// An explicit row and the attributes it was declared with.
    Cells(Vec<Child>, Attributes),
    /// A loose leaf spanning the whole row.
    Full(Child),
}

/// Lays grid leaves out in rows.
///
/// Explicit rows become one Bootstrap row each, padded on the right with
/// empty `col` cells up to `columns` (or, when undeclared, the widest
/// row). Every other leaf gets a full-width row of its own and is never
/// padded. Modified rows are resolved first so their modifiers still apply.
pub fn grid_rows(leaves: Vec<Child>, columns: Option<usize>, cx: &mut RenderContext<'_>) -> Markup {
    let rows: Vec<Row> = leaves
        .into_iter()
        .map(|leaf| {
            let leaf = match leaf.capability() {
                Capability::GridRow { .. } => leaf.resolved(cx),
                _ => leaf,
            };
            let cells = match leaf.capability() {
                Capability::GridRow { cells } => Some(flatten(cells)),
                _ => None,
            };
            match cells {
                Some(cells) => Row::Cells(cells, leaf.attributes().clone()),
                None => Row::Full(leaf),
            }
        })
        .collect();

    let widest = rows
        .iter()
        .map(|row| match row {
            Row::Cells(cells, _) => cells.len(),
            Row::Full(_) => 0,
        })
        .max()
        .unwrap_or(0);
    let columns = columns.unwrap_or(widest).max(1);
    tracing::trace!(rows = rows.len(), columns, "laying out grid");

    rows.into_iter()
        .map(|row| match row {
            Row::Cells(cells, attributes) => {
                let row_attributes = Attributes::from_classes([
                    "row".to_string(),
                    "row-cols-1".to_string(),
                    format!("row-cols-md-{columns}"),
                    "g-3".to_string(),
                ])
                .merged(&attributes);
                let padding = columns.saturating_sub(cells.len());
                let col = Attributes::from_classes(["col"]);
                let mut content: Markup = cells
                    .iter()
                    .map(|cell| Markup::element("div", &col, cell.markup(cx)))
                    .collect();
                for _ in 0..padding {
                    content.push(&Markup::element("div", &col, Markup::empty()));
                }
                Markup::element("div", &row_attributes, content)
            }
            Row::Full(leaf) => {
                let cell = Markup::element(
                    "div",
                    &Attributes::from_classes(["col-12"]),
                    leaf.markup(cx),
                );
                Markup::element("div", &Attributes::from_classes(["row", "g-3"]), cell)
            }
        })
        .collect()
}
