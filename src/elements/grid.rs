//! Grids of rows and cells.

use crate::attributes::Attributes;
use crate::element::{AnyElement, Capability, Children, Element, family, member_of};
use crate::flatten::{flatten, flatten_children};
use crate::markup::Markup;
use crate::placement::grid_rows;
use crate::render::RenderContext;

/// A responsive grid.
///
/// [`GridRow`] children lay out as rows of equal cells; any other child
/// takes a full-width row of its own.
#[derive(Debug, Clone)]
pub struct Grid {
    children: Children<family::Html>,
    columns: Option<usize>,
    attributes: Attributes,
}

impl Grid {
    pub fn new(children: Children<family::Html>) -> Self {
        Self {
            children,
            columns: None,
            attributes: Attributes::default(),
        }
    }

    /// Cells per row. Defaults to the widest row.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }
}

impl Element for Grid {
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
        let rows = grid_rows(flatten_children(&self.children), self.columns, cx);
        Markup::element("div", &self.attributes, rows)
    }
}

member_of!(Grid: Html);

/// One explicit grid row.
#[derive(Debug, Clone)]
pub struct GridRow {
    cells: Children<family::Html>,
    attributes: Attributes,
}

impl GridRow {
    pub fn new(cells: Children<family::Html>) -> Self {
        Self {
            cells,
            attributes: Attributes::default(),
        }
    }
}

impl Element for GridRow {
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

    /// Outside a grid a row lays out on its own.
    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let leaves = flatten(&[AnyElement::new(self.clone())]);
        grid_rows(leaves, None, cx)
    }

    fn capability(&self) -> Capability<'_> {
        Capability::GridRow {
            cells: self.cells.elements(),
        }
    }
}

member_of!(GridRow: Html);
