//! Tables built from rows of arbitrary elements.

use crate::attributes::Attributes;
use crate::element::{Children, Element, family, member_of};
use crate::flatten::flatten_children;
use crate::markup::{Markup, escape};
use crate::render::RenderContext;

#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Children<family::TableRows>,
    striped: bool,
    attributes: Attributes,
}

impl Table {
    pub fn new(rows: Children<family::TableRows>) -> Self {
        Self {
            header: Vec::new(),
            rows,
            striped: false,
            attributes: Attributes::default(),
        }
    }

    /// Column titles, rendered in a `<thead>`.
    pub fn header<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn striped(mut self) -> Self {
        self.striped = true;
        self
    }
}

impl Element for Table {
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
        let mut content = Markup::empty();
        if !self.header.is_empty() {
            let cells: Markup = self
                .header
                .iter()
                .map(|title| Markup::raw(format!("<th scope=\"col\">{}</th>", escape(title))))
                .collect();
            content.push(&Markup::raw(format!("<thead><tr>{cells}</tr></thead>")));
        }
        let rows: Markup = flatten_children(&self.rows)
            .iter()
            .map(|row| row.markup(cx))
            .collect();
        content.push(&Markup::element("tbody", &Attributes::new(), rows));

        let mut attributes = Attributes::from_classes(["table"]);
        if self.striped {
            attributes.append_class("table-striped");
        }
        Markup::element("table", &attributes.merged(&self.attributes), content)
    }
}

member_of!(Table: Html);

/// One table row; every flattened child becomes a cell.
#[derive(Debug, Clone)]
pub struct TableRow {
    cells: Children<family::Html>,
    attributes: Attributes,
}

impl TableRow {
    pub fn new(cells: Children<family::Html>) -> Self {
        Self {
            cells,
            attributes: Attributes::default(),
        }
    }
}

impl Element for TableRow {
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
        let cells: Markup = flatten_children(&self.cells)
            .into_iter()
            .map(|cell| Markup::element("td", &Attributes::new(), cell.markup(cx)))
            .collect();
        Markup::element("tr", &self.attributes, cells)
    }
}

member_of!(TableRow: TableRows);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::element::ElementExt;
    use crate::elements::{Group, Span};
    use crate::test_helpers::render_at;

    #[test]
    fn rows_and_cells_keep_declaration_order() {
        let table = Table::new(children![
            TableRow::new(children![Span::new("a"), Span::new("b")]),
            Group::for_each(["c", "d"], |v| TableRow::new(children![Span::new(v)])),
        ]);
        assert_eq!(
            render_at("/", &table),
            concat!(
                r#"<table class="table"><tbody>"#,
                "<tr><td><span>a</span></td><td><span>b</span></td></tr>",
                "<tr><td><span>c</span></td></tr>",
                "<tr><td><span>d</span></td></tr>",
                "</tbody></table>"
            )
        );
    }

    #[test]
    fn header_and_stripes() {
        let table = Table::new(children![])
            .header(["Name", "A&B"])
            .striped()
            .id("data");
        assert_eq!(
            render_at("/", &table),
            concat!(
                r#"<table id="data" class="table table-striped">"#,
                r#"<thead><tr><th scope="col">Name</th><th scope="col">A&amp;B</th></tr></thead>"#,
                "<tbody></tbody></table>"
            )
        );
    }

    #[test]
    fn group_attributes_reach_the_row() {
        let table = Table::new(children![
            Group::<family::TableRows>::new(children![TableRow::new(children![Span::new("x")])]).class("highlight"),
        ]);
        assert!(render_at("/", &table).contains(r#"<tr class="highlight"><td>"#));
    }
}
