//! Collapsible accordion panels.

use crate::attributes::Attributes;
use crate::element::{Children, Element, family, member_of};
use crate::elements::BOOTSTRAP_JS;
use crate::flatten::{Child, flatten_children, render_flat};
use crate::markup::Markup;
use crate::render::RenderContext;
use crate::style::short_hash;
use maud::html;

/// Whether opening one panel closes the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// At most one panel is open at a time.
    #[default]
    Individual,
    /// Panels open and close independently.
    All,
}

/// A stack of collapsible [`AccordionItem`]s.
///
/// Without an explicit id, the accordion derives one from its item titles,
/// so the same content always gets the same id.
#[derive(Debug, Clone)]
pub struct Accordion {
    items: Children<family::AccordionItems>,
    open_mode: OpenMode,
    attributes: Attributes,
}

impl Accordion {
    pub fn new(items: Children<family::AccordionItems>) -> Self {
        Self {
            items,
            open_mode: OpenMode::default(),
            attributes: Attributes::default(),
        }
    }

    pub fn open_mode(mut self, mode: OpenMode) -> Self {
        self.open_mode = mode;
        self
    }
}

impl Element for Accordion {
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
        cx.register_js(BOOTSTRAP_JS);
        let leaves: Vec<Child> = flatten_children(&self.items)
            .into_iter()
            .map(|leaf| leaf.resolved(cx))
            .collect();

        let id = match &self.attributes.id {
            Some(id) => id.clone(),
            None => {
                let titles: Vec<&str> = leaves
                    .iter()
                    .filter_map(|leaf| leaf.element().downcast_ref::<AccordionItem>())
                    .map(|item| item.title.as_str())
                    .collect();
                format!("accordion-{}", short_hash(&titles.join("\n")))
            }
        };
        let parent = (self.open_mode == OpenMode::Individual).then(|| format!("#{id}"));

        let mut panels = Markup::empty();
        for (index, leaf) in leaves.iter().enumerate() {
            let Some(item) = leaf.element().downcast_ref::<AccordionItem>() else {
                panels.push(&leaf.markup(cx));
                continue;
            };
            let panel_id = format!("{id}-{index}");
            let content = render_flat(item.content.elements(), cx);
            let inner = html! {
                h2.accordion-header {
                    button.accordion-button.collapsed[!item.open] type="button"
                        data-bs-toggle="collapse" data-bs-target=(format!("#{panel_id}"))
                        aria-expanded=(item.open) aria-controls=(panel_id) {
                        (item.title)
                    }
                }
                div.accordion-collapse.collapse.show[item.open] id=(panel_id)
                    data-bs-parent=[parent.as_deref()] {
                    div.accordion-body { (content) }
                }
            };
            let attributes = Attributes::from_classes(["accordion-item"]).merged(leaf.attributes());
            panels.push(&Markup::element("div", &attributes, inner.into()));
        }

        let mut attributes = Attributes::from_classes(["accordion"]).merged(&self.attributes);
        attributes.set_id_if_absent(id);
        Markup::element("div", &attributes, panels)
    }
}

member_of!(Accordion: Html);

/// One titled panel of an [`Accordion`].
#[derive(Debug, Clone)]
pub struct AccordionItem {
    title: String,
    content: Children<family::Html>,
    open: bool,
    attributes: Attributes,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: Children<family::Html>) -> Self {
        Self {
            title: title.into(),
            content,
            open: false,
            attributes: Attributes::default(),
        }
    }

    /// Expanded on page load.
    pub fn start_open(mut self) -> Self {
        self.open = true;
        self
    }
}

impl Element for AccordionItem {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    /// Outside an accordion only the content shows.
    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        let content = render_flat(self.content.elements(), cx);
        if self.attributes.is_empty() {
            content
        } else {
            Markup::element("div", &self.attributes, content)
        }
    }
}

member_of!(AccordionItem: AccordionItems);
