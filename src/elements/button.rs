//! Buttons and button groups.

use crate::attributes::Attributes;
use crate::element::{Children, Element, family, member_of};
use crate::elements::form::{ControlSize, FormControl, FormSettings};
use crate::flatten::render_flat;
use crate::markup::{Markup, escape};
use crate::render::RenderContext;

/// Visual role of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl ButtonRole {
    fn class(self) -> &'static str {
        match self {
            ButtonRole::Primary => "btn-primary",
            ButtonRole::Secondary => "btn-secondary",
            ButtonRole::Success => "btn-success",
            ButtonRole::Danger => "btn-danger",
            ButtonRole::Warning => "btn-warning",
            ButtonRole::Info => "btn-info",
            ButtonRole::Light => "btn-light",
            ButtonRole::Dark => "btn-dark",
        }
    }
}

/// A `<button>`. Behavior comes from actions attached to its events, or
/// from submitting the form it sits in.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    role: ButtonRole,
    submit: bool,
    attributes: Attributes,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::default(),
            submit: false,
            attributes: Attributes::default(),
        }
    }

    pub fn role(mut self, role: ButtonRole) -> Self {
        self.role = role;
        self
    }

    /// Submits the enclosing form.
    pub fn submit(mut self) -> Self {
        self.submit = true;
        self
    }

    fn render_with(&self, attributes: &Attributes, size: ControlSize) -> Markup {
        let mut base = Attributes::from_classes(["btn", self.role.class()]);
        if let Some(suffix) = size.suffix() {
            base.append_class(format!("btn-{suffix}"));
        }
        let kind = if self.submit { "submit" } else { "button" };
        Markup::raw(format!(
            "<button type=\"{kind}\"{}>{}</button>",
            base.merged(attributes).render(),
            escape(&self.label)
        ))
    }
}

impl Element for Button {
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
        self.render_with(&self.attributes, ControlSize::Medium)
    }

    fn form_control(&self) -> Option<&dyn FormControl> {
        Some(self)
    }
}

impl FormControl for Button {
    fn form_markup(
        &self,
        attributes: &Attributes,
        settings: &FormSettings,
        _cx: &mut RenderContext<'_>,
    ) -> Markup {
        self.render_with(attributes, settings.control_size)
    }
}

member_of!(Button: Html, FormItems, ControlGroupItems, ButtonGroupItems);

/// Buttons joined into one segmented control.
#[derive(Debug, Clone)]
pub struct ButtonGroup {
    label: String,
    items: Children<family::ButtonGroupItems>,
    attributes: Attributes,
}

impl ButtonGroup {
    /// `label` describes the group to assistive technology.
    pub fn new(label: impl Into<String>, items: Children<family::ButtonGroupItems>) -> Self {
        Self {
            label: label.into(),
            items,
            attributes: Attributes::default(),
        }
    }
}

impl Element for ButtonGroup {
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
        let mut attributes = Attributes::from_classes(["btn-group"]);
        attributes.append_custom("role", "group");
        attributes.append_aria("label", &self.label);
        let content = render_flat(self.items.elements(), cx);
        Markup::element("div", &attributes.merged(&self.attributes), content)
    }
}

member_of!(ButtonGroup: Html);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{HideElement, ShowElement};
    use crate::children;
    use crate::element::ElementExt;
    use crate::elements::{Form, Group};
    use crate::test_helpers::render_at;

    #[test]
    fn default_button() {
        assert_eq!(
            render_at("/", &Button::new("Go")),
            r#"<button type="button" class="btn btn-primary">Go</button>"#
        );
    }

    #[test]
    fn submit_button_with_role() {
        let button = Button::new("Save").role(ButtonRole::Success).submit();
        assert_eq!(
            render_at("/", &button),
            r#"<button type="submit" class="btn btn-success">Save</button>"#
        );
    }

    #[test]
    fn click_actions_compile_into_onclick() {
        let button = Button::new("Toggle")
            .on_click(&ShowElement("panel".into()))
            .on_click(&HideElement("intro".into()));
        assert_eq!(
            render_at("/", &button),
            concat!(
                r#"<button type="button" class="btn btn-primary" onclick=""#,
                "document.getElementById('panel').classList.remove('d-none'); ",
                "document.getElementById('intro').classList.add('d-none')",
                r#"">Toggle</button>"#
            )
        );
    }

    #[test]
    fn form_size_applies_to_buttons() {
        let form = Form::new(children![Button::new("Send").submit()])
            .control_size(crate::elements::ControlSize::Large);
        assert!(render_at("/", &form).contains(r#"class="btn btn-primary btn-lg""#));
    }

    #[test]
    fn button_group_flattens_its_items() {
        let group = ButtonGroup::new(
            "Pager",
            children![
                Button::new("Prev"),
                Group::for_each(["1", "2"], |n| Button::new(n).role(ButtonRole::Light)),
            ],
        );
        let html = render_at("/", &group);
        assert!(html.starts_with(r#"<div class="btn-group" role="group" aria-label="Pager">"#));
        assert_eq!(html.matches("<button").count(), 3);
    }
}
