//! Forms, text fields and control groups.
//!
//! A [`Form`] lays its items out in Bootstrap columns. Items that know how
//! to render as form controls implement [`FormControl`] and receive the
//! form's shared [`FormSettings`]; everything else renders as usual inside
//! its column.

use crate::attributes::Attributes;
use crate::element::{Children, Element, family, member_of};
use crate::flatten::flatten_children;
use crate::markup::Markup;
use crate::placement::{ControlGroupPlacement, FormPlacement, place_all};
use crate::render::RenderContext;
use maud::html;

/// An element that renders differently inside a form.
pub trait FormControl {
    /// Renders the control with the leaf's resolved `attributes`.
    fn form_markup(
        &self,
        attributes: &Attributes,
        settings: &FormSettings,
        cx: &mut RenderContext<'_>,
    ) -> Markup;
}

/// Where a control's label goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Inside the control, floating above the value once filled.
    #[default]
    Floating,
    /// Above the control.
    Top,
    /// Beside the control, in its own column.
    Leading,
    /// Present for screen readers only.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ControlSize {
    /// Bootstrap size suffix, `sm` or `lg`.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            ControlSize::Small => Some("sm"),
            ControlSize::Medium => None,
            ControlSize::Large => Some("lg"),
        }
    }
}

/// Settings a form shares with every control in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub label_style: LabelStyle,
    pub control_size: ControlSize,
    /// Bootstrap gutter size, 0-5.
    pub spacing: u8,
    /// Total columns item widths are expressed against.
    pub columns: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            label_style: LabelStyle::default(),
            control_size: ControlSize::default(),
            spacing: 3,
            columns: 12,
        }
    }
}

/// A form posting to `action`.
#[derive(Debug, Clone)]
pub struct Form {
    items: Children<family::FormItems>,
    action: Option<String>,
    label_style: LabelStyle,
    control_size: ControlSize,
    spacing: u8,
    columns: Option<u32>,
    attributes: Attributes,
}

impl Form {
    pub fn new(items: Children<family::FormItems>) -> Self {
        let defaults = FormSettings::default();
        Self {
            items,
            action: None,
            label_style: defaults.label_style,
            control_size: defaults.control_size,
            spacing: defaults.spacing,
            columns: None,
            attributes: Attributes::default(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn control_size(mut self, size: ControlSize) -> Self {
        self.control_size = size;
        self
    }

    pub fn spacing(mut self, spacing: u8) -> Self {
        self.spacing = spacing.min(5);
        self
    }

    /// Overrides the site's `layout.form_columns` for this form.
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    fn settings(&self, cx: &RenderContext<'_>) -> FormSettings {
        FormSettings {
            label_style: self.label_style,
            control_size: self.control_size,
            spacing: self.spacing,
            columns: self.columns.unwrap_or(cx.site().layout.form_columns),
        }
    }
}

impl Element for Form {
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
        let settings = self.settings(cx);
        let policy = FormPlacement { settings };
        let content = place_all(&policy, flatten_children(&self.items), cx);

        let mut attributes =
            Attributes::from_classes(["row".to_string(), format!("g-{}", settings.spacing)]);
        if let Some(action) = &self.action {
            attributes.append_custom("action", action);
            attributes.append_custom("method", "post");
        }
        Markup::element("form", &attributes.merged(&self.attributes), content)
    }
}

member_of!(Form: Html);

/// Lowercase, dash-separated identifier derived from a label.
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// A labeled text input.
#[derive(Debug, Clone)]
pub struct TextField {
    label: String,
    placeholder: Option<String>,
    name: Option<String>,
    kind: String,
    required: bool,
    attributes: Attributes,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: None,
            name: None,
            kind: "text".to_string(),
            required: false,
            attributes: Attributes::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The input `type`, e.g. `email` or `password`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn control_id(&self, attributes: &Attributes) -> String {
        attributes
            .id
            .clone()
            .unwrap_or_else(|| slug(self.name.as_deref().unwrap_or(&self.label)))
    }

    fn input(&self, attributes: &Attributes, size: ControlSize, floating: bool) -> Markup {
        let mut input = Attributes::from_classes(["form-control"]);
        if let Some(suffix) = size.suffix() {
            input.append_class(format!("form-control-{suffix}"));
        }
        input.id = Some(self.control_id(attributes));
        input.append_custom("type", &self.kind);
        if let Some(name) = &self.name {
            input.append_custom("name", name);
        }
        // Floating labels only float when the input has a placeholder.
        let placeholder = match (&self.placeholder, floating) {
            (Some(placeholder), _) => Some(placeholder.as_str()),
            (None, true) => Some(self.label.as_str()),
            (None, false) => None,
        };
        if let Some(placeholder) = placeholder {
            input.append_custom("placeholder", placeholder);
        }
        if self.required {
            input.append_custom("required", "required");
        }
        Markup::void("input", &input.merged(attributes))
    }
}

impl Element for TextField {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    /// Outside a form, just the input.
    fn markup(&self, _cx: &mut RenderContext<'_>) -> Markup {
        self.input(&self.attributes, ControlSize::Medium, false)
    }

    fn form_control(&self) -> Option<&dyn FormControl> {
        Some(self)
    }
}

impl FormControl for TextField {
    fn form_markup(
        &self,
        attributes: &Attributes,
        settings: &FormSettings,
        _cx: &mut RenderContext<'_>,
    ) -> Markup {
        let id = self.control_id(attributes);
        let floating = settings.label_style == LabelStyle::Floating;
        let input = self.input(attributes, settings.control_size, floating);
        let label = &self.label;
        let markup = match settings.label_style {
            LabelStyle::Floating => html! {
                div.form-floating {
                    (input)
                    label for=(id) { (label) }
                }
            },
            LabelStyle::Top => html! {
                label.form-label for=(id) { (label) }
                (input)
            },
            LabelStyle::Leading => html! {
                div.row {
                    label."col-sm-2".col-form-label for=(id) { (label) }
                    div."col-sm-10" { (input) }
                }
            },
            LabelStyle::Hidden => html! {
                label.visually-hidden for=(id) { (label) }
                (input)
            },
        };
        markup.into()
    }
}

member_of!(TextField: Html, FormItems, ControlGroupItems);

/// Controls joined into one input group, e.g. a field with a button.
#[derive(Debug, Clone)]
pub struct ControlGroup {
    label: Option<String>,
    items: Children<family::ControlGroupItems>,
    separator: Option<String>,
    attributes: Attributes,
}

impl ControlGroup {
    pub fn new(items: Children<family::ControlGroupItems>) -> Self {
        Self {
            label: None,
            items,
            separator: None,
            attributes: Attributes::default(),
        }
    }

    /// Label shown above the group inside a form.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Addon text placed between consecutive items.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    fn group(&self, attributes: &Attributes, size: ControlSize, cx: &mut RenderContext<'_>) -> Markup {
        let policy = ControlGroupPlacement {
            separator: self.separator.clone(),
        };
        let content = place_all(&policy, flatten_children(&self.items), cx);
        let mut group = Attributes::from_classes(["input-group"]);
        if let Some(suffix) = size.suffix() {
            group.append_class(format!("input-group-{suffix}"));
        }
        Markup::element("div", &group.merged(attributes), content)
    }
}

impl Element for ControlGroup {
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
        self.group(&self.attributes, ControlSize::Medium, cx)
    }

    fn form_control(&self) -> Option<&dyn FormControl> {
        Some(self)
    }
}

impl FormControl for ControlGroup {
    fn form_markup(
        &self,
        attributes: &Attributes,
        settings: &FormSettings,
        cx: &mut RenderContext<'_>,
    ) -> Markup {
        let group = self.group(attributes, settings.control_size, cx);
        match &self.label {
            Some(label) => {
                let label: Markup = html! { label.form-label { (label) } }.into();
                label + group
            }
            None => group,
        }
    }
}

member_of!(ControlGroup: Html, FormItems);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::InlineStyle;
    use crate::children;
    use crate::config::SiteConfig;
    use crate::element::{AnyElement, ElementExt};
    use crate::elements::{Button, Text};
    use crate::modifier::{ModifiedContent, ModifierFn};
    use crate::render::{Registries, render};
    use crate::test_helpers::{render_at, render_with};

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Email Address"), "email-address");
        assert_eq!(slug("  Your name?  "), "your-name");
    }

    #[test]
    fn text_field_outside_form_is_a_bare_input() {
        assert_eq!(
            render_at("/", &TextField::new("Email").kind("email").name("email")),
            r#"<input id="email" class="form-control" type="email" name="email">"#
        );
    }

    #[test]
    fn floating_label_form() {
        let form = Form::new(children![TextField::new("Name").width(6)]);
        assert_eq!(
            render_at("/", &form),
            concat!(
                r#"<form class="row g-3">"#,
                r#"<div class="col-md-6"><div class="form-floating">"#,
                r#"<input id="name" class="form-control" type="text" placeholder="Name">"#,
                r#"<label for="name">Name</label>"#,
                "</div></div></form>"
            )
        );
    }

    #[test]
    fn top_labels_and_large_controls() {
        let form = Form::new(children![TextField::new("City")])
            .label_style(LabelStyle::Top)
            .control_size(ControlSize::Large);
        let html = render_at("/", &form);
        assert!(html.contains(r#"<div class="col-auto"><label class="form-label" for="city">City</label>"#));
        assert!(html.contains(r#"class="form-control form-control-lg""#));
    }

    #[test]
    fn widths_rescale_against_form_columns() {
        let form = Form::new(children![
            TextField::new("First").width(2),
            TextField::new("Last").width(2),
            Button::new("Send").class("col"),
        ])
        .columns(4)
        .label_style(LabelStyle::Hidden);
        let html = render_at("/", &form);
        assert_eq!(html.matches(r#"<div class="col-md-6">"#).count(), 2);
        assert!(html.contains(r#"<div class="col"><button"#));
    }

    #[test]
    fn site_form_columns_apply_by_default() {
        let mut site = SiteConfig::default();
        site.layout.form_columns = 6;
        let mut registries = Registries::default();
        let form = Form::new(children![TextField::new("Zip").width(3)]);
        let html = render(
            &form,
            &mut RenderContext::new(&site, "/", &mut registries),
        );
        assert!(html.contains(r#"<div class="col-md-6">"#));
    }

    #[test]
    fn non_controls_render_normally_in_columns() {
        let form = Form::new(children![Text::new("Intro")]).action("/subscribe");
        assert_eq!(
            render_at("/", &form),
            r#"<form class="row g-3" action="/subscribe" method="post"><div class="col-auto"><p>Intro</p></div></form>"#
        );
    }

    #[test]
    fn control_group_joins_field_and_button() {
        let group = ControlGroup::new(children![
            TextField::new("Search").name("q"),
            Button::new("Go"),
        ]);
        assert_eq!(
            render_at("/", &group),
            concat!(
                r#"<div class="input-group">"#,
                r#"<input id="q" class="form-control" type="text" name="q">"#,
                r#"<button type="button" class="btn btn-primary">Go</button>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn control_group_in_form_gets_label_and_size() {
        let form = Form::new(children![
            ControlGroup::new(children![Text::new("@"), TextField::new("User")]).label("Handle")
        ])
        .control_size(ControlSize::Small);
        let html = render_at("/", &form);
        assert!(html.contains(
            r#"<label class="form-label">Handle</label><div class="input-group input-group-sm">"#
        ));
        assert!(html.contains(r#"<span class="input-group-text">@</span>"#));
    }

    fn red() -> [InlineStyle; 1] {
        [InlineStyle::new("color", "red")]
    }

    #[test]
    fn modified_field_in_form_keeps_its_rule() {
        let form = Form::new(children![TextField::new("Name").rule(red()).width(6)]);
        let (html, registries) = render_with(&SiteConfig::default(), "/", &form);
        let class = registries.styles.class_names().next().unwrap().to_string();
        assert!(html.contains(r#"<div class="col-md-6"><div class="form-floating">"#));
        assert!(html.contains(&format!(
            r#"<input id="name" class="form-control {class}" type="text" placeholder="Name">"#
        )));
    }

    #[test]
    fn modified_button_in_form_keeps_form_sizing() {
        let form = Form::new(children![Button::new("Send").rule(red())])
            .control_size(ControlSize::Large);
        let (html, registries) = render_with(&SiteConfig::default(), "/", &form);
        let class = registries.styles.class_names().next().unwrap().to_string();
        assert!(html.contains("btn-lg"));
        assert!(html.contains(&class));
    }

    #[test]
    fn modified_control_group_in_form_keeps_its_label() {
        let form = Form::new(children![
            ControlGroup::new(children![TextField::new("User")])
                .label("Handle")
                .modifier(ModifierFn(|content: ModifiedContent| {
                    AnyElement::new(content.class("grouped"))
                }))
        ]);
        let html = render_at("/", &form);
        assert!(html.contains(
            r#"<label class="form-label">Handle</label><div class="input-group grouped">"#
        ));
    }

    #[test]
    fn modified_items_inside_control_group_keep_their_rules() {
        let group = ControlGroup::new(children![
            Text::new("@").rule(red()),
            TextField::new("User").rule(red()),
        ]);
        let (html, registries) = render_with(&SiteConfig::default(), "/", &group);
        let class = registries.styles.class_names().next().unwrap().to_string();
        assert!(html.contains(&format!(r#"<span class="input-group-text {class}">@</span>"#)));
        assert!(html.contains(&format!(r#"class="form-control {class}""#)));
    }
}
