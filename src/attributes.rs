//! Per-element attribute storage.
//!
//! Every element owns one [`Attributes`] value holding its classes, inline
//! styles, id, custom/`data-*`/`aria-*` attributes and event bindings. All
//! collections are ordered-unique: the first insertion of a key wins and
//! fixes its position, later duplicates are dropped. Merging is a union, never
//! a replacement, so attributes only accumulate during a render pass.

use crate::markup::escape;
use std::fmt::Write as _;

/// One inline style declaration, e.g. `margin-top: 1rem`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineStyle {
    pub property: String,
    pub value: String,
}

impl InlineStyle {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// CSS declaration text without a trailing semicolon.
    pub fn declaration(&self) -> String {
        format!("{}: {}", self.property, self.value)
    }
}

/// A name/value attribute. The name is stored without any `data-`/`aria-` prefix
/// when it lives in the data or aria collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An event binding: the DOM event name (without the `on` prefix) and the
/// compiled JavaScript of every action attached to it, in attachment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub name: String,
    pub actions: Vec<String>,
}

/// The attribute store carried by every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    classes: Vec<String>,
    styles: Vec<InlineStyle>,
    custom: Vec<Attribute>,
    data: Vec<Attribute>,
    aria: Vec<Attribute>,
    events: Vec<EventBinding>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding only `classes`, typically an element's base classes
    /// that author attributes are then merged after.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut attributes = Self::default();
        attributes.append_classes(classes);
        attributes
    }

    /// True when no collection holds anything and no id is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.classes.is_empty()
            && self.styles.is_empty()
            && self.custom.is_empty()
            && self.data.is_empty()
            && self.aria.is_empty()
            && self.events.is_empty()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn styles(&self) -> &[InlineStyle] {
        &self.styles
    }

    pub fn custom(&self) -> &[Attribute] {
        &self.custom
    }

    pub fn data(&self) -> &[Attribute] {
        &self.data
    }

    pub fn aria(&self) -> &[Attribute] {
        &self.aria
    }

    pub fn events(&self) -> &[EventBinding] {
        &self.events
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds classes, skipping blanks and ones already present.
    pub fn append_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            let class = class.into();
            if !class.is_empty() && !self.has_class(&class) {
                self.classes.push(class);
            }
        }
    }

    pub fn append_class(&mut self, class: impl Into<String>) {
        self.append_classes([class]);
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds styles. A property already declared keeps its first value.
    pub fn append_styles<I>(&mut self, styles: I)
    where
        I: IntoIterator<Item = InlineStyle>,
    {
        for style in styles {
            if !self.styles.iter().any(|s| s.property == style.property) {
                self.styles.push(style);
            }
        }
    }

    pub fn append_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.append_styles([InlineStyle::new(property, value)]);
    }

    /// Sets the id unless one is already present.
    pub fn set_id_if_absent(&mut self, id: impl Into<String>) {
        if self.id.is_none() {
            self.id = Some(id.into());
        }
    }

    pub fn append_custom(&mut self, name: impl Into<String>, value: impl Into<String>) {
        insert_unique(&mut self.custom, Attribute::new(name, value));
    }

    pub fn append_data(&mut self, name: impl Into<String>, value: impl Into<String>) {
        insert_unique(&mut self.data, Attribute::new(name, value));
    }

    pub fn append_aria(&mut self, name: impl Into<String>, value: impl Into<String>) {
        insert_unique(&mut self.aria, Attribute::new(name, value));
    }

    /// Attaches compiled actions to an event, after any already attached.
    pub fn append_event(&mut self, name: impl Into<String>, actions: Vec<String>) {
        let name = name.into();
        let index = match self.events.iter().position(|e| e.name == name) {
            Some(index) => index,
            None => {
                self.events.push(EventBinding {
                    name,
                    actions: Vec::new(),
                });
                self.events.len() - 1
            }
        };
        let binding = &mut self.events[index];
        for action in actions {
            if !binding.actions.contains(&action) {
                binding.actions.push(action);
            }
        }
    }

    /// Unions `other` into `self`, preserving first-seen order.
    ///
    /// Merging a set into itself, or merging an empty set, is a no-op.
    pub fn merge(&mut self, other: &Attributes) {
        if let Some(id) = &other.id {
            self.set_id_if_absent(id.clone());
        }
        self.append_classes(other.classes.iter().cloned());
        self.append_styles(other.styles.iter().cloned());
        for attribute in &other.custom {
            insert_unique(&mut self.custom, attribute.clone());
        }
        for attribute in &other.data {
            insert_unique(&mut self.data, attribute.clone());
        }
        for attribute in &other.aria {
            insert_unique(&mut self.aria, attribute.clone());
        }
        for event in &other.events {
            self.append_event(event.name.clone(), event.actions.clone());
        }
    }

    /// Like [`merge`](Self::merge) but consuming both sides.
    pub fn merged(mut self, other: &Attributes) -> Self {
        self.merge(other);
        self
    }

    /// Serializes as a run of ` name="value"` pairs, each with a leading space.
    ///
    /// Order: id, class, style, custom, `data-*`, `aria-*`, events.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            push_pair(&mut out, "id", id);
        }
        if !self.classes.is_empty() {
            push_pair(&mut out, "class", &self.classes.join(" "));
        }
        if !self.styles.is_empty() {
            let declarations: Vec<String> = self.styles.iter().map(|s| s.declaration()).collect();
            push_pair(&mut out, "style", &declarations.join("; "));
        }
        for attribute in &self.custom {
            push_pair(&mut out, &attribute.name, &attribute.value);
        }
        for attribute in &self.data {
            push_pair(&mut out, &format!("data-{}", attribute.name), &attribute.value);
        }
        for attribute in &self.aria {
            push_pair(&mut out, &format!("aria-{}", attribute.name), &attribute.value);
        }
        for event in &self.events {
            push_pair(&mut out, &format!("on{}", event.name), &event.actions.join("; "));
        }
        out
    }
}

fn insert_unique(list: &mut Vec<Attribute>, attribute: Attribute) {
    if !list.iter().any(|a| a.name == attribute.name) {
        list.push(attribute);
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape(value));
}
