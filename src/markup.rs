//! The atomic unit of rendered output.
//!
//! Every element renders into a [`Markup`]: an immutable fragment of
//! already-serialized HTML. Fragments concatenate and join; the empty
//! fragment is the identity of both operations, so an element that renders
//! nothing never leaves a trace in its parent's output.
//!
//! Markup interoperates with [maud](https://maud.lambda.xyz/): a `maud::Markup`
//! converts into a [`Markup`], and a [`Markup`] can be spliced into an
//! `html!` template because it implements [`maud::Render`] without escaping.

use crate::attributes::Attributes;
use std::fmt;
use std::ops::Add;

/// A fragment of serialized HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// The empty fragment.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps text that is already valid HTML. No escaping happens here.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes `text` for use as HTML content or a quoted attribute value.
    pub fn escaped(text: &str) -> Self {
        Self(escape(text))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// `<name attrs>content</name>`.
    pub fn element(name: &str, attributes: &Attributes, content: Markup) -> Markup {
        Markup(format!(
            "<{name}{}>{}</{name}>",
            attributes.render(),
            content.0
        ))
    }

    /// A void element, `<name attrs>`.
    pub fn void(name: &str, attributes: &Attributes) -> Markup {
        Markup(format!("<{name}{}>", attributes.render()))
    }

    /// Appends another fragment in place.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Concatenates fragments, inserting `separator` between non-empty ones.
    pub fn join<I>(fragments: I, separator: &str) -> Markup
    where
        I: IntoIterator<Item = Markup>,
    {
        let mut out = String::new();
        for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.push_str(&fragment.0);
        }
        Markup(out)
    }
}

impl Add for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.0.push_str(&rhs.0);
        self
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::empty();
        for fragment in iter {
            out.push(&fragment);
        }
        out
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<maud::Markup> for Markup {
    fn from(markup: maud::Markup) -> Self {
        Markup(markup.into_string())
    }
}

impl maud::Render for Markup {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

/// HTML-escapes text using maud's escaping rules.
pub fn escape(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    maud::Render::render_to(text, &mut buffer);
    buffer
}
