//! # Lumen
//!
//! Declarative, type-composed HTML generation. A page is a tree of small
//! typed values ("elements"); rendering walks the tree once and produces a
//! string of HTML. The crate also ships a static site publisher that feeds
//! markdown pages through that pipeline.
//!
//! # Architecture: Elements All the Way Down
//!
//! ```text
//! Section::new("Header", children![Text::new("Body")])
//!     │ body()            composites describe themselves as other elements
//!     ▼
//! Tag("section") ── flatten ── [Child(Text), …]   groups dissolve into leaves
//!     │ markup()          primitives serialize themselves
//!     ▼
//! <section><h2>Header</h2><p>Body</p></section>
//! ```
//!
//! Three rules carry the whole design:
//!
//! - **Primitive or composite.** An element either renders itself or renders
//!   as its body. Attributes set on a composite are hosted by its body when
//!   the body renders a `<div>`, and by a synthesized wrapper otherwise.
//! - **Flattening.** Groups, conditionals and loops are transparent: a
//!   container sees a flat list of leaves, each carrying the attributes of
//!   every group it passed through.
//! - **Placement.** Containers reinterpret their leaves: a `Text` in a card is
//!   a title, a `Link` in a navigation bar is a nav link marked active on the
//!   current page. They decide from the leaf's capability, never its type.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | Immutable HTML fragments: concatenation, joining, escaping |
//! | [`attributes`] | Classes, styles, id, custom/data/aria attributes, event handlers |
//! | [`action`] | Client-side actions compiled to inline JavaScript |
//! | [`element`] | The `Element` trait, container families, `children!`, attribute modifiers |
//! | [`modifier`] | Element-to-element transforms and the attribute hosting rule |
//! | [`flatten`] | The one traversal that dissolves groups into leaves |
//! | [`placement`] | Per-container leaf reconfiguration: card, list, navigation, form, grid |
//! | [`render`] | Render context, per-build registries, fatal errors |
//! | [`style`] | Style rule registry and site CSS |
//! | [`markdown`] | Markdown to HTML via pulldown-cmark |
//! | [`elements`] | The element catalog |
//! | [`config`] | `config.toml` loading, validation, merging, and theme CSS |
//! | [`scan`] | Discovers markdown pages in a content directory |
//! | [`publish`] | Renders pages into documents and writes the site |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Flatten, Many Families
//!
//! Every container accepts a [`Children<F>`](element::Children) typed by a
//! family marker. Membership is a trait impl, so a table refuses a
//! navigation link at compile time, while a single generic traversal serves
//! all families.
//!
//! ## Explicit Render Context
//!
//! Rendering state lives in a [`RenderContext`](render::RenderContext)
//! threaded through every call: the site config, the path being rendered,
//! and the registries (highlighter languages, scripts, fonts, style rules)
//! that accumulate over a build. Nothing is global, so independent builds
//! and tests never share state.
//!
//! ## Fail Loudly
//!
//! Rendering never returns partial HTML. Configuration mistakes that make a
//! page unrenderable, like a code block without a highlighter theme, abort
//! the build with a logged error.
//!
//! ## Maud for Documents
//!
//! Fixed page structure (document shell, navigation bar chrome) is written
//! with [Maud](https://maud.lambda.xyz/): compile-time checked and escaped by
//! default. Element output converts to and from Maud markup freely.

pub mod action;
pub mod attributes;
pub mod config;
pub mod element;
pub mod elements;
pub mod flatten;
pub mod markdown;
pub mod markup;
pub mod modifier;
pub mod output;
pub mod placement;
pub mod publish;
pub mod render;
pub mod scan;
pub mod style;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Everything needed to declare and render pages.
pub mod prelude {
    pub use crate::action::{
        Action, AddClass, CustomAction, Event, HideElement, RemoveClass, ShowElement,
        ToggleElement,
    };
    pub use crate::attributes::{Attributes, InlineStyle};
    pub use crate::children;
    pub use crate::config::SiteConfig;
    pub use crate::element::{AnyElement, Children, Element, ElementExt, Member, family};
    pub use crate::elements::*;
    pub use crate::markup::Markup;
    pub use crate::modifier::{ModifiedContent, Modifier, ModifierFn};
    pub use crate::render::{Registries, RenderContext, render, render_page};
}
