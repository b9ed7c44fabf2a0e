//! The element catalog.
//!
//! Every container family has at least one element here:
//!
//! | Family | Containers | Members |
//! |---|---|---|
//! | `Html` | [`Section`], [`Tag`], [`Grid`], [`List`], [`Card`] | everything block-level |
//! | `Inline` | [`Text`], [`Link`] | [`TextNode`], [`Span`], [`Strong`], [`Emphasis`], [`InlineCode`], [`Link`], [`Image`] |
//! | `NavItems` | [`NavigationBar`] | [`Link`], [`Dropdown`], [`Text`], [`Span`] |
//! | `DropdownItems` | [`Dropdown`] | [`Link`], [`Text`], [`Span`], [`Divider`] |
//! | `FormItems` | [`Form`] | [`TextField`], [`ControlGroup`], [`Button`], [`Text`] |
//! | `ControlGroupItems` | [`ControlGroup`] | [`TextField`], [`Button`], [`Text`], [`Span`] |
//! | `AccordionItems` | [`Accordion`] | [`AccordionItem`] |
//! | `CarouselItems` | [`Carousel`] | [`Slide`] |
//! | `TableRows` | [`Table`] | [`TableRow`] |
//! | `ButtonGroupItems` | [`ButtonGroup`] | [`Button`] |
//!
//! [`Group`] and [`EmptyElement`] belong to every family.

mod accordion;
mod button;
mod card;
mod carousel;
mod code;
mod content;
mod divider;
pub mod form;
mod grid;
mod inline;
mod navigation;
mod structure;
mod table;
mod tag;
pub mod text;

pub use accordion::{Accordion, AccordionItem, OpenMode};
pub use button::{Button, ButtonGroup, ButtonRole};
pub use card::Card;
pub use carousel::{Carousel, Slide};
pub use code::CodeBlock;
pub use content::Markdown;
pub use divider::Divider;
pub use form::{ControlGroup, ControlSize, Form, FormControl, FormSettings, LabelStyle, TextField};
pub use grid::{Grid, GridRow};
pub use inline::{Emphasis, Image, InlineCode, Link, Span, Strong};
pub use navigation::{Dropdown, NavigationBar};
pub use structure::{EmptyElement, Group, List, ListItem, Section};
pub use table::{Table, TableRow};
pub use tag::{Raw, Tag};
pub use text::{Font, Text, TextNode};

/// Bootstrap's script bundle, needed by collapsing and sliding elements.
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Bootstrap's stylesheet, linked from every published page.
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
