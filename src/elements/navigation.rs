//! Navigation bars and dropdown menus.

use crate::attributes::Attributes;
use crate::element::{Capability, Children, Element, Role, family, member_of};
use crate::elements::BOOTSTRAP_JS;
use crate::flatten::flatten_children;
use crate::markup::{Markup, escape};
use crate::placement::{DropdownPlacement, NavigationPlacement, is_navbar_text, place_all};
use crate::render::RenderContext;
use maud::html;

/// A collapsible site navigation bar.
///
/// Links are marked active on the page they point to. Text items render
/// after the link list, still inside the collapsible region.
#[derive(Debug, Clone)]
pub struct NavigationBar {
    brand: Option<(String, String)>,
    items: Children<family::NavItems>,
    attributes: Attributes,
}

impl NavigationBar {
    pub fn new(items: Children<family::NavItems>) -> Self {
        Self {
            brand: None,
            items,
            attributes: Attributes::default(),
        }
    }

    /// Brand link at the start of the bar.
    pub fn brand(mut self, title: impl Into<String>, target: impl Into<String>) -> Self {
        self.brand = Some((title.into(), target.into()));
        self
    }
}

impl Element for NavigationBar {
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
        cx.register_js(BOOTSTRAP_JS);
        let (texts, items): (Vec<_>, Vec<_>) = flatten_children(&self.items)
            .into_iter()
            .partition(is_navbar_text);
        let items = place_all(&NavigationPlacement, items, cx);
        let texts = place_all(&NavigationPlacement, texts, cx);

        let collapse = format!(
            "{}-collapse",
            self.attributes.id.as_deref().unwrap_or("navbar")
        );
        let inner = html! {
            div.container-fluid {
                @if let Some((title, target)) = &self.brand {
                    a.navbar-brand href=(target) { (title) }
                }
                button.navbar-toggler type="button" data-bs-toggle="collapse"
                    data-bs-target=(format!("#{collapse}")) aria-controls=(collapse)
                    aria-expanded="false" aria-label="Toggle navigation" {
                    span.navbar-toggler-icon {}
                }
                div.collapse.navbar-collapse id=(collapse) {
                    ul.navbar-nav.me-auto { (items) }
                    (texts)
                }
            }
        };
        let attributes =
            Attributes::from_classes(["navbar", "navbar-expand-md"]).merged(&self.attributes);
        Markup::element("nav", &attributes, inner.into())
    }
}

member_of!(NavigationBar: Html);

/// A menu opened from a toggle button, or from a nav link inside a
/// navigation bar.
#[derive(Debug, Clone)]
pub struct Dropdown {
    title: String,
    items: Children<family::DropdownItems>,
    in_navbar: bool,
    attributes: Attributes,
}

impl Dropdown {
    pub fn new(title: impl Into<String>, items: Children<family::DropdownItems>) -> Self {
        Self {
            title: title.into(),
            items,
            in_navbar: false,
            attributes: Attributes::default(),
        }
    }
}

impl Element for Dropdown {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_primitive(&self) -> bool {
        true
    }

    /// Inside a navigation bar the toggle link comes first.
    fn root_tag(&self) -> Option<&str> {
        (!self.in_navbar).then_some("div")
    }

    fn markup(&self, cx: &mut RenderContext<'_>) -> Markup {
        cx.register_js(BOOTSTRAP_JS);
        let menu = place_all(&DropdownPlacement, flatten_children(&self.items), cx);
        let menu = Markup::element("ul", &Attributes::from_classes(["dropdown-menu"]), menu);
        let title = escape(&self.title);

        if self.in_navbar {
            let attributes = Attributes::from_classes(["nav-link", "dropdown-toggle"])
                .merged(&self.attributes);
            return Markup::raw(format!(
                r##"<a href="#"{} role="button" data-bs-toggle="dropdown" aria-expanded="false">{title}</a>{menu}"##,
                attributes.render()
            ));
        }

        let toggle = Markup::raw(format!(
            r#"<button class="btn btn-secondary dropdown-toggle" type="button" data-bs-toggle="dropdown" aria-expanded="false">{title}</button>"#
        ));
        let attributes = Attributes::from_classes(["dropdown"]).merged(&self.attributes);
        Markup::element("div", &attributes, toggle + menu)
    }

    fn capability(&self) -> Capability<'_> {
        Capability::Dropdown
    }

    fn adapt(&mut self, role: Role) {
        if role == Role::NavbarItem {
            self.in_navbar = true;
        }
    }
}

member_of!(Dropdown: Html, NavItems);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::config::SiteConfig;
    use crate::element::ElementExt;
    use crate::elements::{Divider, Link, Span, Text};
    use crate::render::{Registries, render};
    use crate::test_helpers::render_at;

    fn bar() -> NavigationBar {
        NavigationBar::new(children![
            Link::new("About", "/about"),
            Link::new("Contact", "/contact"),
            Span::new("Signed in"),
        ])
        .brand("Lumen", "/")
    }

    #[test]
    fn current_page_link_is_active() {
        let html = render_at("/about", &bar());
        assert!(html.contains(
            r#"<a href="/about" class="nav-link active" aria-current="page">About</a>"#
        ));
        assert!(html.contains(r#"<a href="/contact" class="nav-link">Contact</a>"#));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn trailing_slash_is_a_different_page() {
        let html = render_at("/about/", &bar());
        assert!(!html.contains("active"));
    }

    #[test]
    fn text_renders_after_the_link_list() {
        let html = render_at("/", &bar());
        let list_end = html.find("</ul>").unwrap();
        let text = html.find(r#"<span class="navbar-text">Signed in</span>"#).unwrap();
        assert!(text > list_end);
    }

    #[test]
    fn bar_structure() {
        let html = render_at("/", &NavigationBar::new(children![]).id("main-nav"));
        assert!(html.starts_with(r#"<nav id="main-nav" class="navbar navbar-expand-md">"#));
        assert!(html.contains(r#"id="main-nav-collapse""#));
        assert!(html.contains(r##"data-bs-target="#main-nav-collapse""##));
        assert!(html.contains(r#"<ul class="navbar-nav me-auto"></ul>"#));
    }

    #[test]
    fn dropdown_inside_navbar_uses_nav_link_toggle() {
        let nav = NavigationBar::new(children![Dropdown::new(
            "More",
            children![Link::new("Team", "/team")]
        )]);
        let html = render_at("/team", &nav);
        assert!(html.contains(r##"<li class="nav-item dropdown"><a href="#" class="nav-link dropdown-toggle""##));
        assert!(html.contains(
            r#"<li><a href="/team" class="dropdown-item active" aria-current="page">Team</a></li>"#
        ));
    }

    #[test]
    fn standalone_dropdown_uses_button_toggle() {
        let dropdown = Dropdown::new(
            "Menu",
            children![Text::new("Pages"), Divider::new(), Link::new("Home", "/")],
        );
        assert_eq!(
            render_at("/elsewhere", &dropdown),
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="btn btn-secondary dropdown-toggle" type="button" data-bs-toggle="dropdown" aria-expanded="false">Menu</button>"#,
                r#"<ul class="dropdown-menu">"#,
                r#"<li><h6 class="dropdown-header">Pages</h6></li>"#,
                r#"<li><hr class="dropdown-divider"></li>"#,
                r#"<li><a href="/" class="dropdown-item">Home</a></li>"#,
                "</ul></div>"
            )
        );
    }

    #[test]
    fn navigation_registers_bootstrap_script() {
        let site = SiteConfig::default();
        let mut registries = Registries::default();
        render(
            &bar(),
            &mut crate::render::RenderContext::new(&site, "/", &mut registries),
        );
        assert!(registries.js_resources.contains(BOOTSTRAP_JS));
    }
}
