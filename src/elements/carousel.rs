//! Image carousels.

use crate::attributes::Attributes;
use crate::element::{Children, Element, family, member_of};
use crate::elements::BOOTSTRAP_JS;
use crate::flatten::{Child, flatten_children, render_flat};
use crate::markup::Markup;
use crate::render::RenderContext;
use crate::style::short_hash;
use maud::html;

/// Cycles through [`Slide`]s. The first slide starts active.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Children<family::CarouselItems>,
    attributes: Attributes,
}

impl Carousel {
    pub fn new(slides: Children<family::CarouselItems>) -> Self {
        Self {
            slides,
            attributes: Attributes::default(),
        }
    }
}

impl Element for Carousel {
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
        let leaves: Vec<Child> = flatten_children(&self.slides)
            .into_iter()
            .map(|leaf| leaf.resolved(cx))
            .collect();
        let slides: Vec<(&Slide, &Attributes)> = leaves
            .iter()
            .filter_map(|leaf| {
                leaf.element()
                    .downcast_ref::<Slide>()
                    .map(|slide| (slide, leaf.attributes()))
            })
            .collect();

        let id = match &self.attributes.id {
            Some(id) => id.clone(),
            None => {
                let sources: Vec<&str> = slides.iter().map(|(s, _)| s.source.as_str()).collect();
                format!("carousel-{}", short_hash(&sources.join("\n")))
            }
        };
        let target = format!("#{id}");

        let mut items = Markup::empty();
        for (index, (slide, attributes)) in slides.iter().enumerate() {
            let caption = render_flat(slide.caption.elements(), cx);
            let inner = html! {
                img.d-block."w-100" src=(slide.source) alt=(slide.description);
                @if !caption.is_empty() {
                    div.carousel-caption.d-none.d-md-block { (caption) }
                }
            };
            let mut classes = Attributes::from_classes(["carousel-item"]);
            if index == 0 {
                classes.append_class("active");
            }
            items.push(&Markup::element("div", &classes.merged(attributes), inner.into()));
        }

        let inner = html! {
            div.carousel-indicators {
                @for index in 0..slides.len() {
                    button.active[index == 0] type="button" data-bs-target=(target)
                        data-bs-slide-to=(index) aria-current=[(index == 0).then_some("true")]
                        aria-label=(format!("Slide {}", index + 1)) {}
                }
            }
            div.carousel-inner { (items) }
            button.carousel-control-prev type="button" data-bs-target=(target) data-bs-slide="prev" {
                span.carousel-control-prev-icon aria-hidden="true" {}
                span.visually-hidden { "Previous" }
            }
            button.carousel-control-next type="button" data-bs-target=(target) data-bs-slide="next" {
                span.carousel-control-next-icon aria-hidden="true" {}
                span.visually-hidden { "Next" }
            }
        };

        let mut attributes = Attributes::from_classes(["carousel", "slide"]).merged(&self.attributes);
        attributes.set_id_if_absent(id);
        Markup::element("div", &attributes, inner.into())
    }
}

member_of!(Carousel: Html);

/// One image of a [`Carousel`], with an optional caption.
#[derive(Debug, Clone)]
pub struct Slide {
    source: String,
    description: String,
    caption: Children<family::Html>,
    attributes: Attributes,
}

impl Slide {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            description: String::new(),
            caption: Children::new(),
            attributes: Attributes::default(),
        }
    }

    /// Alternative text for the image.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with(mut self, caption: Children<family::Html>) -> Self {
        self.caption = caption;
        self
    }
}

impl Element for Slide {
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
        let image = Attributes::from_classes(["d-block", "w-100"]).merged(&self.attributes);
        Markup::raw(format!(
            "<img src=\"{}\" alt=\"{}\"{}>",
            crate::markup::escape(&self.source),
            crate::markup::escape(&self.description),
            image.render()
        ))
    }
}

member_of!(Slide: CarouselItems);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::InlineStyle;
    use crate::children;
    use crate::config::SiteConfig;
    use crate::element::ElementExt;
    use crate::elements::Text;
    use crate::test_helpers::{render_at, render_with};

    fn carousel() -> Carousel {
        Carousel::new(children![
            Slide::new("/a.jpg").description("First"),
            Slide::new("/b.jpg").with(children![Text::new("Second caption")]),
        ])
    }

    #[test]
    fn first_slide_is_active() {
        let html = render_at("/", &carousel());
        assert_eq!(html.matches(r#"class="carousel-item active""#).count(), 1);
        assert_eq!(html.matches(r#"class="carousel-item""#).count(), 1);
        let first = html.find("/a.jpg").unwrap();
        let active = html.find("carousel-item active").unwrap();
        assert!(active < first);
    }

    #[test]
    fn id_derives_from_sources() {
        let html = render_at("/", &carousel());
        let id = format!("carousel-{}", short_hash("/a.jpg\n/b.jpg"));
        assert!(html.contains(&format!(r#"id="{id}""#)));
        assert!(html.contains(&format!(r##"data-bs-target="#{id}""##)));
    }

    #[test]
    fn captions_render_only_when_present() {
        let html = render_at("/", &carousel().id("gallery"));
        assert_eq!(html.matches("carousel-caption").count(), 1);
        assert!(html.contains("<p>Second caption</p>"));
    }

    #[test]
    fn one_indicator_per_slide() {
        let html = render_at("/", &carousel().id("gallery"));
        assert_eq!(html.matches("data-bs-slide-to=").count(), 2);
        assert!(html.contains(r#"aria-label="Slide 2""#));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn modified_slide_stays_in_the_carousel() {
        let carousel = Carousel::new(children![
            Slide::new("/a.jpg"),
            Slide::new("/b.jpg").rule([InlineStyle::new("opacity", "0.9")]),
        ])
        .id("gallery");
        let (html, registries) = render_with(&SiteConfig::default(), "/", &carousel);
        let class = registries.styles.class_names().next().unwrap().to_string();
        assert_eq!(html.matches("data-bs-slide-to=").count(), 2);
        assert!(html.contains(&format!(r#"<div class="carousel-item {class}"><img"#)));
        assert!(html.contains(r#"src="/b.jpg""#));
    }
}
