use crate::attributes::Attributes;
use crate::element::{Element, member_of};
use crate::markup::Markup;
use crate::render::RenderContext;

/// A block of highlighted source code.
///
/// Rendering one requires the site to configure at least one highlighter
/// theme; without it the build aborts. A block without a language uses the
/// site's default language, if any.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    code: String,
    language: Option<String>,
    attributes: Attributes,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
            attributes: Attributes::default(),
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl Element for CodeBlock {
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
        let code_attributes = match cx.highlight_language(self.language.as_deref()) {
            Some(language) => Attributes::from_classes([format!("language-{language}")]),
            None => Attributes::new(),
        };
        let code = Markup::element("code", &code_attributes, Markup::escaped(&self.code));
        Markup::element("pre", &self.attributes, code)
    }
}

member_of!(CodeBlock: Html);
