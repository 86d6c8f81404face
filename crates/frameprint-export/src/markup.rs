//! Recursive element serializer.
//!
//! Classes are allocated in pre-order, so a parent's ordinal is always lower
//! than its descendants'. Hidden elements produce nothing and consume nothing.

use frameprint_core::{Element, ElementKind};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::classes::{ClassId, StyleRule};
use crate::context::ProcessingContext;
use crate::directive::{self, Directive, Sentinel};
use crate::options::ExportOptions;
use crate::source::SceneSource;
use crate::style;
use crate::Result;

const GALLERY_LOOP: &str = "{% for image_path in images %}
    <div class=\"image-container\">
        <img src=\"{{ image_path }}\" alt=\"Project image\">
    </div>
{% endfor %}";

/// Serializes an element tree into templated markup.
pub struct Serializer<'a, S> {
    source: &'a S,
    options: &'a ExportOptions,
    ctx: &'a mut ProcessingContext,
}

impl<'a, S: SceneSource> Serializer<'a, S> {
    pub fn new(source: &'a S, options: &'a ExportOptions, ctx: &'a mut ProcessingContext) -> Self {
        Self { source, options, ctx }
    }

    /// Serialize `element` and its visible descendants.
    pub fn serialize<'b>(&'b mut self, element: &'b Element) -> LocalBoxFuture<'b, Result<String>>
    where
        S: 'b,
    {
        async move {
            if !element.visible {
                return Ok(String::new());
            }

            let directive = Directive::parse(&element.name, self.options.convention);
            if !directive.is_none() {
                log::debug!("'{}' carries {:?}", element.name, directive);
            }

            let rules = style::extract_rules(element, &mut self.ctx.assets);
            let class = self.ctx.classes.allocate(rules);

            if let Directive::Sentinel(sentinel) = directive {
                if let Some(markup) = self.sentinel_markup(sentinel, element, class) {
                    return Ok(markup);
                }
            }

            let content = match &directive {
                Directive::Loop { collection, item } if element.is_container() => {
                    let body = self.loop_body(element).await?;
                    directive::wrap_loop(item, collection, &body)
                }
                Directive::Variable { variable } => directive::placeholder(variable),
                _ => self.children_markup(element).await?,
            };

            let markup = self.tag_markup(element, &directive, class, content).await;

            Ok(match &directive {
                Directive::Conditional { variable } => directive::wrap_conditional(variable, &markup),
                _ => markup,
            })
        }
        .boxed_local()
    }

    async fn children_markup(&mut self, element: &Element) -> Result<String> {
        let mut markup = String::new();
        for child in element.children().unwrap_or_default() {
            markup.push_str(&self.serialize(child).await?);
        }
        Ok(markup)
    }

    /// Markup of the first visible child, the loop's item template.
    async fn loop_body(&mut self, element: &Element) -> Result<String> {
        let template = element
            .children()
            .unwrap_or_default()
            .iter()
            .find(|child| child.visible);
        match template {
            Some(child) => self.serialize(child).await,
            None => {
                log::debug!("loop '{}' has no visible child", element.name);
                Ok(String::new())
            }
        }
    }

    async fn tag_markup(
        &mut self,
        element: &Element,
        directive: &Directive,
        class: ClassId,
        content: String,
    ) -> String {
        if let ElementKind::Text(text) = &element.kind {
            let text = match directive {
                Directive::Variable { .. } => content,
                _ => escape_text(&text.characters).replace('\n', "<br>"),
            };
            return format!("<p{}>{}</p>", self.ctx.classes.class_attr(class), text);
        }

        if element.has_image_fill() {
            let name = self
                .ctx
                .assets
                .export(self.source, element, self.options.export_scale)
                .await;
            let path = format!("{}{}", self.options.image_dir, name);

            if !element.has_children() {
                let src = match directive {
                    Directive::Variable { variable } => directive::placeholder(variable),
                    _ => path,
                };
                return format!(
                    "<img{} src=\"{}\" alt=\"{}\">",
                    self.ctx.classes.class_attr(class),
                    src,
                    escape_attr(&element.name)
                );
            }

            self.ctx.classes.extend(
                class,
                [
                    StyleRule::new("background-image", format!("url('{}')", path)),
                    StyleRule::new("background-size", "cover"),
                    StyleRule::new("background-position", "center"),
                ],
            );
        }

        format!("<div{}>{}</div>", self.ctx.classes.class_attr(class), content)
    }

    /// Fixed markup of the sentinel names; `None` when the element kind does not fit.
    fn sentinel_markup(&self, sentinel: Sentinel, element: &Element, class: ClassId) -> Option<String> {
        let class_attr = self.ctx.classes.class_attr(class);
        match sentinel {
            Sentinel::ProjectName if element.is_text() => {
                Some(format!("<h1{}>{{{{ project_name }}}}</h1>", class_attr))
            }
            Sentinel::ProjectDescription if element.is_text() => {
                Some(format!("<div{}>{{{{ project_description | safe }}}}</div>", class_attr))
            }
            Sentinel::ImageGallery if element.is_container() => {
                Some(format!("<div{}>\n{}\n</div>", class_attr, GALLERY_LOOP))
            }
            _ => None,
        }
    }
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
