//! Converts a design frame into templated HTML, print CSS, image assets, and
//! a font manifest.
//!
//! Template directives are driven by element names (`loop-`, `if-`, `var-`
//! prefixes, or the `{{ project_name }}` family of sentinel names) and are
//! emitted as Jinja-style tags for a later rendering step.
//!
//! # Example
//!
//! ```ignore
//! use frameprint_export::{generate, ExportOptions, MemorySource};
//!
//! let source = MemorySource::with_root(root.clone());
//! let result = generate(&source, &root, &ExportOptions::default()).await?;
//! println!("{}", result.css);
//! ```

pub mod assets;
pub mod classes;
pub mod context;
pub mod directive;
pub mod markup;
pub mod options;
pub mod plugin;
pub mod source;
pub mod style;
pub mod stylesheet;

use frameprint_core::{Element, ElementKind, GenerateError};
use serde::{Deserialize, Serialize};

pub use assets::{AssetCollector, ExportedImage, UsedFont};
pub use classes::{ClassAllocator, ClassId, RuleList, StyleRule};
pub use context::ProcessingContext;
pub use directive::{Directive, Sentinel};
pub use markup::Serializer;
pub use options::{DirectiveConvention, DocumentShell, ExportOptions};
pub use plugin::{handle_message, PluginMessage, PluginResponse};
pub use source::{MemorySource, SceneSource};

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub html: String,
    pub css: String,
    pub images: Vec<ExportedImage>,
    pub fonts: Vec<UsedFont>,
    pub frame_name: String,
}

/// Run one generation over `root`, which must be a frame.
pub async fn generate<S: SceneSource>(
    source: &S,
    root: &Element,
    options: &ExportOptions,
) -> Result<GenerationResult> {
    let ElementKind::Frame(frame) = &root.kind else {
        return Err(GenerateError::InvalidSelection);
    };

    let mut ctx = ProcessingContext::new(&options.class_prefix);
    let body = Serializer::new(source, options, &mut ctx).serialize(root).await?;
    let css = stylesheet::assemble(frame, &ctx, options)?;

    log::info!(
        "generated '{}': {} classes, {} images, {} fonts",
        root.name,
        ctx.classes.len(),
        ctx.assets.images().len(),
        ctx.assets.fonts().count()
    );

    let fonts = ctx.assets.used_fonts();
    Ok(GenerationResult {
        html: options.shell.wrap(&body),
        css,
        images: ctx.assets.into_images(),
        fonts,
        frame_name: frame_name(&root.name, &options.fallback_frame_name),
    })
}

/// Root name with every non-alphanumeric character removed.
pub fn frame_name(name: &str, fallback: &str) -> String {
    let stripped: String = name.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if stripped.is_empty() {
        fallback.to_string()
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameprint_core::{Color, FontName, FrameNode, Paint, ShapeNode, ShapeType, TextNode};
    use futures::executor::block_on;
    use proptest::prelude::*;

    fn sample_root() -> Element {
        let title = TextNode::new("Catalog").with_font(FontName::new("Inter", "Bold"), 32.0);
        let price = TextNode::new("$10").with_font(FontName::new("Inter", "Bold"), 14.0);
        let card = FrameNode::new(200.0, 100.0)
            .with_fill(Paint::Solid { color: Color::rgb(1.0, 0.0, 0.0), opacity: Some(0.5), visible: true })
            .with_child(Element::shape("Photo", ShapeNode::new(ShapeType::Rectangle).with_fill(Paint::image())).with_id("2:1"))
            .with_child(Element::text("Price", price));
        let list = FrameNode::new(600.0, 300.0).with_child(Element::frame("Card", card));
        Element::frame(
            "Product Sheet #1",
            FrameNode::new(600.0, 400.0)
                .with_child(Element::text("Title", title))
                .with_child(Element::frame("loop-products", list)),
        )
    }

    fn class_names(text: &str, marker: &str, end: char) -> Vec<String> {
        text.match_indices(marker)
            .map(|(start, _)| {
                let rest = &text[start + marker.len()..];
                rest[..rest.find(end).unwrap_or(rest.len())].to_string()
            })
            .collect()
    }

    #[test]
    fn test_generate_end_to_end() {
        let root = sample_root();
        let source = MemorySource::with_root(root.clone()).with_raster("2:1", b"png".to_vec());
        let result = block_on(generate(&source, &root, &ExportOptions::default())).unwrap();

        assert_eq!(result.frame_name, "ProductSheet1");
        assert!(result.css.contains("size: 600px 400px;"));
        assert!(result.css.contains("background-color: rgba(255, 0, 0, 0.50);"));
        assert!(result.html.contains("{% for product in products %}"));
        assert!(result.html.contains("<img src=\"images/image_1.png\" alt=\"Photo\">"));
        assert_eq!(result.images.len(), 1);
        assert_eq!(result.fonts, vec![UsedFont { family: "Inter".into(), style: "Bold".into(), weight: 700 }]);
        assert_eq!(result.css.matches("@font-face").count(), 1);
    }

    #[test]
    fn test_markup_and_stylesheet_classes_match() {
        let root = sample_root();
        let source = MemorySource::with_root(root.clone());
        let result = block_on(generate(&source, &root, &ExportOptions::default())).unwrap();

        let in_markup = class_names(&result.html, "class=\"", '"');
        let in_css = class_names(&result.css, "\n.el-", ' ');
        let in_css: Vec<String> = in_css.into_iter().map(|id| format!("el-{}", id)).collect();
        let mut sorted_markup = in_markup.clone();
        sorted_markup.sort();
        let mut sorted_css = in_css.clone();
        sorted_css.sort();
        assert_eq!(sorted_markup, sorted_css);
    }

    #[test]
    fn test_non_frame_root_is_rejected() {
        let root = Element::text("Title", TextNode::new("x"));
        let source = MemorySource::with_root(root.clone());
        let err = block_on(generate(&source, &root, &ExportOptions::default())).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_repeated_runs_do_not_share_state() {
        let root = sample_root();
        let source = MemorySource::with_root(root.clone()).with_raster("2:1", b"png".to_vec());
        let options = ExportOptions::default();
        let first = block_on(generate(&source, &root, &options)).unwrap();
        let second = block_on(generate(&source, &root, &options)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_frame_name() {
        assert_eq!(frame_name("Invoice / Page 2", "export"), "InvoicePage2");
        assert_eq!(frame_name("---", "export"), "export");
    }

    fn arb_element(depth: u32) -> BoxedStrategy<Element> {
        let leaf = (any::<bool>(), any::<bool>(), 0u8..4).prop_map(|(visible, red, font)| {
            let mut text = TextNode::new("t");
            if red {
                text = text.with_fill(Color::rgb(1.0, 0.0, 0.0));
            }
            if font > 0 {
                text = text.with_font(FontName::new("Inter", ["Regular", "Bold", "Light"][font as usize - 1]), 12.0);
            }
            let element = Element::text("Text", text);
            if visible { element } else { element.hidden() }
        });
        if depth == 0 {
            return leaf.boxed();
        }
        (any::<bool>(), prop::collection::vec(arb_element(depth - 1), 0..4))
            .prop_map(|(red, children)| {
                let mut frame = FrameNode::new(10.0, 10.0);
                if red {
                    frame = frame.with_fill(Paint::solid(Color::rgb(1.0, 0.0, 0.0)));
                }
                frame.children = children;
                Element::frame("Box", frame)
            })
            .boxed()
    }

    proptest! {
        #[test]
        fn prop_class_ids_follow_visible_preorder(tree in arb_element(3)) {
            fn count_visible(element: &Element) -> usize {
                if !element.visible {
                    return 0;
                }
                1 + element.children().unwrap_or_default().iter().map(count_visible).sum::<usize>()
            }

            let mut ctx = ProcessingContext::default();
            let options = ExportOptions::default();
            let source = MemorySource::default();
            let markup = block_on(Serializer::new(&source, &options, &mut ctx).serialize(&tree)).unwrap();

            prop_assert_eq!(ctx.classes.allocated(), count_visible(&tree));
            let ids: Vec<usize> = class_names(&markup, "class=\"el-", '"')
                .iter()
                .map(|id| id.parse().unwrap())
                .collect();
            prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(ids.len(), ctx.classes.len());
        }

        #[test]
        fn prop_fonts_are_unique(tree in arb_element(3)) {
            let mut ctx = ProcessingContext::default();
            let options = ExportOptions::default();
            let source = MemorySource::default();
            block_on(Serializer::new(&source, &options, &mut ctx).serialize(&tree)).unwrap();

            let css = stylesheet::assemble(&FrameNode::new(10.0, 10.0), &ctx, &options).unwrap();
            let fonts = ctx.assets.used_fonts();
            prop_assert!(fonts.len() <= 3);
            prop_assert_eq!(css.matches("@font-face").count(), fonts.len());
        }
    }
}
