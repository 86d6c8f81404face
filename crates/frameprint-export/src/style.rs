//! Style extraction: maps the visual attributes of one element to CSS rules.
//!
//! Rules are appended in a fixed order (opacity, flex layout, padding,
//! background, border, radius, typography, shadow, page-break) and are never
//! sorted afterwards.

use frameprint_core::{
    Effect, Element, ElementKind, FrameNode, LayoutMode, LetterSpacing, LineHeight, Paint,
    ShapeType, TextNode, Unit, to_fixed,
};

use crate::assets::AssetCollector;
use crate::classes::{RuleList, StyleRule};

/// Name marker requesting `page-break-inside: avoid`.
pub const NO_BREAK_MARKER: &str = "[no-break]";

/// Extract the rules of `element`, registering any resolved font in `assets`.
pub fn extract_rules(element: &Element, assets: &mut AssetCollector) -> RuleList {
    let mut rules = RuleList::new();

    if element.opacity < 1.0 {
        rules.push(StyleRule::new("opacity", to_fixed(element.opacity, 2)));
    }

    if let ElementKind::Frame(frame) = &element.kind {
        push_flex_rules(frame, &mut rules);
        if !frame.padding.is_zero() {
            let p = frame.padding;
            rules.push(StyleRule::new(
                "padding",
                format!("{}px {}px {}px {}px", p.top, p.right, p.bottom, p.left),
            ));
        }
    }

    let solid_fill = element.fills().iter().find_map(|paint| match paint {
        Paint::Solid { color, opacity, visible: true } => Some((color, opacity)),
        _ => None,
    });
    if let Some((color, opacity)) = solid_fill {
        rules.push(StyleRule::new("background-color", color.to_css_rgba(opacity.unwrap_or(1.0))));
    }

    // Only the first stroke is considered.
    if let Some(Paint::Solid { color, opacity, visible: true }) = element.strokes().first() {
        let weight = element.stroke_weight().unwrap_or(1.0);
        rules.push(StyleRule::new(
            "border",
            format!("{}px solid {}", weight, color.to_css_rgba(opacity.unwrap_or(1.0))),
        ));
    }

    push_radius_rule(element, &mut rules);

    if let ElementKind::Text(text) = &element.kind {
        push_text_rules(text, assets, &mut rules);
    }

    let shadow = element.effects.iter().find_map(|effect| match effect {
        Effect::DropShadow { color, offset, radius, visible: true } => Some((color, offset, radius)),
        _ => None,
    });
    if let Some((color, offset, radius)) = shadow {
        rules.push(StyleRule::new(
            "box-shadow",
            format!("{}px {}px {}px {}", offset.x, offset.y, radius, color.to_css_rgba(color.a)),
        ));
    }

    if element.name.contains(NO_BREAK_MARKER) {
        rules.push(StyleRule::new("page-break-inside", "avoid"));
    }

    rules
}

fn push_flex_rules(frame: &FrameNode, rules: &mut RuleList) {
    let layout = &frame.layout;
    if layout.mode == LayoutMode::None {
        return;
    }

    rules.push(StyleRule::new("display", "flex"));
    let direction = if layout.mode == LayoutMode::Vertical { "column" } else { "row" };
    rules.push(StyleRule::new("flex-direction", direction));
    if layout.item_spacing > 0.0 {
        rules.push(StyleRule::new("gap", format!("{}px", layout.item_spacing)));
    }
    if let Some(justify) = layout.primary_axis_align.css_value() {
        rules.push(StyleRule::new("justify-content", justify));
    }
    if let Some(align) = layout.counter_axis_align.css_value() {
        rules.push(StyleRule::new("align-items", align));
    }
    if layout.wrap {
        rules.push(StyleRule::new("flex-wrap", "wrap"));
    }
}

fn push_radius_rule(element: &Element, rules: &mut RuleList) {
    let (radius, radii) = match &element.kind {
        ElementKind::Frame(frame) => (frame.corner_radius, frame.corner_radii),
        ElementKind::Shape(shape) => {
            let radii = if shape.shape == ShapeType::Rectangle { shape.corner_radii } else { None };
            (shape.corner_radius, radii)
        }
        ElementKind::Group(_) | ElementKind::Text(_) => return,
    };

    match (radius, radii) {
        (Some(radius), _) if radius > 0.0 => {
            rules.push(StyleRule::new("border-radius", format!("{}px", radius)));
        }
        (_, Some(r)) => {
            rules.push(StyleRule::new(
                "border-radius",
                format!("{}px {}px {}px {}px", r.top_left, r.top_right, r.bottom_right, r.bottom_left),
            ));
        }
        _ => {}
    }
}

fn push_text_rules(text: &TextNode, assets: &mut AssetCollector, rules: &mut RuleList) {
    if let Some(font) = &text.font_name {
        assets.register_font(font);
        rules.push(StyleRule::new("font-family", format!("'{}', sans-serif", font.family)));
        rules.push(StyleRule::new("font-style", font.css_style()));
        rules.push(StyleRule::new("font-weight", font.weight().value().to_string()));
    }

    if let Some(size) = text.font_size {
        rules.push(StyleRule::new("font-size", format!("{}px", size)));
    }

    match text.line_height {
        Some(LineHeight::Pixels { value }) => {
            rules.push(StyleRule::new("line-height", format!("{}px", value)));
        }
        Some(LineHeight::Percent { value }) => {
            rules.push(StyleRule::new("line-height", format!("{}%", value)));
        }
        Some(LineHeight::Auto) | None => {}
    }

    if let (Some(spacing), Some(size)) = (text.letter_spacing, text.font_size) {
        if spacing.value != 0.0 {
            rules.push(StyleRule::new("letter-spacing", letter_spacing(spacing, size)));
        }
    }

    if let Some(transform) = text.text_case.and_then(|case| case.css_transform()) {
        rules.push(StyleRule::new("text-transform", transform));
    }

    if let Some(align) = text.text_align_horizontal {
        rules.push(StyleRule::new("text-align", align.css_value()));
    }
}

fn letter_spacing(spacing: LetterSpacing, font_size: f64) -> String {
    match spacing.unit {
        Unit::Pixels => format!("{}px", spacing.value),
        Unit::Percent => format!("{}em", to_fixed(spacing.value / font_size, 3)),
    }
}
