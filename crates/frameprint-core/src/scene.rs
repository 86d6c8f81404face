//! Scene graph elements as delivered by the design tool.
//!
//! Each element category carries only the attributes the host exposes for
//! it, so consumers match on [`ElementKind`] instead of probing for fields.

use crate::types::{
    Color, Effect, FontName, LetterSpacing, LineHeight, Paint, TextAlign, TextCase,
};
use smallvec::SmallVec;

/// Fill or stroke list. Most elements carry one or two paints.
pub type Paints = SmallVec<[Paint; 2]>;

/// A node of the scene graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Element {
    /// Host node id, used to request raster exports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "crate::types::visible"))]
    pub visible: bool,
    #[cfg_attr(feature = "serde", serde(default = "full_opacity"))]
    pub opacity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ElementKind,
}

#[cfg(feature = "serde")]
fn full_opacity() -> f64 {
    1.0
}

/// Category-specific attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ElementKind {
    Frame(FrameNode),
    Group(GroupNode),
    Shape(ShapeNode),
    Text(TextNode),
}

/// Flavor of an auto-layout capable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FrameType {
    #[default]
    Frame,
    Component,
    Instance,
}

/// A frame, component, or component instance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FrameNode {
    pub frame_type: FrameType,
    pub width: f64,
    pub height: f64,
    pub layout: AutoLayout,
    pub padding: Padding,
    pub fills: Paints,
    pub strokes: Paints,
    /// `None` when sides have different weights.
    pub stroke_weight: Option<f64>,
    /// `None` when corners have different radii.
    pub corner_radius: Option<f64>,
    pub corner_radii: Option<CornerRadii>,
    pub children: Vec<Element>,
}

/// A plain group of elements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GroupNode {
    pub children: Vec<Element>,
}

/// Geometry of a leaf shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ShapeType {
    #[default]
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
}

/// A rectangle, ellipse, polygon, star, vector, or line.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ShapeNode {
    pub shape: ShapeType,
    pub fills: Paints,
    pub strokes: Paints,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    /// Only rectangles expose independent corners.
    pub corner_radii: Option<CornerRadii>,
}

/// A text layer.
///
/// Typography fields are `None` when the layer mixes several values.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TextNode {
    pub characters: String,
    pub fills: Paints,
    pub strokes: Paints,
    pub stroke_weight: Option<f64>,
    pub font_name: Option<FontName>,
    pub font_size: Option<f64>,
    pub line_height: Option<LineHeight>,
    pub letter_spacing: Option<LetterSpacing>,
    pub text_case: Option<TextCase>,
    pub text_align_horizontal: Option<TextAlign>,
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Main-axis distribution of auto-layout children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    SpaceBetween,
    Baseline,
}

impl PrimaryAxisAlign {
    /// `justify-content` keyword; baseline has none.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            PrimaryAxisAlign::Min => Some("flex-start"),
            PrimaryAxisAlign::Max => Some("flex-end"),
            PrimaryAxisAlign::Center => Some("center"),
            PrimaryAxisAlign::SpaceBetween => Some("space-between"),
            PrimaryAxisAlign::Baseline => None,
        }
    }
}

/// Cross-axis alignment of auto-layout children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    Baseline,
}

impl CounterAxisAlign {
    /// `align-items` keyword; baseline has none.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            CounterAxisAlign::Min => Some("flex-start"),
            CounterAxisAlign::Max => Some("flex-end"),
            CounterAxisAlign::Center => Some("center"),
            CounterAxisAlign::Baseline => None,
        }
    }
}

/// Auto-layout settings of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub item_spacing: f64,
    pub primary_axis_align: PrimaryAxisAlign,
    pub counter_axis_align: CounterAxisAlign,
    pub wrap: bool,
}

/// Inner padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Independent corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl Element {
    /// Create a visible, fully opaque element.
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            visible: true,
            opacity: 1.0,
            effects: Vec::new(),
            kind,
        }
    }

    pub fn frame(name: impl Into<String>, frame: FrameNode) -> Self {
        Self::new(name, ElementKind::Frame(frame))
    }

    pub fn group(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self::new(name, ElementKind::Group(GroupNode { children }))
    }

    pub fn shape(name: impl Into<String>, shape: ShapeNode) -> Self {
        Self::new(name, ElementKind::Shape(shape))
    }

    pub fn text(name: impl Into<String>, text: TextNode) -> Self {
        Self::new(name, ElementKind::Text(text))
    }

    /// Set the host node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Mark the element hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Children of container-capable elements.
    pub fn children(&self) -> Option<&[Element]> {
        match &self.kind {
            ElementKind::Frame(frame) => Some(&frame.children),
            ElementKind::Group(group) => Some(&group.children),
            ElementKind::Shape(_) | ElementKind::Text(_) => None,
        }
    }

    /// True when the element has at least one child.
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(|children| !children.is_empty())
    }

    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text(_))
    }

    pub fn fills(&self) -> &[Paint] {
        match &self.kind {
            ElementKind::Frame(frame) => &frame.fills,
            ElementKind::Shape(shape) => &shape.fills,
            ElementKind::Text(text) => &text.fills,
            ElementKind::Group(_) => &[],
        }
    }

    pub fn strokes(&self) -> &[Paint] {
        match &self.kind {
            ElementKind::Frame(frame) => &frame.strokes,
            ElementKind::Shape(shape) => &shape.strokes,
            ElementKind::Text(text) => &text.strokes,
            ElementKind::Group(_) => &[],
        }
    }

    pub fn stroke_weight(&self) -> Option<f64> {
        match &self.kind {
            ElementKind::Frame(frame) => frame.stroke_weight,
            ElementKind::Shape(shape) => shape.stroke_weight,
            ElementKind::Text(text) => text.stroke_weight,
            ElementKind::Group(_) => None,
        }
    }

    /// Whether any fill is a visible embedded image.
    ///
    /// Only frames and shapes are exported as rasters.
    pub fn has_image_fill(&self) -> bool {
        match &self.kind {
            ElementKind::Frame(frame) => frame.fills.iter().any(Paint::is_visible_image),
            ElementKind::Shape(shape) => shape.fills.iter().any(Paint::is_visible_image),
            ElementKind::Group(_) | ElementKind::Text(_) => false,
        }
    }
}

impl FrameNode {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, stroke_weight: Some(1.0), ..Default::default() }
    }

    pub fn with_layout(mut self, layout: AutoLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl ShapeNode {
    pub fn new(shape: ShapeType) -> Self {
        Self { shape, stroke_weight: Some(1.0), ..Default::default() }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }
}

impl TextNode {
    pub fn new(characters: impl Into<String>) -> Self {
        Self { characters: characters.into(), ..Default::default() }
    }

    pub fn with_font(mut self, font: FontName, size: f64) -> Self {
        self.font_name = Some(font);
        self.font_size = Some(size);
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fills.push(Paint::solid(color));
        self
    }
}
