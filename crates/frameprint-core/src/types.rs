//! Core value types for scene elements.

/// A color with channels in the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert the color channels to rounded 8-bit values.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Format as a CSS `rgba()` value using `alpha` in place of the stored alpha.
    ///
    /// Alpha is printed with two decimals: `rgba(255, 0, 0, 0.50)`.
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgba({}, {}, {}, {})", r, g, b, to_fixed(alpha, 2))
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Format `value` with `digits` decimals, rounding ties away from zero.
///
/// `format!("{:.2}")` rounds exact binary ties to even (`0.125` -> `0.12`);
/// this prints `0.13`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// A paint entry of a fill or stroke list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Paint {
    Solid {
        color: Color,
        /// Paint opacity; `None` means fully opaque.
        #[cfg_attr(feature = "serde", serde(default))]
        opacity: Option<f64>,
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    Image {
        #[cfg_attr(feature = "serde", serde(default, rename = "imageHash"))]
        image_hash: Option<String>,
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    /// Linear, radial, angular, and diamond gradients.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "GRADIENT_LINEAR", alias = "GRADIENT_RADIAL", alias = "GRADIENT_ANGULAR", alias = "GRADIENT_DIAMOND")
    )]
    Gradient {
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    /// Any other host paint (video, pattern). Never rendered.
    #[cfg_attr(feature = "serde", serde(other))]
    Unsupported,
}

#[cfg(feature = "serde")]
pub(crate) fn visible() -> bool {
    true
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color, opacity: None, visible: true }
    }

    pub fn image() -> Self {
        Paint::Image { image_hash: None, visible: true }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid { visible, .. }
            | Paint::Image { visible, .. }
            | Paint::Gradient { visible } => *visible,
            Paint::Unsupported => false,
        }
    }

    /// Hide the paint, keeping its other attributes.
    pub fn hidden(mut self) -> Self {
        match &mut self {
            Paint::Solid { visible, .. }
            | Paint::Image { visible, .. }
            | Paint::Gradient { visible } => *visible = false,
            Paint::Unsupported => {}
        }
        self
    }

    /// True for a visible embedded raster image.
    pub fn is_visible_image(&self) -> bool {
        matches!(self, Paint::Image { visible: true, .. })
    }
}

/// A visual effect applied to an element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Effect {
    DropShadow {
        color: Color,
        offset: Vector,
        radius: f64,
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    InnerShadow {
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    LayerBlur {
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    BackgroundBlur {
        #[cfg_attr(feature = "serde", serde(default = "visible"))]
        visible: bool,
    },
    /// Effects this exporter does not know about.
    #[cfg_attr(feature = "serde", serde(other))]
    Unsupported,
}

/// A family/style pair as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self { family: family.into(), style: style.into() }
    }

    /// Italic iff the style text contains "italic" in any case.
    pub fn is_italic(&self) -> bool {
        self.style.to_lowercase().contains("italic")
    }

    /// CSS `font-style` keyword.
    pub fn css_style(&self) -> &'static str {
        if self.is_italic() {
            "italic"
        } else {
            "normal"
        }
    }

    pub fn weight(&self) -> FontWeight {
        FontWeight::from_style(&self.style)
    }
}

/// Numeric font weight derived from a style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// Look up a style name such as `"Semi Bold"` or `"ExtraBold"`.
    ///
    /// Matching is done on the lowercased name with spaces removed. Names
    /// outside the table (including `"Bold Italic"`) fall back to `Regular`.
    pub fn from_style(style: &str) -> Self {
        let key: String = style.to_lowercase().chars().filter(|c| *c != ' ').collect();
        match key.as_str() {
            "thin" => FontWeight::Thin,
            "extralight" => FontWeight::ExtraLight,
            "light" => FontWeight::Light,
            "regular" => FontWeight::Regular,
            "medium" => FontWeight::Medium,
            "semibold" => FontWeight::SemiBold,
            "bold" => FontWeight::Bold,
            "extrabold" => FontWeight::ExtraBold,
            "black" => FontWeight::Black,
            _ => {
                log::debug!("font style {:?} has no weight mapping, using 400", style);
                FontWeight::Regular
            }
        }
    }

    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

/// Unit of a line height or letter spacing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Unit {
    Pixels,
    Percent,
}

/// Text line height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LineHeight {
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

/// Text letter spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterSpacing {
    pub value: f64,
    pub unit: Unit,
}

/// Case transform applied to a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

impl TextCase {
    /// CSS `text-transform` keyword, if the case has one.
    pub fn css_transform(self) -> Option<&'static str> {
        match self {
            TextCase::Upper => Some("uppercase"),
            TextCase::Lower => Some("lowercase"),
            TextCase::Title => Some("capitalize"),
            TextCase::Original | TextCase::SmallCaps | TextCase::SmallCapsForced => None,
        }
    }
}

/// Horizontal alignment of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    /// The host's keyword, lowercased.
    pub fn css_value(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justified => "justified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css_rgba() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_css_rgba(0.5), "rgba(255, 0, 0, 0.50)");
        assert_eq!(Color::rgb(0.5, 0.5, 0.5).to_css_rgba(1.0), "rgba(128, 128, 128, 1.00)");
        assert_eq!(Color::BLACK.to_css_rgba(0.625), "rgba(0, 0, 0, 0.63)");
    }

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
        assert_eq!(to_fixed(0.456, 2), "0.46");
        assert_eq!(to_fixed(1.0, 2), "1.00");
    }

    #[test]
    fn test_font_weight_lookup() {
        assert_eq!(FontWeight::from_style("Semi Bold").value(), 600);
        assert_eq!(FontWeight::from_style("ExtraBold").value(), 800);
        assert_eq!(FontWeight::from_style("thin").value(), 100);
        assert_eq!(FontWeight::from_style("Bold Italic").value(), 400);
        assert_eq!(FontWeight::from_style("Condensed").value(), 400);
    }

    #[test]
    fn test_font_name_italic() {
        assert!(FontName::new("Inter", "Bold ITALIC").is_italic());
        assert_eq!(FontName::new("Inter", "Regular").css_style(), "normal");
    }

    #[test]
    fn test_text_case_transform() {
        assert_eq!(TextCase::Upper.css_transform(), Some("uppercase"));
        assert_eq!(TextCase::Title.css_transform(), Some("capitalize"));
        assert_eq!(TextCase::SmallCaps.css_transform(), None);
    }

    #[test]
    fn test_paint_hidden() {
        let paint = Paint::image().hidden();
        assert!(!paint.is_visible());
        assert!(!paint.is_visible_image());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_host_paint_types_decode() {
        let paints: Vec<Paint> = serde_json::from_str(
            r#"[
                { "type": "GRADIENT_LINEAR", "visible": true },
                { "type": "GRADIENT_RADIAL" },
                { "type": "GRADIENT_ANGULAR" },
                { "type": "GRADIENT_DIAMOND", "visible": false },
                { "type": "VIDEO", "videoHash": "v" },
                { "type": "PATTERN", "sourceNodeId": "1:1" }
            ]"#,
        )
        .unwrap();
        assert_eq!(paints[0], Paint::Gradient { visible: true });
        assert_eq!(paints[3], Paint::Gradient { visible: false });
        assert_eq!(paints[4], Paint::Unsupported);
        assert_eq!(paints[5], Paint::Unsupported);
        assert!(!paints[4].is_visible());

        let effect: Effect = serde_json::from_str(r#"{ "type": "NOISE", "visible": true }"#).unwrap();
        assert_eq!(effect, Effect::Unsupported);
    }
}
