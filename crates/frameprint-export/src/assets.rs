//! Image and font collection for a run.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use frameprint_core::{Element, FontName};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::source::SceneSource;

/// An exported raster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedImage {
    /// `image_<n>.png`.
    pub name: String,
    /// Base64-encoded PNG bytes.
    pub bytes: String,
}

/// A font referenced by some text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedFont {
    pub family: String,
    pub style: String,
    pub weight: u16,
}

impl From<&FontName> for UsedFont {
    fn from(font: &FontName) -> Self {
        Self {
            family: font.family.clone(),
            style: font.style.clone(),
            weight: font.weight().value(),
        }
    }
}

/// Tracks exported images and distinct fonts.
#[derive(Debug, Clone, Default)]
pub struct AssetCollector {
    images: Vec<ExportedImage>,
    fonts: IndexSet<FontName>,
    requested: usize,
}

impl AssetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `element` as a PNG and return its asset name.
    ///
    /// Names count export requests rather than successful exports, so a
    /// name handed out for a failed export is never reused by a later
    /// image. The failed name dangles. Failures are logged, never returned.
    pub async fn export<S: SceneSource>(
        &mut self,
        source: &S,
        element: &Element,
        scale: f64,
    ) -> String {
        self.requested += 1;
        let name = format!("image_{}.png", self.requested);

        match source.export_png(element, scale).await {
            Ok(png) => {
                log::debug!("exported '{}' as {} ({} bytes)", element.name, name, png.len());
                self.images.push(ExportedImage { name: name.clone(), bytes: BASE64_STANDARD.encode(png) });
            }
            Err(err) => {
                log::warn!("image export failed for node \"{}\": {}", element.name, err);
            }
        }

        name
    }

    /// Record a font; repeated family/style pairs are ignored.
    pub fn register_font(&mut self, font: &FontName) {
        if !self.fonts.contains(font) {
            self.fonts.insert(font.clone());
        }
    }

    pub fn images(&self) -> &[ExportedImage] {
        &self.images
    }

    /// Distinct fonts in first-seen order.
    pub fn fonts(&self) -> impl Iterator<Item = &FontName> {
        self.fonts.iter()
    }

    pub fn used_fonts(&self) -> Vec<UsedFont> {
        self.fonts.iter().map(UsedFont::from).collect()
    }

    pub fn into_images(self) -> Vec<ExportedImage> {
        self.images
    }
}
