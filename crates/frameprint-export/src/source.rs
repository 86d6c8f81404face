//! The scene graph source consumed by the exporter.

use std::collections::HashMap;

use frameprint_core::{Element, ExportError};

/// Host design tool access: the current selection and raster export.
#[allow(async_fn_in_trait)]
pub trait SceneSource {
    /// Elements currently selected in the host.
    fn selection(&self) -> &[Element];

    /// Render `element` as PNG bytes at `scale`.
    async fn export_png(&self, element: &Element, scale: f64) -> Result<Vec<u8>, ExportError>;
}

/// A source whose rasters were rendered ahead of time, keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    selection: Vec<Element>,
    rasters: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new(selection: Vec<Element>) -> Self {
        Self { selection, rasters: HashMap::new() }
    }

    /// Source with a single selected root.
    pub fn with_root(root: Element) -> Self {
        Self::new(vec![root])
    }

    /// Register the PNG bytes for a node id.
    pub fn with_raster(mut self, id: impl Into<String>, png: Vec<u8>) -> Self {
        self.rasters.insert(id.into(), png);
        self
    }

    pub fn insert_raster(&mut self, id: impl Into<String>, png: Vec<u8>) {
        self.rasters.insert(id.into(), png);
    }
}

impl SceneSource for MemorySource {
    fn selection(&self) -> &[Element] {
        &self.selection
    }

    async fn export_png(&self, element: &Element, _scale: f64) -> Result<Vec<u8>, ExportError> {
        self.rasters
            .get(&element.id)
            .cloned()
            .ok_or_else(|| ExportError::MissingRaster { id: element.id.clone() })
    }
}
