//! Scene source backed by the host plugin API.

use frameprint_core::{Element, ExportError};
use frameprint_export::SceneSource;
use js_sys::{Function, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Selection deserialized from the host plus a raster callback.
///
/// The callback is invoked as `exporter(nodeId, scale)` and may return
/// either a `Uint8Array` or a promise resolving to one.
pub struct JsSceneSource {
    selection: Vec<Element>,
    exporter: Function,
}

impl JsSceneSource {
    pub fn new(selection: Vec<Element>, exporter: Function) -> Self {
        Self { selection, exporter }
    }
}

impl SceneSource for JsSceneSource {
    fn selection(&self) -> &[Element] {
        &self.selection
    }

    async fn export_png(&self, element: &Element, scale: f64) -> Result<Vec<u8>, ExportError> {
        let failed = |err: JsValue| ExportError::RasterFailed {
            name: element.name.clone(),
            reason: describe(&err),
        };

        let returned = self
            .exporter
            .call2(&JsValue::NULL, &JsValue::from_str(&element.id), &JsValue::from_f64(scale))
            .map_err(failed)?;
        let bytes = JsFuture::from(Promise::resolve(&returned)).await.map_err(failed)?;
        if !bytes.is_instance_of::<Uint8Array>() {
            return Err(failed(JsValue::from_str("exporter did not return a Uint8Array")));
        }
        Ok(Uint8Array::new(&bytes).to_vec())
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
