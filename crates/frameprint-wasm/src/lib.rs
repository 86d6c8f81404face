//! WebAssembly bindings for running the frameprint exporter inside a design
//! tool plugin.
//!
//! ## Example
//!
//! ```js
//! import init, { handleMessage } from 'frameprint-wasm';
//!
//! await init();
//!
//! figma.ui.onmessage = async (message) => {
//!   const selection = figma.currentPage.selection.map(toSnapshot);
//!   const reply = await handleMessage(selection, message, (id, scale) =>
//!     figma.getNodeById(id).exportAsync({ format: 'PNG', constraint: { type: 'SCALE', value: scale } }));
//!   figma.ui.postMessage(reply);
//! };
//! ```

use frameprint_core::{Element, GenerateError};
use frameprint_export::{ExportOptions, PluginMessage, PluginResponse};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod logger;
mod snapshot;
mod source;

pub use logger::init_logger;
pub use snapshot::{respond, Snapshot};
pub use source::JsSceneSource;

/// Install the panic hook and the console logger.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    init_logger(level);
}

/// Handle one UI message.
///
/// `selection` is the host's current selection as scene snapshots and
/// `exporter(nodeId, scale)` renders a node to PNG bytes. The reply is always
/// a `generation-result` or `error` message; undecodable input becomes an
/// `error` reply.
#[wasm_bindgen(js_name = handleMessage)]
pub async fn handle_message(selection: JsValue, message: JsValue, exporter: js_sys::Function) -> Result<JsValue, JsError> {
    let response = match decode_inputs(selection, message) {
        Ok((selection, message)) => {
            let source = JsSceneSource::new(selection, exporter);
            frameprint_export::handle_message(&source, message, &ExportOptions::default()).await
        }
        Err(err) => PluginResponse::from_error(&err),
    };
    to_js(&response)
}

/// Handle a JSON message against a JSON snapshot that already carries its
/// rasters. Returns the JSON reply.
#[wasm_bindgen(js_name = generateFromSnapshot)]
pub async fn generate_from_snapshot(snapshot: String, message: String) -> Result<String, JsError> {
    let response = respond(&snapshot, &message).await;
    serde_json::to_string(&response).map_err(|e| JsError::new(&e.to_string()))
}

/// Crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn decode_inputs(selection: JsValue, message: JsValue) -> Result<(Vec<Element>, PluginMessage), GenerateError> {
    let selection: Vec<Element> = serde_wasm_bindgen::from_value(selection)
        .map_err(|e| GenerateError::Other(format!("invalid selection: {}", e)))?;
    let message: PluginMessage = serde_wasm_bindgen::from_value(message)
        .map_err(|e| GenerateError::Other(format!("invalid message: {}", e)))?;
    Ok((selection, message))
}

fn to_js(response: &PluginResponse) -> Result<JsValue, JsError> {
    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_snapshot_reply_is_json_message() {
        let snapshot = r#"{ "selection": [{ "type": "FRAME", "name": "Page", "width": 10, "height": 10 }] }"#;
        let reply = futures::executor::block_on(respond(snapshot, r#"{ "type": "generate-html" }"#));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "generation-result");
        assert_eq!(json["payload"]["frameName"], "Page");
        assert_eq!(json["payload"]["html"], "<div></div>");
    }
}
