//! Pre-rendered scene snapshots.
//!
//! A snapshot carries the selection together with every raster the run may
//! request, so generation can happen without calling back into the host:
//!
//! ```json
//! { "selection": [ { "type": "FRAME", ... } ], "rasters": { "2:1": "iVBORw0..." } }
//! ```

use std::collections::HashMap;

use base64::prelude::*;
use frameprint_core::{Element, GenerateError};
use frameprint_export::{handle_message, ExportOptions, MemorySource, PluginMessage, PluginResponse};
use serde::Deserialize;

/// Selection plus base64 PNG rasters keyed by node id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    pub selection: Vec<Element>,
    #[serde(default)]
    pub rasters: HashMap<String, String>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(json).map_err(|e| GenerateError::Other(format!("invalid snapshot: {}", e)))
    }

    /// Decode the rasters into an in-memory source.
    pub fn into_source(self) -> Result<MemorySource, GenerateError> {
        let mut source = MemorySource::new(self.selection);
        for (id, encoded) in self.rasters {
            let png = BASE64_STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| GenerateError::Other(format!("invalid raster for {}: {}", id, e)))?;
            source.insert_raster(id, png);
        }
        Ok(source)
    }
}

/// Answer a JSON message against a JSON snapshot. Malformed input becomes an
/// error reply rather than a failure.
pub async fn respond(snapshot: &str, message: &str) -> PluginResponse {
    let message = match serde_json::from_str::<PluginMessage>(message) {
        Ok(message) => message,
        Err(e) => return PluginResponse::from_error(&GenerateError::Other(format!("invalid message: {}", e))),
    };
    let source = match Snapshot::from_json(snapshot).and_then(Snapshot::into_source) {
        Ok(source) => source,
        Err(err) => return PluginResponse::from_error(&err),
    };
    handle_message(&source, message, &ExportOptions::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const TRIGGER: &str = r#"{ "type": "generate-html" }"#;

    #[test]
    fn test_snapshot_with_raster() {
        let snapshot = r#"{
            "selection": [{
                "type": "FRAME", "id": "1:1", "name": "Cover", "width": 100, "height": 50,
                "children": [{
                    "type": "SHAPE", "shape": "RECTANGLE", "id": "2:1", "name": "Logo",
                    "fills": [{ "type": "IMAGE", "imageHash": "abc" }]
                }]
            }],
            "rasters": { "2:1": "cG5n" }
        }"#;

        let PluginResponse::GenerationResult { payload } = block_on(respond(snapshot, TRIGGER)) else {
            panic!("expected result");
        };
        assert_eq!(payload.frame_name, "Cover");
        assert_eq!(payload.images.len(), 1);
        assert_eq!(payload.images[0].name, "image_1.png");
        assert_eq!(payload.images[0].bytes, "cG5n");
        assert!(payload.html.contains("src=\"images/image_1.png\""));
    }

    #[test]
    fn test_unrendered_paints_do_not_fail_the_run() {
        let snapshot = r#"{
            "selection": [{
                "type": "FRAME", "name": "Poster", "width": 10, "height": 10,
                "fills": [
                    { "type": "GRADIENT_LINEAR", "visible": true },
                    { "type": "VIDEO", "videoHash": "v" }
                ]
            }]
        }"#;
        let PluginResponse::GenerationResult { payload } = block_on(respond(snapshot, TRIGGER)) else {
            panic!("expected result");
        };
        assert_eq!(payload.html, "<div></div>");
        assert!(!payload.css.contains("background"));
    }

    #[test]
    fn test_empty_selection() {
        let response = block_on(respond(r#"{ "selection": [] }"#, TRIGGER));
        assert_eq!(response, PluginResponse::Error { message: "Please select exactly one frame.".into() });
    }

    #[test]
    fn test_malformed_input_is_an_internal_error() {
        let PluginResponse::Error { message } = block_on(respond("{", TRIGGER)) else {
            panic!("expected error");
        };
        assert!(message.starts_with("An internal error occurred: invalid snapshot"));

        let PluginResponse::Error { message } = block_on(respond(r#"{ "selection": [] }"#, "{}")) else {
            panic!("expected error");
        };
        assert!(message.starts_with("An internal error occurred: invalid message"));

        let bad_raster = r#"{ "selection": [], "rasters": { "1:1": "!!" } }"#;
        let PluginResponse::Error { message } = block_on(respond(bad_raster, TRIGGER)) else {
            panic!("expected error");
        };
        assert!(message.contains("invalid raster for 1:1"));
    }
}
