//! Message protocol between the plugin UI and the exporter.
//!
//! The UI sends a single `generate-html` trigger and receives exactly one
//! reply: either `generation-result` with the full payload or `error` with a
//! human-readable message.

use frameprint_core::{ElementKind, GenerateError};
use serde::{Deserialize, Serialize};

use crate::options::ExportOptions;
use crate::source::SceneSource;
use crate::{generate, GenerationResult};

/// Messages sent by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    GenerateHtml {
        /// Overrides the host's default options for this run.
        #[serde(default)]
        options: Option<ExportOptions>,
    },
}

/// Replies sent back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginResponse {
    GenerationResult { payload: GenerationResult },
    Error { message: String },
}

impl PluginResponse {
    /// Error reply for a failed run; internal failures are logged.
    pub fn from_error(err: &GenerateError) -> Self {
        let message = if err.is_precondition() {
            err.to_string()
        } else {
            log::error!("generation failed: {:?}", err);
            match err.to_string() {
                detail if detail.is_empty() => "An unknown internal error occurred.".to_string(),
                detail => format!("An internal error occurred: {}", detail),
            }
        };
        PluginResponse::Error { message }
    }
}

/// Handle one UI message against the host's current selection.
pub async fn handle_message<S: SceneSource>(
    source: &S,
    message: PluginMessage,
    defaults: &ExportOptions,
) -> PluginResponse {
    let PluginMessage::GenerateHtml { options } = message;
    let options = options.as_ref().unwrap_or(defaults);

    let root = match source.selection() {
        [root] if matches!(root.kind, ElementKind::Frame(_)) => root,
        selection => {
            log::debug!("rejected selection of {} element(s)", selection.len());
            return PluginResponse::from_error(&GenerateError::InvalidSelection);
        }
    };

    match generate(source, root, options).await {
        Ok(payload) => PluginResponse::GenerationResult { payload },
        Err(err) => PluginResponse::from_error(&err),
    }
}
