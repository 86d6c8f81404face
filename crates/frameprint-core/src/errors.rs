//! Error types for the frameprint exporter.

use thiserror::Error;

/// Errors raised by the host while exporting a raster.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Raster export of '{name}' failed: {reason}")]
    RasterFailed { name: String, reason: String },

    #[error("No raster available for node '{id}'")]
    MissingRaster { id: String },
}

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please select exactly one frame.")]
    InvalidSelection,

    #[error("Failed to format output")]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("{0}")]
    Other(String),
}

impl GenerateError {
    /// True for failures of the selection precondition.
    pub fn is_precondition(&self) -> bool {
        matches!(self, GenerateError::InvalidSelection)
    }
}
