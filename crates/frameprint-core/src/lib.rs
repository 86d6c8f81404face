//! Core types for the frameprint exporter.
//!
//! This crate provides the foundational types shared by the exporter and its
//! host bindings:
//! - Scene graph elements, one closed variant per element category
//! - Value types (colors, paints, effects, typography)
//! - Error types

pub mod errors;
pub mod scene;
pub mod types;

pub use errors::*;
pub use scene::*;
pub use types::*;
