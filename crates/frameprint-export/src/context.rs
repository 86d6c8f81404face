//! Per-run mutable state.

use crate::assets::AssetCollector;
use crate::classes::ClassAllocator;

/// State of one generation run: class ordinals and rules, images, fonts.
///
/// Created fresh for every run and dropped once the result is built.
#[derive(Debug, Clone, Default)]
pub struct ProcessingContext {
    pub classes: ClassAllocator,
    pub assets: AssetCollector,
}

impl ProcessingContext {
    pub fn new(class_prefix: &str) -> Self {
        Self {
            classes: ClassAllocator::new(class_prefix),
            assets: AssetCollector::new(),
        }
    }
}
