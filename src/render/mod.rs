//! Renderer module — trait-based output formatting.

pub mod markdown;

use crate::model::DocRecord;

/// Trait for rendering the collected records into an output document.
pub trait Renderer {
    fn render(&self, docs: &[DocRecord]) -> String;
    /// Output file written in the working directory.
    fn file_name(&self) -> &str;
}
