//! Presentation of fetched declarations, kept separate from the data
//! service so output formats can vary without touching network code.

use crate::types::Declaration;

/// Render a list of declarations in a specific output format
pub trait OutputRenderer {
    fn render(&self, declarations: &[Declaration]) -> String;
}

pub mod table;

pub use table::TableRenderer;
