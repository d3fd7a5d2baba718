//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single grapheme cluster.
    ///
    /// `offset` and `length` are in UTF-16 code units within the source.
    fn format_cluster(&mut self, cluster: &str, offset: usize, length: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
