//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one cluster per line
///
/// Clusters containing control characters (CRLF, separators, unpaired
/// surrogate replacements) are printed with Rust-style escapes so that one
/// output line always corresponds to one cluster.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_cluster(&mut self, cluster: &str, _offset: usize, _length: usize) -> Result<()> {
        if cluster.chars().any(char::is_control) {
            writeln!(self.writer, "{}", cluster.escape_debug())?;
        } else {
            writeln!(self.writer, "{}", cluster)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
