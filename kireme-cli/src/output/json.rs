//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs clusters as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    clusters: Vec<ClusterData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterData {
    /// The cluster text
    pub text: String,
    /// Starting offset in UTF-16 code units
    pub offset: usize,
    /// Length in UTF-16 code units
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clusters: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_cluster(&mut self, cluster: &str, offset: usize, length: usize) -> Result<()> {
        self.clusters.push(ClusterData {
            text: cluster.to_string(),
            offset,
            length,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.clusters)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
