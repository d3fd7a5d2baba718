//! Segment command implementation

use super::{gather_sources, init_logging};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use kireme_core::{clusters, Utf16Buf};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or glob patterns; stdin when omitted or "-"
    #[arg(value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one cluster per line
    Text,
    /// JSON array of clusters with UTF-16 offsets
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::info!("Segmenting into grapheme clusters");

        let sources = gather_sources(&self.input)?;
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let buffer = Utf16Buf::from(source.text.as_str());
            let mut offset = 0;
            for cluster in clusters(&buffer) {
                let text = String::from_utf16_lossy(cluster);
                formatter.format_cluster(&text, offset, cluster.len())?;
                offset += cluster.len();
            }
            log::debug!("{}: {} code units", source.name, buffer.len());
            progress.file_completed(&source.name);
        }
        progress.finish();
        formatter.finish()
    }
}
