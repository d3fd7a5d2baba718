//! Count command implementation

use super::{gather_sources, init_logging};
use anyhow::Result;
use clap::Args;
use kireme_core::str_cluster_count;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or glob patterns; stdin when omitted or "-"
    #[arg(value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let sources = gather_sources(&self.input)?;
        let mut total = 0;
        for source in &sources {
            let count = str_cluster_count(&source.text);
            total += count;
            if sources.len() == 1 {
                println!("{count}");
            } else {
                println!("{count}\t{}", source.name);
            }
        }
        if sources.len() > 1 {
            println!("{total}\ttotal");
        }
        Ok(())
    }
}
