//! kireme - grapheme cluster segmentation from the command line

use clap::{Parser, Subcommand};
use kireme_cli::commands::{count::CountArgs, segment::SegmentArgs};

#[derive(Parser)]
#[command(
    name = "kireme",
    version,
    about = "Split text into user-perceived characters (grapheme clusters)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split input into grapheme clusters
    Segment(SegmentArgs),
    /// Count grapheme clusters
    Count(CountArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Count(args) => args.execute(),
    }
}
