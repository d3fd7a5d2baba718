//! CLI subcommand implementations

pub mod count;
pub mod segment;

use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}

/// One input source: display name plus its full text.
pub(crate) struct Source {
    pub name: String,
    pub text: String,
}

/// Gather sources from patterns, or stdin when none are given.
pub(crate) fn gather_sources(inputs: &[String]) -> Result<Vec<Source>> {
    let use_stdin = inputs.is_empty() || (inputs.len() == 1 && inputs[0] == "-");
    if use_stdin {
        return Ok(vec![Source {
            name: "-".to_string(),
            text: FileReader::read_stdin()?,
        }]);
    }
    let mut sources = Vec::new();
    for path in resolve_patterns(inputs)? {
        let text = FileReader::read_text(&path)?;
        sources.push(Source {
            name: path.display().to_string(),
            text,
        });
    }
    Ok(sources)
}
