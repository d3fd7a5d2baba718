//! Kireme CLI library
//!
//! Command-line front end for the kireme grapheme cluster boundary
//! engine: splits files or stdin into user-perceived characters, or
//! counts them.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
