//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Input is not valid UTF-8 text
    InvalidEncoding(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidEncoding(path) => write!(f, "Not valid UTF-8 text: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_invalid_encoding_display() {
        let error = CliError::InvalidEncoding("blob.bin".to_string());
        assert_eq!(error.to_string(), "Not valid UTF-8 text: blob.bin");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("test.txt".to_string());
        let _: &dyn std::error::Error = &error;
        let debug = format!("{:?}", error);
        assert!(debug.contains("FileNotFound"));
    }
}
