//! Error types for property table decoding

use thiserror::Error;

/// Errors produced while decoding a packed property table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Blob does not start with the expected magic bytes
    #[error("bad magic: not a grapheme property table")]
    BadMagic,

    /// Blob uses a format revision this build cannot read
    #[error("unsupported table format version {0}")]
    UnsupportedFormat(u16),

    /// Blob is shorter than its header claims
    #[error("truncated table: need {expected} bytes, have {actual}")]
    Truncated {
        /// Bytes required by the header
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// Index length does not cover the full scalar range for the block shift
    #[error("index length {0} does not cover the scalar range")]
    BadIndexLength(u32),

    /// A block index entry points past the block array
    #[error("block index {index} out of range ({blocks} blocks)")]
    BlockOutOfRange {
        /// Offending index entry
        index: u16,
        /// Number of blocks in the table
        blocks: u32,
    },

    /// A value in the block array is not a valid break class
    #[error("invalid break class value {0}")]
    InvalidClass(u8),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TableError::BadMagic.to_string(),
            "bad magic: not a grapheme property table"
        );
        assert_eq!(
            TableError::UnsupportedFormat(7).to_string(),
            "unsupported table format version 7"
        );
        assert_eq!(
            TableError::Truncated {
                expected: 100,
                actual: 10
            }
            .to_string(),
            "truncated table: need 100 bytes, have 10"
        );
        assert_eq!(
            TableError::InvalidClass(200).to_string(),
            "invalid break class value 200"
        );
    }
}
