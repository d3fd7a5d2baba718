//! Grapheme cluster boundary detection for UTF-16 text buffers
//!
//! This crate determines the legal split points between user-perceived
//! characters in a buffer of UTF-16 code units, following the ordered
//! grapheme boundary rules of the Unicode text segmentation standard:
//! CRLF pairs, combining marks, Hangul syllable composition, regional
//! indicator (flag) pairing, and extended-pictographic ZWJ emoji
//! sequences.
//!
//! The public surface is four operations plus the classifier they share:
//!
//! - [`next_break`] - nearest boundary after an offset
//! - [`prev_break`] - nearest boundary before an offset
//! - [`clusters`] / [`cluster_count`] - whole-buffer segmentation
//! - [`classify`] - break property of a single scalar value
//!
//! Everything is purely functional and reentrant. The only shared state is
//! the property table, embedded as a packed blob and decoded once on first
//! use; it is immutable afterwards and safe for concurrent reads. Malformed
//! input never fails: unpaired surrogates classify by their own code unit
//! value and out-of-range offsets clamp.
//!
//! # Example
//!
//! ```rust
//! use kireme_core::{next_break, prev_break, str_clusters};
//!
//! // A flag emoji is two scalars (four code units) but one cluster.
//! let flag: Vec<u16> = "\u{1F1FA}\u{1F1F8}".encode_utf16().collect();
//! assert_eq!(next_break(&flag, 0), 4);
//! assert_eq!(prev_break(&flag, 4), 0);
//!
//! assert_eq!(str_clusters("A\r\nB"), vec!["A", "\r\n", "B"]);
//! ```

#![warn(missing_docs)]

pub mod class;
pub mod error;
mod rules;
pub mod scan;
pub mod segment;
pub mod table;
pub mod utf16;

pub use class::BreakClass;
pub use error::TableError;
pub use scan::{next_break, prev_break};
pub use segment::{cluster_count, clusters, str_cluster_count, str_clusters};
pub use table::{classify, unicode_version, PropertyTable};
pub use utf16::Utf16Buf;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmentation_walks_match_scans() {
        let buf = Utf16Buf::from("e\u{0301}\u{1F1EF}\u{1F1F5}\u{AC01}x");
        let parts = clusters(&buf);
        let mut offset = 0;
        for part in &parts {
            let end = offset + part.len();
            assert_eq!(next_break(&buf, offset), end);
            assert_eq!(prev_break(&buf, end), offset);
            offset = end;
        }
        assert_eq!(offset, buf.len());
        assert_eq!(cluster_count(&buf), parts.len());
    }

    #[test]
    fn table_version_is_pinned() {
        let (major, minor, micro) = unicode_version();
        assert_eq!((major, minor, micro), (17, 0, 0));
    }
}
