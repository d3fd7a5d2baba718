//! Whole-buffer segmentation built on the forward scanner

use crate::scan::next_break;
use crate::utf16::Utf16Buf;

/// Split a buffer into its grapheme clusters.
///
/// Returns the ordered, materialized sequence of cluster slices; their
/// concatenation is exactly the input. An empty buffer yields no clusters.
pub fn clusters(units: &[u16]) -> Vec<&[u16]> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < units.len() {
        let end = next_break(units, start);
        out.push(&units[start..end]);
        start = end;
    }
    out
}

/// Count the grapheme clusters of a buffer without materializing them.
///
/// Equals `clusters(units).len()` for every input.
pub fn cluster_count(units: &[u16]) -> usize {
    let mut count = 0;
    let mut start = 0;
    while start < units.len() {
        start = next_break(units, start);
        count += 1;
    }
    count
}

/// Split a string into grapheme clusters, transcoding through UTF-16.
pub fn str_clusters(text: &str) -> Vec<String> {
    let buf = Utf16Buf::from(text);
    clusters(&buf)
        .into_iter()
        .map(String::from_utf16_lossy)
        .collect()
}

/// Count the grapheme clusters of a string.
pub fn str_cluster_count(text: &str) -> usize {
    let buf = Utf16Buf::from(text);
    cluster_count(&buf)
}
