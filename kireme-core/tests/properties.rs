//! Algebraic properties of the boundary engine
//!
//! These hold for every buffer, including malformed ones with unpaired
//! surrogates: segmentation covers the input exactly, counting agrees with
//! materializing, re-segmenting is a fixed point, and the two scan
//! directions are symmetric.

use kireme_core::{cluster_count, clusters, next_break, prev_break};
use proptest::prelude::*;

/// Scalars that exercise every break class and their interactions.
const INTERESTING: &[u32] = &[
    0x0061, 0x0062, 0x0020, 0x000D, 0x000A, 0x0001, 0x034F, 0x0300, 0x0308, 0x0600, 0x0903,
    0x1100, 0x1160, 0x11A8, 0xAC00, 0xAC01, 0x200D, 0x231A, 0x2701, 0x0378, 0x1F1E6, 0x1F1E7,
    0x1F1E8, 0x1F3FB, 0x1F3FF, 0x1F466, 0x1F469, 0x1F600, 0x2764, 0xFE0F,
];

fn encode(scalars: &[u32]) -> Vec<u16> {
    let mut units = Vec::new();
    for &scalar in scalars {
        if scalar >= 0x10000 {
            units.push(0xD800 + ((scalar - 0x10000) >> 10) as u16);
            units.push(0xDC00 + ((scalar - 0x10000) & 0x3FF) as u16);
        } else {
            units.push(scalar as u16);
        }
    }
    units
}

fn interesting_buffer() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(prop::sample::select(INTERESTING), 0..16).prop_map(|s| encode(&s))
}

/// Raw code units, surrogate halves included.
fn raw_buffer() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..24)
}

fn boundaries(units: &[u16]) -> Vec<usize> {
    let mut out = vec![0];
    let mut position = 0;
    while position < units.len() {
        let next = next_break(units, position);
        assert!(next > position, "scanner must make progress");
        out.push(next);
        position = next;
    }
    out
}

proptest! {
    #[test]
    fn coverage(units in interesting_buffer()) {
        let parts = clusters(&units);
        let rebuilt: Vec<u16> = parts.concat();
        prop_assert_eq!(rebuilt, units);
    }

    #[test]
    fn count_consistency(units in interesting_buffer()) {
        prop_assert_eq!(cluster_count(&units), clusters(&units).len());
    }

    #[test]
    fn idempotence(units in interesting_buffer()) {
        let rebuilt: Vec<u16> = clusters(&units).concat();
        prop_assert_eq!(clusters(&rebuilt), clusters(&units));
    }

    #[test]
    fn symmetry(units in interesting_buffer()) {
        let bounds = boundaries(&units);
        for (i, &b) in bounds.iter().enumerate() {
            if b == 0 {
                continue;
            }
            // The boundary preceding b...
            prop_assert_eq!(prev_break(&units, b), bounds[i - 1]);
            // ...and the round trip back to b.
            prop_assert_eq!(next_break(&units, bounds[i - 1]), b);
        }
    }

    #[test]
    fn clamping(units in interesting_buffer(), offset in 0usize..64) {
        let len = units.len();
        prop_assert_eq!(prev_break(&units, len + offset), prev_break(&units, len));
        prop_assert!(next_break(&units, len + offset) == len);
        prop_assert!(prev_break(&units, offset.min(len)) <= len);
    }

    #[test]
    fn malformed_input_never_panics(units in raw_buffer()) {
        let parts = clusters(&units);
        let rebuilt: Vec<u16> = parts.concat();
        prop_assert_eq!(rebuilt, units.clone());
        prop_assert_eq!(cluster_count(&units), parts.len());
        for offset in 0..=units.len() {
            let forward = next_break(&units, offset);
            prop_assert!(forward <= units.len());
            let backward = prev_break(&units, offset);
            prop_assert!(backward <= offset.min(units.len()));
        }
    }
}
