//! Forward and backward boundary scanners
//!
//! Both scanners walk one scalar at a time, classify it, and hand the
//! accumulated window to the rule evaluator. Offsets are UTF-16 code unit
//! offsets; a surrogate pair advances the cursor by two units.

use smallvec::SmallVec;

use crate::class::BreakClass;
use crate::rules::{
    evaluate, pending_zwj_pictographic, ri_run_from_end, BoundaryVerdict, Direction,
};
use crate::table::classify;
use crate::utf16::{scalar_at, scalar_before};

/// Scan windows are almost always a handful of classes deep.
type ClassWindow = SmallVec<[BreakClass; 8]>;
type WidthWindow = SmallVec<[u8; 8]>;

#[inline]
fn class_at(units: &[u16], index: usize) -> (BreakClass, usize) {
    let (scalar, width) = scalar_at(units, index);
    (classify(scalar), width)
}

#[inline]
fn class_before(units: &[u16], index: usize) -> (BreakClass, usize) {
    let (scalar, width) = scalar_before(units, index);
    (classify(scalar), width)
}

/// Next grapheme cluster boundary strictly after `from`.
///
/// Returns a code unit offset greater than `from`, or `units.len()` when no
/// boundary precedes the end of the buffer. Out-of-range indices clamp:
/// anything at or past the last unit yields `units.len()`.
pub fn next_break(units: &[u16], from: usize) -> usize {
    let len = units.len();
    if from.saturating_add(1) >= len {
        return len;
    }
    let (origin, width) = class_at(units, from);
    let mut mid = ClassWindow::new();
    let mut candidate = from + width;
    while candidate < len {
        let (next, width) = class_at(units, candidate);
        if evaluate(Direction::Forward, origin, &mid, next) != BoundaryVerdict::NotBreak {
            return candidate;
        }
        mid.push(next);
        candidate += width;
    }
    len
}

/// Previous grapheme cluster boundary strictly before `from`.
///
/// Returns a code unit offset less than `from`, or 0. `from` greater than
/// `units.len()` clamps to the length; `from <= 1` yields 0.
pub fn prev_break(units: &[u16], from: usize) -> usize {
    let len = units.len();
    let from = from.min(len);
    if from <= 1 {
        return 0;
    }
    let (origin, origin_width) = class_before(units, from);
    let origin_start = from - origin_width;
    let mut mid = ClassWindow::new();
    let mut widths = WidthWindow::new();
    let mut cursor = origin_start;
    loop {
        if cursor == 0 {
            // Virtual start of text: one final evaluation resolves pending
            // regional-indicator parity and emoji joiner absorptions.
            let verdict = evaluate(Direction::Reverse, origin, &mid, BreakClass::Other);
            if verdict == BoundaryVerdict::NotBreak {
                return 0;
            }
            return resolve_reverse(verdict, origin, &mid, &widths, 0, origin_start);
        }
        let (target, width) = class_before(units, cursor);
        let verdict = evaluate(Direction::Reverse, origin, &mid, target);
        if verdict == BoundaryVerdict::NotBreak {
            mid.insert(0, target);
            widths.insert(0, width as u8);
            cursor -= width;
            continue;
        }
        return resolve_reverse(verdict, origin, &mid, &widths, cursor, origin_start);
    }
}

/// Translate a reverse verdict into a code unit offset.
///
/// `cursor` is the candidate offset (start of the window's leftmost known
/// scalar is just below it); `mid` and `widths` describe the absorbed
/// classes sitting at `cursor..`, and `origin_start` is where the fixed-end
/// scalar begins.
fn resolve_reverse(
    verdict: BoundaryVerdict,
    origin: BreakClass,
    mid: &[BreakClass],
    widths: &[u8],
    cursor: usize,
    origin_start: usize,
) -> usize {
    // Start offset of window element `j`, where `j == mid.len()` is the
    // fixed-end scalar.
    let start_of = |j: usize| -> usize {
        if j == mid.len() {
            origin_start
        } else {
            cursor + widths[..j].iter().map(|&w| usize::from(w)).sum::<usize>()
        }
    };
    match verdict {
        BoundaryVerdict::BreakStart | BoundaryVerdict::NotBreak => cursor,
        BoundaryVerdict::BreakLastRegional => {
            let run = ri_run_from_end(mid, origin);
            start_of(run - 1)
        }
        BoundaryVerdict::BreakPenultimateRegional => {
            let run = ri_run_from_end(mid, origin);
            start_of(run - 2)
        }
        BoundaryVerdict::Break => match pending_zwj_pictographic(mid, origin) {
            Some(pictograph) => start_of(pictograph),
            None => cursor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf16::Utf16Buf;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn empty_and_tiny_buffers() {
        assert_eq!(next_break(&[], 0), 0);
        assert_eq!(next_break(&units("a"), 0), 1);
        assert_eq!(prev_break(&[], 0), 0);
        assert_eq!(prev_break(&units("a"), 1), 0);
        assert_eq!(prev_break(&units("ab"), 1), 0);
    }

    #[test]
    fn index_clamping() {
        let text = units("abc");
        assert_eq!(next_break(&text, 2), 3);
        assert_eq!(next_break(&text, 3), 3);
        assert_eq!(next_break(&text, 100), 3);
        assert_eq!(prev_break(&text, 100), 2);
        assert_eq!(prev_break(&text, 0), 0);
    }

    #[test]
    fn ascii_breaks_everywhere() {
        let text = units("abc");
        assert_eq!(next_break(&text, 0), 1);
        assert_eq!(next_break(&text, 1), 2);
        assert_eq!(prev_break(&text, 3), 2);
        assert_eq!(prev_break(&text, 2), 1);
    }

    #[test]
    fn crlf_is_one_cluster() {
        let text = units("A\r\nB");
        assert_eq!(next_break(&text, 0), 1);
        assert_eq!(next_break(&text, 1), 3);
        assert_eq!(prev_break(&text, 4), 3);
        assert_eq!(prev_break(&text, 3), 1);
        // From between CR and LF (not a boundary): nearest boundary left.
        assert_eq!(prev_break(&text, 2), 1);
    }

    #[test]
    fn combining_marks_attach() {
        let text = units("a\u{0308}b");
        assert_eq!(next_break(&text, 0), 2);
        assert_eq!(prev_break(&text, 3), 2);
        assert_eq!(prev_break(&text, 2), 0);
    }

    #[test]
    fn flag_pairs_hold_together() {
        // US flag: two regional indicators, four code units.
        let text = units("\u{1F1FA}\u{1F1F8}");
        assert_eq!(next_break(&text, 0), 4);
        assert_eq!(prev_break(&text, 4), 0);
    }

    #[test]
    fn odd_flag_runs_split_after_pairs() {
        // Three regional indicators: pair then singleton.
        let text = units("\u{1F1FA}\u{1F1F8}\u{1F1E9}");
        assert_eq!(next_break(&text, 0), 4);
        assert_eq!(next_break(&text, 4), 6);
        assert_eq!(prev_break(&text, 6), 4);
        assert_eq!(prev_break(&text, 4), 0);
    }

    #[test]
    fn flag_run_with_trailing_mark() {
        // Parity still resolves when the run carries an absorbed mark.
        let text = units("\u{1F1FA}\u{1F1F8}\u{1F1E9}\u{0300}");
        assert_eq!(prev_break(&text, 7), 4);
    }

    #[test]
    fn family_emoji_is_one_cluster() {
        let text = units("\u{1F468}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}");
        assert_eq!(next_break(&text, 0), text.len());
        assert_eq!(prev_break(&text, text.len()), 0);
    }

    #[test]
    fn unconfirmed_zwj_sequence_splits_backward() {
        // a ZWJ <pictograph>: the joiner belongs to `a`, the pictograph
        // starts its own cluster, and the backward scan must not absorb
        // the boundary between them.
        let text = units("a\u{200D}\u{1F600}");
        assert_eq!(next_break(&text, 0), 2);
        assert_eq!(prev_break(&text, 4), 2);
        // Same with an extending mark between base and joiner.
        let text = units("a\u{0300}\u{200D}\u{1F600}");
        assert_eq!(prev_break(&text, 5), 3);
        // And with nothing at all before the joiner chain.
        let text = units("\u{0300}\u{200D}\u{1F600}");
        assert_eq!(prev_break(&text, 4), 2);
    }

    #[test]
    fn hangul_syllables() {
        // L V T composes into one syllable.
        let text = units("\u{1100}\u{1160}\u{11A8}");
        assert_eq!(next_break(&text, 0), 3);
        assert_eq!(prev_break(&text, 3), 0);
        // LVT + T extends, then a new L starts a syllable.
        let text = units("\u{AC01}\u{11A8}\u{1100}");
        assert_eq!(next_break(&text, 0), 2);
        assert_eq!(prev_break(&text, 3), 2);
    }

    #[test]
    fn unpaired_surrogates_are_inert() {
        // A lone surrogate classifies as a control: breaks on both sides.
        let text = vec![0x0061, 0xD800, 0x0062];
        assert_eq!(next_break(&text, 0), 1);
        assert_eq!(next_break(&text, 1), 2);
        assert_eq!(prev_break(&text, 3), 2);
        assert_eq!(prev_break(&text, 2), 1);
    }

    #[test]
    fn prepend_glues_forward() {
        let text = units("\u{0600}a");
        assert_eq!(next_break(&text, 0), 2);
        assert_eq!(prev_break(&text, 2), 0);
    }

    #[test]
    fn str_buffer_roundtrip() {
        let buf = Utf16Buf::from("e\u{0301}\u{1F1EF}\u{1F1F5}");
        assert_eq!(next_break(&buf, 0), 2);
        assert_eq!(next_break(&buf, 2), 6);
        assert_eq!(prev_break(&buf, 6), 2);
    }
}
