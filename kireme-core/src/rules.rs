//! Ordered grapheme boundary rules
//!
//! A single rule table serves both scan directions, parameterized by
//! [`Direction`], so the two scanners cannot silently diverge. The evaluator
//! sees a window of break classes in text order:
//!
//! - forward: `[origin] mid.. candidate` - `origin` is the class at the scan
//!   start, `candidate` the class at the offset under test;
//! - reverse: `candidate ..mid [origin]` - `origin` is the class ending at
//!   the fixed end, `candidate` the class just read while walking left.
//!
//! `mid` holds the classes already crossed; it grows by one per absorbed
//! step. First matching rule wins.

use crate::class::BreakClass;

/// Scan direction a rule window is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Window anchored at its left end, candidate on the right
    Forward,
    /// Window anchored at its right end, candidate on the left
    Reverse,
}

/// Outcome of evaluating one candidate boundary.
///
/// In forward scans every verdict except `NotBreak` breaks at the candidate
/// offset. Reverse scans also use the verdict to place boundaries behind
/// already-absorbed classes: the two regional verdicts sit inside the
/// trailing flag run, and `Break` sits before the pictograph of a failed
/// emoji joiner absorption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryVerdict {
    /// No boundary here; absorb the candidate class and continue
    NotBreak,
    /// Boundary at the candidate offset
    BreakStart,
    /// Boundary at the candidate offset, reached through an absorbed run
    Break,
    /// Boundary immediately before the last regional indicator of the run
    BreakLastRegional,
    /// Boundary immediately before the penultimate regional indicator
    BreakPenultimateRegional,
}

/// `L x (L|V|LV|LVT)`, `(LV|V) x (V|T)`, `(LVT|T) x T`.
#[inline]
fn hangul_joins(left: BreakClass, right: BreakClass) -> bool {
    use BreakClass::*;
    match left {
        L => matches!(right, L | V | Lv | Lvt),
        Lv | V => matches!(right, V | T),
        Lvt | T => right == T,
        _ => false,
    }
}

/// Regional indicators at the front of `mid ++ [origin]` (reverse windows).
pub(crate) fn ri_run_from_end(mid: &[BreakClass], origin: BreakClass) -> usize {
    let mut count = 0;
    for &class in mid {
        if class != BreakClass::RegionalIndicator {
            return count;
        }
        count += 1;
    }
    if origin == BreakClass::RegionalIndicator {
        count += 1;
    }
    count
}

/// Regional indicators at the back of `[origin] ++ mid` (forward windows).
fn ri_run_before_candidate(origin: BreakClass, mid: &[BreakClass]) -> usize {
    let mut count = 0;
    for &class in mid.iter().rev() {
        if class != BreakClass::RegionalIndicator {
            return count;
        }
        count += 1;
    }
    if origin == BreakClass::RegionalIndicator {
        count += 1;
    }
    count
}

/// Position of the pictograph completing `Extend* ZWJ ExtPict` at the front
/// of `mid ++ [origin]`, while a reverse scan still owes that absorption a
/// left-hand pictograph. Index `mid.len()` designates `origin`.
pub(crate) fn pending_zwj_pictographic(mid: &[BreakClass], origin: BreakClass) -> Option<usize> {
    use BreakClass::*;
    let rest_len = mid.len() + 1;
    let at = |i: usize| if i < mid.len() { mid[i] } else { origin };
    let mut i = 0;
    while i < rest_len && at(i) == Extend {
        i += 1;
    }
    if i + 1 < rest_len && at(i) == Zwj && at(i + 1) == ExtPict {
        Some(i + 1)
    } else {
        None
    }
}

/// True when the ZWJ adjacent to a forward candidate follows
/// `ExtPict Extend*` inside the window `[origin] ++ mid`.
fn zwj_follows_pictographic(origin: BreakClass, mid: &[BreakClass]) -> bool {
    use BreakClass::*;
    // The ZWJ is the window's last element; walk left from just before it.
    let mut i = mid.len(); // virtual index of the ZWJ in [origin] ++ mid
    while i > 0 {
        i -= 1;
        let class = if i == 0 { origin } else { mid[i - 1] };
        match class {
            Extend => continue,
            ExtPict => return true,
            _ => return false,
        }
    }
    false
}

/// Evaluate one candidate boundary. First matching rule wins.
pub(crate) fn evaluate(
    direction: Direction,
    origin: BreakClass,
    mid: &[BreakClass],
    candidate: BreakClass,
) -> BoundaryVerdict {
    use BoundaryVerdict::*;
    use BreakClass::*;
    match direction {
        Direction::Forward => {
            let prev = mid.last().copied().unwrap_or(origin);
            let next = candidate;

            // Regional indicator runs: never split inside an odd-length
            // run, always split after a completed pair.
            if next == RegionalIndicator {
                let run = ri_run_before_candidate(origin, mid);
                if run > 0 {
                    return if run % 2 == 0 { BreakLastRegional } else { NotBreak };
                }
            }
            // Never split a CRLF pair.
            if prev == Cr && next == Lf {
                return NotBreak;
            }
            // Break after controls.
            if prev.is_control() {
                if mid.iter().all(|&c| c == Extend) && next != Extend {
                    return Break;
                }
                return BreakStart;
            }
            // Break before controls.
            if next.is_control() {
                return BreakStart;
            }
            // Hangul syllable composition.
            if hangul_joins(prev, next) {
                return NotBreak;
            }
            // Extending marks and joiners attach to the cluster.
            if next == Extend || next == Zwj {
                return NotBreak;
            }
            if next == SpacingMark {
                return NotBreak;
            }
            if prev == Prepend {
                return NotBreak;
            }
            // Emoji ZWJ sequence: ExtPict Extend* ZWJ x ExtPict.
            if prev == Zwj && next == ExtPict && zwj_follows_pictographic(origin, mid) {
                return NotBreak;
            }
            // A regional run enclosed in the window has already been paired
            // off; anything after it starts a new cluster.
            if mid.contains(&RegionalIndicator) {
                return Break;
            }
            if prev == RegionalIndicator && next == RegionalIndicator {
                return NotBreak;
            }
            BreakStart
        }
        Direction::Reverse => {
            let target = candidate;
            let adjacent = mid.first().copied().unwrap_or(origin);

            // Regional indicator parity, resolved once the class left of
            // the run is known.
            if target != RegionalIndicator {
                let run = ri_run_from_end(mid, origin);
                if run >= 3 {
                    return if run % 2 == 1 {
                        BreakLastRegional
                    } else {
                        BreakPenultimateRegional
                    };
                }
                // Runs of one or two have no internal boundary; the pair
                // rules below decide the run start.
            }
            // Never split a CRLF pair.
            if target == Cr && adjacent == Lf {
                return NotBreak;
            }
            // A pending ZWJ pictograph absorption fails unless the class to
            // its left keeps the lookback alive; the boundary before the
            // pictograph must not be silently absorbed.
            if target != Extend
                && target != ExtPict
                && pending_zwj_pictographic(mid, origin).is_some()
            {
                return Break;
            }
            // Break after controls.
            if target.is_control() {
                return BreakStart;
            }
            // Break before controls.
            if adjacent.is_control() {
                return BreakStart;
            }
            // Hangul syllable composition.
            if hangul_joins(target, adjacent) {
                return NotBreak;
            }
            // Extending marks and joiners attach to the cluster.
            if adjacent == Extend || adjacent == Zwj {
                return NotBreak;
            }
            if adjacent == SpacingMark {
                return NotBreak;
            }
            if target == Prepend {
                return NotBreak;
            }
            // Emoji ZWJ sequence, provisionally absorbed until the class
            // left of the joiner is known.
            if target == Zwj && adjacent == ExtPict {
                return NotBreak;
            }
            if target == RegionalIndicator && adjacent == RegionalIndicator {
                return NotBreak;
            }
            BreakStart
        }
    }
}
