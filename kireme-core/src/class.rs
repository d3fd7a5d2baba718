//! Grapheme break property classes

/// Grapheme cluster break property of a Unicode scalar value.
///
/// Every scalar maps to exactly one class; scalars the property table does
/// not cover default to [`BreakClass::Other`]. `ExtPict` is layered on top
/// of the standard break-class set (it is a separate UCD property) so the
/// boundary rules can recognize emoji ZWJ sequences.
///
/// The discriminants are the values stored in the packed property table and
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BreakClass {
    /// No other class applies
    Other = 0,
    /// Characters gluing to the cluster that follows them
    Prepend = 1,
    /// Carriage return
    Cr = 2,
    /// Line feed
    Lf = 3,
    /// Control and formatting characters, line/paragraph separators
    Control = 4,
    /// Combining marks, zero-width non-joiner, emoji modifiers
    Extend = 5,
    /// Regional indicator symbols, paired into flag emoji
    RegionalIndicator = 6,
    /// Spacing combining marks
    SpacingMark = 7,
    /// Hangul leading consonant (choseong)
    L = 8,
    /// Hangul vowel (jungseong)
    V = 9,
    /// Hangul trailing consonant (jongseong)
    T = 10,
    /// Precomposed Hangul LV syllable
    Lv = 11,
    /// Precomposed Hangul LVT syllable
    Lvt = 12,
    /// Zero-width joiner
    Zwj = 13,
    /// Extended pictographic (emoji-capable) characters
    ExtPict = 14,
}

impl BreakClass {
    /// Number of distinct classes; table values must be below this.
    pub const COUNT: u8 = 15;

    /// Decode a raw table value.
    pub fn from_raw(raw: u8) -> Option<Self> {
        use BreakClass::*;
        Some(match raw {
            0 => Other,
            1 => Prepend,
            2 => Cr,
            3 => Lf,
            4 => Control,
            5 => Extend,
            6 => RegionalIndicator,
            7 => SpacingMark,
            8 => L,
            9 => V,
            10 => T,
            11 => Lv,
            12 => Lvt,
            13 => Zwj,
            14 => ExtPict,
            _ => return None,
        })
    }

    /// True for the classes that always break on both sides (except CRLF).
    #[inline]
    pub(crate) fn is_control(self) -> bool {
        matches!(self, BreakClass::Control | BreakClass::Cr | BreakClass::Lf)
    }
}
